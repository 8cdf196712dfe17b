#![forbid(unsafe_code)]

//! `wasm-bindgen` exports for the PortfolioRunner.
//!
//! This module wraps [`super::runner_core::RunnerCore`] with browser
//! services: `localStorage` for the language preference, `fetch` for
//! contact delivery, a 2D canvas for the background and
//! `requestAnimationFrame` for its frame loop. Only compiled on `wasm32`
//! targets.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::io;
use std::rc::{Rc, Weak};

use folio_content::SiteConfig;
use folio_runtime::{
    CancellationToken, Cmd, FrameCallback, FrameError, FrameScheduler, FrameSubscription,
};
use folio_scene::{Container, FLOATS_PER_SEGMENT};
use folio_site::{
    BACKGROUND_CONTAINER_ID, ContactPayload, ContactTransport, DeliveryError, DeliveryResult,
    PreferenceStore, StorageError, reveal_targets,
};
use js_sys::{Array, Reflect};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    AbortController, CanvasRenderingContext2d, Headers, HtmlCanvasElement, Request, RequestInit,
    Response, Window,
};

use super::runner_core::RunnerCore;

fn console_call(method: &str, msg: &str) {
    let global = js_sys::global();
    let Ok(console) = Reflect::get(&global, &"console".into()) else {
        return;
    };
    let Ok(func) = Reflect::get(&console, &method.into()) else {
        return;
    };
    let Ok(func) = func.dyn_into::<js_sys::Function>() else {
        return;
    };
    let _ = func.call1(&console, &JsValue::from_str(msg));
}

fn console_error(msg: &str) {
    console_call("error", msg);
}

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = if let Some(loc) = info.location() {
                format!(
                    "panic at {}:{}:{}: {info}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                )
            } else {
                format!("panic: {info}")
            };
            console_error(&msg);
        }));
    });
}

/// Forwards each formatted tracing line to `console.log`.
struct ConsoleWriter;

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let line = String::from_utf8_lossy(buf);
        let line = line.trim_end();
        if !line.is_empty() {
            console_call("log", line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn install_tracing() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        let installed = tracing_subscriber::fmt()
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(|| ConsoleWriter)
            .try_init();
        if let Err(err) = installed {
            console_error(&format!("tracing subscriber not installed: {err}"));
        }
    });
}

fn set_js(obj: &js_sys::Object, key: &str, value: JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), &value);
}

fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

/// Seed for the background when the config does not pin one.
fn random_seed() -> u64 {
    let hi = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let lo = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    (hi << 32) | lo
}

// ── localStorage ──────────────────────────────────────────────────────

/// [`PreferenceStore`] over `window.localStorage`.
///
/// Private browsing and sandboxed frames may refuse storage; those errors
/// surface as [`StorageError`] and the page keeps working unpersisted.
struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = window().map_err(|e| StorageError::Unavailable(js_reason(&e)))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_reason(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is null".into()))
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(js_reason(&e)))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_owned(),
                reason: js_reason(&e),
            })
    }
}

// ── fetch transport ───────────────────────────────────────────────────

/// Posts the contact payload as JSON to a configured endpoint.
///
/// Cancelling the token aborts the request through an `AbortController`.
struct FetchTransport {
    endpoint: String,
}

async fn post_json(endpoint: &str, body: &str, token: &CancellationToken) -> DeliveryResult {
    let network = |e: JsValue| DeliveryError::Network(js_reason(&e));
    let window = window().map_err(network)?;
    let controller = AbortController::new().map_err(network)?;
    let abort = controller.clone();
    token.on_cancel(move || abort.abort());

    let headers = Headers::new().map_err(network)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(network)?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));
    init.set_signal(Some(&controller.signal()));
    let request = Request::new_with_str_and_init(endpoint, &init).map_err(network)?;

    let response = match JsFuture::from(window.fetch_with_request(&request)).await {
        Ok(value) => value,
        Err(_) if token.is_cancelled() => return Err(DeliveryError::Cancelled),
        Err(err) => return Err(network(err)),
    };
    let response: Response = response.dyn_into().map_err(network)?;
    if response.ok() {
        Ok(())
    } else {
        Err(DeliveryError::Rejected {
            status: response.status(),
        })
    }
}

impl ContactTransport for FetchTransport {
    fn name(&self) -> &'static str {
        "fetch"
    }

    fn send(&self, payload: ContactPayload, token: CancellationToken) -> Cmd<DeliveryResult> {
        let body = match payload.to_json() {
            Ok(body) => body,
            Err(err) => return Cmd::msg(Err(DeliveryError::Network(err.to_string()))),
        };
        let endpoint = self.endpoint.clone();
        Cmd::task("contact-fetch", move |mailbox| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = post_json(&endpoint, &body, &token).await;
                if token.is_cancelled() {
                    debug!("contact delivery finished after cancellation; dropped");
                    return;
                }
                mailbox.post(result);
            });
        })
    }
}

// ── canvas painter ────────────────────────────────────────────────────

/// Draws the background's line buffer onto the hero canvas.
struct CanvasPainter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Match the backing store to the laid-out size and return it.
    fn sync_size(&self) -> Container {
        let width = self.canvas.client_width().max(0) as u32;
        let height = self.canvas.client_height().max(0) as u32;
        if self.canvas.width() != width {
            self.canvas.set_width(width);
        }
        if self.canvas.height() != height {
            self.canvas.set_height(height);
        }
        Container::new(width, height)
    }

    fn paint(&self, lines: &[f32]) {
        let (w, h) = (f64::from(self.canvas.width()), f64::from(self.canvas.height()));
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.ctx.set_line_width(1.0);
        self.ctx.set_global_alpha(0.6);
        for seg in lines.chunks_exact(FLOATS_PER_SEGMENT) {
            let [x0, y0, x1, y1, r, g, b] = [seg[0], seg[1], seg[2], seg[3], seg[4], seg[5], seg[6]];
            self.ctx
                .set_stroke_style_str(&format!("rgb({} {} {})", r as u8, g as u8, b as u8));
            self.ctx.begin_path();
            self.ctx.move_to(f64::from(x0), f64::from(y0));
            self.ctx.line_to(f64::from(x1), f64::from(y1));
            self.ctx.stroke();
        }
    }
}

// ── requestAnimationFrame ─────────────────────────────────────────────

struct LoopSlot {
    raf_id: Cell<i32>,
    closure: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

/// [`FrameScheduler`] over `requestAnimationFrame`.
///
/// Each loop re-requests itself after running its callback. The slot owns
/// the closure and the closure only holds a weak reference back, so
/// cancelling drops the closure without leaking a cycle. `cancel` must not
/// be called from inside the loop's own callback.
#[derive(Clone)]
struct AnimationLoop {
    window: Window,
    slots: Rc<RefCell<BTreeMap<u32, Rc<LoopSlot>>>>,
    next: Rc<Cell<u32>>,
}

impl AnimationLoop {
    fn new(window: Window) -> Self {
        Self {
            window,
            slots: Rc::default(),
            next: Rc::default(),
        }
    }
}

impl FrameScheduler for AnimationLoop {
    type Handle = u32;

    fn request(&self, mut callback: FrameCallback) -> Result<u32, FrameError> {
        let slot = Rc::new(LoopSlot {
            raf_id: Cell::new(0),
            closure: RefCell::new(None),
        });
        let weak: Weak<LoopSlot> = Rc::downgrade(&slot);
        let window = self.window.clone();
        let closure = Closure::<dyn FnMut(f64)>::new(move |ts: f64| {
            callback(ts);
            let Some(slot) = weak.upgrade() else {
                return;
            };
            let next = slot
                .closure
                .borrow()
                .as_ref()
                .map(|c| window.request_animation_frame(c.as_ref().unchecked_ref()));
            match next {
                Some(Ok(id)) => slot.raf_id.set(id),
                Some(Err(err)) => warn!(reason = %js_reason(&err), "frame loop stalled"),
                None => {}
            }
        });
        let id = self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(|e| FrameError::Unavailable(js_reason(&e)))?;
        slot.raf_id.set(id);
        *slot.closure.borrow_mut() = Some(closure);

        let handle = self.next.get();
        self.next.set(handle.wrapping_add(1));
        self.slots.borrow_mut().insert(handle, slot);
        Ok(handle)
    }

    fn cancel(&self, handle: u32) {
        let Some(slot) = self.slots.borrow_mut().remove(&handle) else {
            return;
        };
        let _ = self.window.cancel_animation_frame(slot.raf_id.get());
        slot.closure.borrow_mut().take();
    }
}

// ── exports ───────────────────────────────────────────────────────────

/// WASM runner for the portfolio page.
///
/// Host-driven: the page script pushes DOM events, advances time and calls
/// `step()` from its own frame loop, then swaps in the markup from
/// `takeHtml()`. The hero background runs on a separate
/// `requestAnimationFrame` loop owned by the runner while it is mounted.
#[wasm_bindgen]
pub struct PortfolioRunner {
    inner: Rc<RefCell<RunnerCore>>,
    painter: Option<Rc<CanvasPainter>>,
    frames: Option<FrameSubscription<AnimationLoop>>,
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    install_panic_hook();
    install_tracing();
}

#[wasm_bindgen]
impl PortfolioRunner {
    /// Create a runner. `config_toml` replaces the embedded site
    /// configuration when given.
    #[wasm_bindgen(constructor)]
    pub fn new(config_toml: Option<String>) -> Result<PortfolioRunner, JsValue> {
        install_panic_hook();
        install_tracing();
        let config = match config_toml {
            Some(doc) => SiteConfig::from_toml_str(&doc),
            None => SiteConfig::embedded(),
        }
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let browser_language = web_sys::window()
            .and_then(|w| w.navigator().language())
            .unwrap_or_default();
        let transport = config.contact.endpoint.clone().map(|endpoint| {
            debug!(%endpoint, "contact delivery over fetch");
            Rc::new(FetchTransport { endpoint }) as Rc<dyn ContactTransport>
        });
        let core = RunnerCore::new(
            config,
            Rc::new(LocalStorageStore),
            &browser_language,
            transport,
            random_seed(),
        );
        Ok(Self {
            inner: Rc::new(RefCell::new(core)),
            painter: None,
            frames: None,
        })
    }

    /// Initialize the model and render the first frame. Call exactly once.
    pub fn init(&mut self) {
        self.inner.borrow_mut().init();
    }

    /// Advance the deterministic clock by `dt_ms` milliseconds.
    #[wasm_bindgen(js_name = advanceTime)]
    pub fn advance_time(&mut self, dt_ms: f64) {
        self.inner.borrow_mut().advance_time_ms(dt_ms);
    }

    /// Parse a JSON-encoded input and queue it.
    /// Returns `true` if accepted, `false` if malformed or unknown.
    #[wasm_bindgen(js_name = pushEncodedInput)]
    pub fn push_encoded_input(&mut self, json: &str) -> bool {
        match self.inner.borrow_mut().push_encoded_input(json) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "host input rejected");
                false
            }
        }
    }

    /// Process pending messages and render if dirty.
    /// Returns `{ running, rendered, messages_processed, frame_idx,
    /// next_deadline_ms, animating, scroll_to }`.
    pub fn step(&mut self) -> JsValue {
        let report = self.inner.borrow_mut().step();
        let obj = js_sys::Object::new();
        set_js(&obj, "running", report.running.into());
        set_js(&obj, "rendered", report.rendered.into());
        set_js(&obj, "messages_processed", report.messages_processed.into());
        set_js(&obj, "frame_idx", JsValue::from_f64(report.frame_idx as f64));
        set_js(
            &obj,
            "next_deadline_ms",
            report.next_deadline_ms.map_or(JsValue::NULL, JsValue::from_f64),
        );
        set_js(&obj, "animating", report.animating.into());
        set_js(
            &obj,
            "scroll_to",
            report.scroll_to.map_or(JsValue::NULL, JsValue::from_str),
        );
        obj.into()
    }

    /// Markup of the latest frame, or `null` if unchanged since last taken.
    #[wasm_bindgen(js_name = takeHtml)]
    pub fn take_html(&mut self) -> Option<String> {
        self.inner.borrow_mut().take_html()
    }

    /// Drain accumulated log lines. Returns `Array<string>`.
    #[wasm_bindgen(js_name = takeLogs)]
    pub fn take_logs(&mut self) -> Array {
        let logs = self.inner.borrow_mut().take_logs();
        let arr = Array::new();
        for log in logs {
            arr.push(&JsValue::from_str(&log));
        }
        arr
    }

    /// Element ids the host should watch with an `IntersectionObserver`.
    #[wasm_bindgen(js_name = revealTargets)]
    pub fn reveal_targets(&self) -> Array {
        let arr = Array::new();
        for id in reveal_targets() {
            arr.push(&JsValue::from_str(&id));
        }
        arr
    }

    /// Active locale tag.
    pub fn locale(&self) -> String {
        self.inner.borrow().locale().to_owned()
    }

    /// Mount the background on the hero canvas and start its frame loop.
    /// Returns `false` when the canvas is missing or has no area.
    #[wasm_bindgen(js_name = mountScene)]
    pub fn mount_scene(&mut self) -> bool {
        if self.frames.is_some() {
            return true;
        }
        let Ok(window) = window() else {
            return false;
        };
        let canvas = window
            .document()
            .and_then(|d| d.get_element_by_id(BACKGROUND_CONTAINER_ID))
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());
        let painter = match canvas.map(CanvasPainter::from_canvas) {
            Some(Ok(painter)) => Rc::new(painter),
            Some(Err(err)) => {
                warn!(reason = %js_reason(&err), "background canvas unusable");
                return false;
            }
            None => {
                self.inner.borrow_mut().mount_scene(None);
                return false;
            }
        };
        let surface = painter.sync_size();
        if !self.inner.borrow_mut().mount_scene(Some(surface)) {
            return false;
        }

        let core = Rc::clone(&self.inner);
        let paint = Rc::clone(&painter);
        let loop_result =
            FrameSubscription::acquire(AnimationLoop::new(window), "background", move |_ts| {
                // The host may hold the runner while a frame fires; skip it.
                let Ok(mut core) = core.try_borrow_mut() else {
                    return;
                };
                if let Some(lines) = core.frame_scene() {
                    paint.paint(&lines);
                }
            });
        match loop_result {
            Ok(frames) => {
                self.painter = Some(painter);
                self.frames = Some(frames);
                true
            }
            Err(_) => {
                self.inner.borrow_mut().unmount_scene();
                false
            }
        }
    }

    /// Re-read the canvas size after a layout change.
    #[wasm_bindgen(js_name = resizeScene)]
    pub fn resize_scene(&mut self) -> bool {
        let Some(painter) = self.painter.as_ref() else {
            return false;
        };
        let surface = painter.sync_size();
        self.inner.borrow_mut().resize_scene(surface)
    }

    /// Stop the background loop and release the scene.
    #[wasm_bindgen(js_name = unmountScene)]
    pub fn unmount_scene(&mut self) {
        self.frames = None;
        self.painter = None;
        self.inner.borrow_mut().unmount_scene();
    }

    /// Whether the program is still running.
    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.inner.borrow().is_running()
    }

    /// Page teardown: cancel in-flight delivery and stop the background.
    pub fn destroy(&mut self) {
        self.frames = None;
        self.painter = None;
        self.inner.borrow_mut().unmount();
    }
}
