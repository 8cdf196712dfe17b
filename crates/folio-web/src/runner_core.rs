#![forbid(unsafe_code)]

//! Platform-independent runner core wrapping `StepProgram<PortfolioApp>`.
//!
//! This module contains the logic shared between the wasm-bindgen exports
//! and the native test harness. No JS/WASM types here.

use core::time::Duration;
use std::rc::Rc;

use folio_content::SiteConfig;
use folio_runtime::StepProgram;
use folio_scene::{BackgroundConfig, BackgroundScene, Container};
use folio_site::{AppMsg, ContactTransport, PortfolioApp, PreferenceStore};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, warn};

use crate::input::{HostInput, InputParseError, parse_encoded_input};

/// What one [`RunnerCore::step`] did, in the shape handed to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub running: bool,
    pub rendered: bool,
    pub messages_processed: u32,
    pub frame_idx: u64,
    /// Milliseconds until the earliest pending timer; the host arms one
    /// `setTimeout` for it instead of polling.
    pub next_deadline_ms: Option<f64>,
    /// The page wants display frames (scroll progress still settling).
    pub animating: bool,
    /// Section the host should scroll into view.
    pub scroll_to: Option<&'static str>,
}

/// Platform-independent page runner.
pub struct RunnerCore {
    inner: StepProgram<PortfolioApp>,
    background: BackgroundConfig,
    scene: Option<BackgroundScene>,
    rng: SmallRng,
    /// Frame index of the last markup handed out by `take_html`.
    taken_frame: u64,
    logs: Vec<String>,
}

impl RunnerCore {
    /// Build the page. `seed` drives the background layout unless the
    /// configuration pins one.
    pub fn new(
        config: SiteConfig,
        store: Rc<dyn PreferenceStore>,
        browser_language: &str,
        transport: Option<Rc<dyn ContactTransport>>,
        seed: u64,
    ) -> Self {
        let background = config.background.clone();
        let rng = SmallRng::seed_from_u64(background.seed.unwrap_or(seed));
        let app = PortfolioApp::new(config, store, browser_language, transport);
        Self {
            inner: StepProgram::new(app),
            background,
            scene: None,
            rng,
            taken_frame: 0,
            logs: Vec::new(),
        }
    }

    /// Initialize the model and render the first frame.
    pub fn init(&mut self) {
        self.inner.init();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.is_running()
    }

    #[must_use]
    pub fn frame_idx(&self) -> u64 {
        self.inner.frame_idx()
    }

    #[must_use]
    pub fn app(&self) -> &PortfolioApp {
        self.inner.model()
    }

    /// Active locale tag, e.g. `pt-br`.
    #[must_use]
    pub fn locale(&self) -> &'static str {
        self.inner.model().locale().tag()
    }

    /// Advance the deterministic clock by `dt_ms` milliseconds.
    ///
    /// Also feeds the elapsed time to the page's animations while any are
    /// running.
    pub fn advance_time_ms(&mut self, dt_ms: f64) {
        // Host input can be noisy (NaN/inf/negative spikes). Ignore anything
        // that is not a finite positive duration.
        if !dt_ms.is_finite() || dt_ms <= 0.0 {
            return;
        }
        let max_secs = Duration::MAX.as_secs_f64();
        let secs = (dt_ms / 1000.0).min(max_secs);
        let dt = Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX);
        self.inner.advance_time(dt);
        if self.inner.model().is_animating() {
            self.inner.push(AppMsg::Tick(dt));
        }
    }

    /// Parse a JSON-encoded host event and queue it for the next step.
    ///
    /// # Errors
    ///
    /// Propagates [`InputParseError`]; nothing is queued in that case.
    pub fn push_encoded_input(&mut self, json: &str) -> Result<(), InputParseError> {
        match parse_encoded_input(json)? {
            HostInput::Page(msg) => self.inner.push(msg),
            HostInput::Resize { width, height } => {
                self.resize_scene(Container::new(width, height));
            }
        }
        Ok(())
    }

    /// Queue a page message directly.
    pub fn push(&mut self, msg: AppMsg) {
        self.inner.push(msg);
    }

    /// Process pending messages and render if dirty.
    pub fn step(&mut self) -> StepReport {
        let result = self.inner.step();
        let app = self.inner.model();
        StepReport {
            running: result.running,
            rendered: result.rendered,
            messages_processed: result.messages_processed,
            frame_idx: self.inner.frame_idx(),
            next_deadline_ms: self
                .inner
                .next_deadline()
                .map(|d| d.as_secs_f64() * 1000.0),
            animating: app.is_animating(),
            scroll_to: app.take_scroll_request().map(|s| s.anchor()),
        }
    }

    /// Markup of the latest frame, or `None` if it was already taken.
    pub fn take_html(&mut self) -> Option<String> {
        let idx = self.inner.frame_idx();
        if idx == self.taken_frame {
            return None;
        }
        self.taken_frame = idx;
        Some(self.inner.html().to_owned())
    }

    /// Drain the runner's lifecycle log lines.
    pub fn take_logs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.logs)
    }

    // ── Background scene ──────────────────────────────────────────────

    /// Mount the background on `container`. A missing or zero-sized
    /// container leaves the page without a background; a second mount
    /// only resizes.
    pub fn mount_scene(&mut self, container: Option<Container>) -> bool {
        if let Some(scene) = self.scene.as_mut() {
            if let Some(container) = container {
                scene.resize(container);
            }
            return true;
        }
        self.scene = BackgroundScene::mount(container, &self.background, &mut self.rng);
        match &self.scene {
            Some(scene) => {
                self.logs.push(format!(
                    "scene_mounted objects={} surface={}x{}",
                    scene.objects().len(),
                    scene.surface().width,
                    scene.surface().height
                ));
                true
            }
            None => {
                debug!("page runs without background");
                false
            }
        }
    }

    #[must_use]
    pub fn scene(&self) -> Option<&BackgroundScene> {
        self.scene.as_ref()
    }

    /// Advance the background one display frame and return its line
    /// buffer, or `None` when nothing is mounted.
    pub fn frame_scene(&mut self) -> Option<Vec<f32>> {
        let scene = self.scene.as_mut()?;
        scene.tick();
        Some(scene.project_lines())
    }

    /// Follow a surface resize. Returns whether the scene changed.
    pub fn resize_scene(&mut self, container: Container) -> bool {
        match self.scene.as_mut() {
            Some(scene) => scene.resize(container),
            None => {
                warn!(
                    width = container.width,
                    height = container.height,
                    "resize without a mounted background"
                );
                false
            }
        }
    }

    /// Tear the background down. Safe to call when nothing is mounted.
    pub fn unmount_scene(&mut self) {
        if let Some(mut scene) = self.scene.take() {
            scene.teardown();
            self.logs
                .push(format!("scene_unmounted frames={}", scene.frames()));
        }
    }

    /// Page teardown: cancel in-flight work and release the background.
    pub fn unmount(&mut self) {
        self.inner.push(AppMsg::Unmount);
        self.inner.step();
        self.unmount_scene();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_i18n::Locale;
    use folio_site::{LANGUAGE_KEY, MemoryStore};
    use pretty_assertions::assert_eq;

    fn core_with(store: Rc<MemoryStore>, browser: &str) -> RunnerCore {
        let config = SiteConfig::embedded().unwrap();
        let mut core = RunnerCore::new(config, store, browser, None, 7);
        core.init();
        core
    }

    fn core() -> RunnerCore {
        core_with(Rc::new(MemoryStore::new()), "en-US")
    }

    #[test]
    fn runner_core_creates_and_inits() {
        let core = core();
        assert!(core.is_running());
        assert_eq!(core.frame_idx(), 1);
        assert_eq!(core.locale(), "en");
    }

    #[test]
    fn runner_core_step_no_events() {
        let mut core = core();
        let report = core.step();
        assert!(report.running);
        assert!(!report.rendered);
        assert_eq!(report.messages_processed, 0);
        assert_eq!(report.scroll_to, None);
    }

    #[test]
    fn welcome_toast_deadline_is_reported() {
        let mut core = core();
        let report = core.step();
        assert_eq!(report.next_deadline_ms, Some(4000.0));
    }

    #[test]
    fn take_html_hands_out_each_frame_once() {
        let mut core = core();
        let html = core.take_html().unwrap();
        assert!(html.starts_with("<div class=\"folio\""));
        assert_eq!(core.take_html(), None);
        core.push_encoded_input(r#"{"kind":"menu"}"#).unwrap();
        core.step();
        assert!(core.take_html().is_some());
    }

    #[test]
    fn language_input_rerenders_and_persists() {
        let store = Rc::new(MemoryStore::new());
        let mut core = core_with(Rc::clone(&store), "en-US");
        core.push_encoded_input(r#"{"kind":"language","locale":"pt-BR"}"#)
            .unwrap();
        let report = core.step();
        assert!(report.rendered);
        assert_eq!(core.locale(), "pt-br");
        assert!(core.take_html().unwrap().contains("lang=\"pt-BR\""));
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("pt-br"));
    }

    #[test]
    fn stored_language_wins_over_browser() {
        let store = Rc::new(MemoryStore::with(LANGUAGE_KEY, "pt-br"));
        let core = core_with(store, "en-US");
        assert_eq!(core.app().locale(), Locale::PtBr);
    }

    #[test]
    fn navigation_reports_scroll_target_once() {
        let mut core = core();
        core.push_encoded_input(r#"{"kind":"nav","section":"projects"}"#)
            .unwrap();
        assert_eq!(core.step().scroll_to, Some("projects"));
        assert_eq!(core.step().scroll_to, None);
    }

    #[test]
    fn malformed_input_queues_nothing() {
        let mut core = core();
        assert!(matches!(
            core.push_encoded_input("not json"),
            Err(InputParseError::Json(_))
        ));
        assert!(core.push_encoded_input(r#"{"kind":"nav","section":"blog"}"#).is_err());
        assert_eq!(core.step().messages_processed, 0);
    }

    #[test]
    fn contact_submission_completes_on_the_host_clock() {
        let mut core = core();
        for json in [
            r#"{"kind":"field","field":"name","value":"Ana"}"#,
            r#"{"kind":"field","field":"email","value":"ana@example.com"}"#,
            r#"{"kind":"field","field":"message","value":"Hello there"}"#,
            r#"{"kind":"submit"}"#,
        ] {
            core.push_encoded_input(json).unwrap();
        }
        core.step();
        assert!(core.app().contact().is_submitting());
        core.advance_time_ms(500.0);
        core.step();
        assert!(core.app().contact().is_submitting());
        core.advance_time_ms(500.0);
        core.step();
        assert!(!core.app().contact().is_submitting());
        assert!(core.app().contact().fields().is_empty());
    }

    #[test]
    fn scroll_progress_animates_until_settled() {
        let mut core = core();
        core.push_encoded_input(r#"{"kind":"scroll","y":500.0,"max":1000.0}"#)
            .unwrap();
        assert!(core.step().animating);
        for _ in 0..600 {
            core.advance_time_ms(16.0);
            core.step();
        }
        assert!(!core.step().animating);
        assert!((core.app().nav().progress() - 0.5).abs() < 0.01);
    }

    #[test]
    fn huge_time_jump_during_scroll_animation_returns() {
        let mut core = core();
        core.push_encoded_input(r#"{"kind":"scroll","y":500.0,"max":1000.0}"#)
            .unwrap();
        assert!(core.step().animating);
        core.advance_time_ms(1e20);
        let report = core.step();
        assert!(report.running);
        let progress = core.app().nav().progress();
        assert!((0.0..=1.0).contains(&progress));
    }

    #[test]
    fn runner_core_advance_time_ignores_invalid_inputs() {
        let mut core = core();
        core.advance_time_ms(f64::NAN);
        core.advance_time_ms(f64::INFINITY);
        core.advance_time_ms(-1.0);
        core.advance_time_ms(0.0);
        assert_eq!(core.step().next_deadline_ms, Some(4000.0));
    }

    #[test]
    fn scene_lifecycle() {
        let mut core = core();
        assert_eq!(core.frame_scene(), None);
        assert!(!core.mount_scene(None));
        assert!(!core.mount_scene(Some(Container::new(0, 600))));
        assert!(core.mount_scene(Some(Container::new(1280, 600))));
        assert_eq!(core.scene().unwrap().objects().len(), 8);

        let lines = core.frame_scene().unwrap();
        assert_eq!(lines.len() % folio_scene::FLOATS_PER_SEGMENT, 0);
        assert!(!lines.is_empty());
        assert_eq!(core.scene().unwrap().frames(), 1);

        core.push_encoded_input(r#"{"kind":"resize","width":640,"height":480}"#)
            .unwrap();
        assert_eq!(core.scene().unwrap().surface(), Container::new(640, 480));
        assert!(!core.resize_scene(Container::new(0, 0)));

        core.unmount_scene();
        assert!(core.scene().is_none());
        assert_eq!(core.frame_scene(), None);
        let logs = core.take_logs();
        assert!(logs.iter().any(|l| l.starts_with("scene_mounted objects=8")), "{logs:?}");
        assert!(logs.iter().any(|l| l == "scene_unmounted frames=1"), "{logs:?}");
    }

    #[test]
    fn same_seed_same_background() {
        let mut a = core();
        let mut b = core();
        a.mount_scene(Some(Container::new(800, 600)));
        b.mount_scene(Some(Container::new(800, 600)));
        assert_eq!(a.frame_scene(), b.frame_scene());
    }

    #[test]
    fn unmount_cancels_in_flight_delivery() {
        let mut core = core();
        for json in [
            r#"{"kind":"field","field":"name","value":"Ana"}"#,
            r#"{"kind":"field","field":"email","value":"ana@example.com"}"#,
            r#"{"kind":"field","field":"message","value":"Hi"}"#,
            r#"{"kind":"submit"}"#,
        ] {
            core.push_encoded_input(json).unwrap();
        }
        core.step();
        core.mount_scene(Some(Container::new(800, 600)));
        core.unmount();
        assert!(core.scene().is_none());
        assert!(!core.is_running());
        assert!(!core.step().running);
        core.advance_time_ms(5000.0);
        core.step();
        assert!(!core.app().contact().fields().is_empty());
    }
}
