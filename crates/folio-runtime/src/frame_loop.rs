#![forbid(unsafe_code)]

//! Scoped per-frame callbacks.
//!
//! The decorative background and the scroll progress spring both animate
//! once per display frame. A [`FrameSubscription`] owns the registration:
//! acquiring it starts the recurring callback, and dropping it cancels the
//! outstanding request on every exit path (unmount, error, page teardown).
//!
//! The browser implementation of [`FrameScheduler`] lives in `folio-web`
//! on top of `requestAnimationFrame`; tests use an in-memory scheduler.

use std::fmt;

use tracing::{debug, warn};

/// Per-frame callback; the argument is a host timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnMut(f64)>;

/// Errors raised when a frame loop cannot be started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// The host has no frame clock (no window, headless context).
    Unavailable(String),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "frame scheduler unavailable: {reason}"),
        }
    }
}

impl std::error::Error for FrameError {}

/// A source of recurring display-frame callbacks.
pub trait FrameScheduler {
    type Handle: Copy + fmt::Debug;

    /// Start invoking `callback` once per frame until cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError`] if the host cannot schedule frames.
    fn request(&self, callback: FrameCallback) -> Result<Self::Handle, FrameError>;

    /// Stop the loop started under `handle`. Unknown handles are ignored.
    fn cancel(&self, handle: Self::Handle);
}

/// RAII guard over a running frame loop.
pub struct FrameSubscription<S: FrameScheduler> {
    scheduler: S,
    handle: Option<S::Handle>,
    label: &'static str,
}

impl<S: FrameScheduler> FrameSubscription<S> {
    /// Start a frame loop that lives as long as the returned guard.
    ///
    /// # Errors
    ///
    /// Propagates the scheduler's [`FrameError`].
    pub fn acquire(
        scheduler: S,
        label: &'static str,
        callback: impl FnMut(f64) + 'static,
    ) -> Result<Self, FrameError> {
        let handle = scheduler.request(Box::new(callback)).inspect_err(|err| {
            warn!(label, error = %err, "frame loop not started");
        })?;
        debug!(label, ?handle, "frame loop started");
        Ok(Self {
            scheduler,
            handle: Some(handle),
            label,
        })
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Stop the loop now instead of at drop.
    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.scheduler.cancel(handle);
            debug!(label = self.label, ?handle, "frame loop cancelled");
        }
    }
}

impl<S: FrameScheduler> Drop for FrameSubscription<S> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<S: FrameScheduler> fmt::Debug for FrameSubscription<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameSubscription")
            .field("label", &self.label)
            .field("handle", &self.handle)
            .finish()
    }
}
