//! Cooperative cancellation for in-flight tasks.
//!
//! A [`CancellationSource`] is held by whoever started the work (the contact
//! form for a delivery attempt); the [`CancellationToken`] travels with the
//! task. Page code is single-threaded, so the signal is an `Rc<Cell>` rather
//! than an atomic.
//!
//! Hooks registered with [`CancellationToken::on_cancel`] run exactly once,
//! at the moment of cancellation. The browser transport uses one to call
//! `AbortController::abort()` on the pending request.
//!
//! # Example
//!
//! ```
//! use folio_runtime::CancellationSource;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let source = CancellationSource::new();
//! let token = source.token();
//! let aborted = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&aborted);
//! token.on_cancel(move || flag.set(true));
//!
//! source.cancel();
//! assert!(token.is_cancelled());
//! assert!(aborted.get());
//! ```

#![forbid(unsafe_code)]

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type Hook = Box<dyn FnOnce()>;

struct CancellationInner {
    cancelled: Cell<bool>,
    hooks: RefCell<Vec<Hook>>,
}

/// Cloneable view of a cancellation signal.
#[derive(Clone)]
pub struct CancellationToken {
    inner: Rc<CancellationInner>,
}

/// The control handle that triggers cancellation.
///
/// Dropping the source does **not** cancel; call [`cancel`](Self::cancel).
pub struct CancellationSource {
    inner: Rc<CancellationInner>,
}

impl CancellationSource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(CancellationInner {
                cancelled: Cell::new(false),
                hooks: RefCell::new(Vec::new()),
            }),
        }
    }

    #[must_use]
    pub fn token(&self) -> CancellationToken {
        CancellationToken {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Signal cancellation and run pending hooks. Idempotent.
    pub fn cancel(&self) {
        if self.inner.cancelled.replace(true) {
            return;
        }
        let hooks = std::mem::take(&mut *self.inner.hooks.borrow_mut());
        for hook in hooks {
            hook();
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }
}

impl Default for CancellationSource {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CancellationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancellationSource")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

impl CancellationToken {
    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    /// Run `hook` when the source cancels. Runs immediately if it already has.
    pub fn on_cancel(&self, hook: impl FnOnce() + 'static) {
        if self.is_cancelled() {
            hook();
            return;
        }
        self.inner.hooks.borrow_mut().push(Box::new(hook));
    }
}

impl fmt::Debug for CancellationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancellationToken")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
