#![forbid(unsafe_code)]

//! folio runtime
//!
//! The runtime pieces every section of the site is built on.
//!
//! # Key Components
//!
//! - [`Model`] - Trait for section state and behavior
//! - [`Cmd`] - Commands for side effects (messages, delays, tasks, quit)
//! - [`StepProgram`] - Host-driven update/view loop with a deterministic clock
//! - [`Frame`] - HTML output buffer handed to `Model::view`
//! - [`Observable`] - Shared value with RAII change subscriptions
//! - [`CancellationSource`] - Cooperative cancellation for in-flight tasks
//! - [`RetryPolicy`] - Deterministic retry backoff
//! - [`FrameSubscription`] - Scoped per-frame callback registration
//! - [`Spring`] - Damped spring used for smoothed UI motion
//!
//! # How it fits in the system
//! Everything here is platform-independent. The browser bindings in
//! `folio-web` drive a `StepProgram` from JavaScript and implement
//! [`FrameScheduler`] over `requestAnimationFrame`.

pub mod cancellation;
pub mod frame;
pub mod frame_loop;
pub mod program;
pub mod reactive;
pub mod retry;
pub mod spring;
pub mod step_program;

pub use cancellation::{CancellationSource, CancellationToken};
pub use frame::Frame;
pub use frame_loop::{FrameCallback, FrameError, FrameScheduler, FrameSubscription};
pub use program::{Cmd, Mailbox, Model, Task};
pub use reactive::{Observable, Subscription};
pub use retry::{BackoffStrategy, RetryPolicy};
pub use spring::Spring;
pub use step_program::{MAX_MESSAGES_PER_STEP, StepProgram, StepResult};
