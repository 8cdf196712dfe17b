#![forbid(unsafe_code)]

//! Shared values with change notification.
//!
//! The language preference is the main consumer: every section re-renders
//! from the current locale, and the storage writer subscribes to persist
//! each change.

pub mod observable;

pub use observable::{Observable, Subscription};
