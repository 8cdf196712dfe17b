#![forbid(unsafe_code)]

//! The folio page.
//!
//! # Key Components
//!
//! - [`PortfolioApp`] - the page [`Model`](folio_runtime::Model), composing
//!   every section in page order
//! - [`ContactForm`] - submission state machine over a [`ContactTransport`]
//! - [`LanguagePreference`] - persisted locale choice
//! - [`RevealTracker`] - once-only scroll reveal
//!
//! Everything here is platform-independent and driven through
//! [`StepProgram`](folio_runtime::StepProgram); `folio-web` supplies the
//! browser store, transport and event wiring.

pub mod app;
pub mod contact;
pub mod preference;
pub mod reveal;
pub mod sections;
pub mod toast;

pub use app::{AppMsg, PortfolioApp, reveal_targets};
pub use contact::{
    ContactForm, ContactMsg, ContactPayload, ContactTransport, DeliveryError, DeliveryResult,
    Field, FieldError, FormStatus, SimulatedTransport,
};
pub use preference::{LANGUAGE_KEY, LanguagePreference, MemoryStore, PreferenceStore, StorageError};
pub use reveal::{Entrance, RevealTracker};
pub use sections::hero::BACKGROUND_CONTAINER_ID;
pub use sections::{ProjectFilter, Section};
pub use toast::{Toast, ToastKind};
