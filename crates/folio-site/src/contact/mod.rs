#![forbid(unsafe_code)]

//! Contact form and message delivery.

pub mod form;
pub mod transport;

pub use form::{
    ContactFields, ContactForm, ContactMsg, Field, FieldError, FormStatus, is_plausible_email,
};
pub use transport::{
    ContactPayload, ContactTransport, DeliveryError, DeliveryResult, SimulatedTransport,
};
