#![forbid(unsafe_code)]

//! Contact form state machine.
//!
//! ```text
//!   Idle ──edit──▶ Editing ──submit──▶ Submitting ──ok──▶ Success ──(display)──▶ Idle
//!     ▲               │ ▲                 │  ▲
//!     └─(all empty)───┘ │            fail │  │ automatic retry (policy)
//!                       │                 ▼  │
//!                       └────edit───── Failed ─┘ retry
//! ```
//!
//! # Invariants
//!
//! 1. At most one delivery attempt is in flight. Every attempt has an id
//!    and its own cancellation source.
//! 2. Outcomes and timeouts carrying any other attempt id are ignored.
//! 3. Validation failures never start an attempt.
//! 4. Success clears every field; failure keeps them for the retry.
//!    Fields are locked while `Submitting`, so automatic retries resend
//!    exactly what passed validation.
//! 5. After `Unmount` nothing in flight can change the state.

use std::rc::Rc;

use folio_content::ContactSettings;
use folio_runtime::{CancellationSource, Cmd};
use tracing::{debug, info, trace, warn};

use super::transport::{ContactPayload, ContactTransport, DeliveryError, DeliveryResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

impl FieldError {
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::Required => "contact.error.required",
            Self::InvalidEmail => "contact.error.email",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Per-field errors; empty when the form may be submitted.
    #[must_use]
    pub fn validate(&self) -> Vec<(Field, FieldError)> {
        let mut errors = Vec::new();
        for field in Field::ALL {
            if self.get(field).trim().is_empty() {
                errors.push((field, FieldError::Required));
            }
        }
        let email = self.email.trim();
        if !email.is_empty() && !is_plausible_email(email) {
            errors.push((Field::Email, FieldError::InvalidEmail));
        }
        errors
    }

    fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }
}

/// `local@domain.tld` with no whitespace. Deliberately loose.
#[must_use]
pub fn is_plausible_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, _)| !host.is_empty())
        && !domain.ends_with('.')
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Editing,
    Submitting,
    Success,
    Failed(DeliveryError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContactMsg {
    Edit(Field, String),
    Submit,
    /// User-requested retry from the failed state.
    Retry,
    Outcome { attempt: u64, result: DeliveryResult },
    TimedOut { attempt: u64 },
    /// Automatic retry timer for submission `submission`.
    RetryDue { submission: u64 },
    SuccessElapsed { attempt: u64 },
    Unmount,
}

struct InFlight {
    attempt: u64,
    cancel: CancellationSource,
}

/// The form's state plus the transport it delivers through.
pub struct ContactForm {
    fields: ContactFields,
    errors: Vec<(Field, FieldError)>,
    status: FormStatus,
    settings: ContactSettings,
    transport: Rc<dyn ContactTransport>,
    next_attempt: u64,
    in_flight: Option<InFlight>,
    /// Bumped on each submit, retry and unmount; stale retry timers compare against it.
    submission: u64,
    failures: u32,
    last_success: Option<u64>,
}

impl std::fmt::Debug for ContactForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactForm")
            .field("status", &self.status)
            .field("transport", &self.transport.name())
            .field("attempt", &self.current_attempt())
            .field("failures", &self.failures)
            .finish_non_exhaustive()
    }
}

impl ContactForm {
    pub fn new(settings: ContactSettings, transport: Rc<dyn ContactTransport>) -> Self {
        Self {
            fields: ContactFields::default(),
            errors: Vec::new(),
            status: FormStatus::Idle,
            settings,
            transport,
            next_attempt: 0,
            in_flight: None,
            submission: 0,
            failures: 0,
            last_success: None,
        }
    }

    #[must_use]
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    #[must_use]
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, e)| *e)
    }

    #[must_use]
    pub fn errors(&self) -> &[(Field, FieldError)] {
        &self.errors
    }

    /// Id of the attempt in flight, if any.
    #[must_use]
    pub fn current_attempt(&self) -> Option<u64> {
        self.in_flight.as_ref().map(|f| f.attempt)
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn update(&mut self, msg: ContactMsg) -> Cmd<ContactMsg> {
        match msg {
            ContactMsg::Edit(field, value) => {
                if self.status == FormStatus::Submitting {
                    trace!(field = field.id(), "edit ignored while submitting");
                } else {
                    self.edit(field, value);
                }
                Cmd::none()
            }
            ContactMsg::Submit => match self.status {
                FormStatus::Submitting => {
                    trace!("submit ignored while a delivery is in flight");
                    Cmd::none()
                }
                _ => self.submit(),
            },
            ContactMsg::Retry => match self.status {
                FormStatus::Failed(_) => self.submit(),
                _ => Cmd::none(),
            },
            ContactMsg::Outcome { attempt, result } => {
                if !self.take_in_flight(attempt) {
                    trace!(attempt, "stale delivery outcome ignored");
                    return Cmd::none();
                }
                match result {
                    Ok(()) => self.succeed(attempt),
                    Err(err) => self.fail(attempt, err),
                }
            }
            ContactMsg::TimedOut { attempt } => {
                let Some(flight) = self.in_flight.as_ref().filter(|f| f.attempt == attempt) else {
                    return Cmd::none();
                };
                flight.cancel.cancel();
                self.in_flight = None;
                self.fail(attempt, DeliveryError::Timeout)
            }
            ContactMsg::RetryDue { submission } => {
                if submission != self.submission || self.status != FormStatus::Submitting {
                    trace!(submission, "stale retry timer ignored");
                    return Cmd::none();
                }
                self.start_attempt()
            }
            ContactMsg::SuccessElapsed { attempt } => {
                if self.status == FormStatus::Success && self.last_success == Some(attempt) {
                    self.status = FormStatus::Idle;
                }
                Cmd::none()
            }
            ContactMsg::Unmount => {
                self.cancel_in_flight();
                self.submission += 1;
                if self.status == FormStatus::Submitting {
                    self.status = FormStatus::Idle;
                }
                Cmd::none()
            }
        }
    }

    fn edit(&mut self, field: Field, value: String) {
        *self.fields.slot(field) = value;
        self.errors.retain(|(f, _)| *f != field);
        self.status = if self.fields.is_empty() {
            FormStatus::Idle
        } else {
            FormStatus::Editing
        };
    }

    fn submit(&mut self) -> Cmd<ContactMsg> {
        self.errors = self.fields.validate();
        if !self.errors.is_empty() {
            debug!(errors = self.errors.len(), "contact form rejected by validation");
            if !matches!(self.status, FormStatus::Editing | FormStatus::Idle) {
                self.status = if self.fields.is_empty() {
                    FormStatus::Idle
                } else {
                    FormStatus::Editing
                };
            }
            return Cmd::none();
        }
        self.submission += 1;
        self.failures = 0;
        self.status = FormStatus::Submitting;
        self.start_attempt()
    }

    fn start_attempt(&mut self) -> Cmd<ContactMsg> {
        self.cancel_in_flight();
        self.next_attempt += 1;
        let attempt = self.next_attempt;
        let cancel = CancellationSource::new();
        let token = cancel.token();
        self.in_flight = Some(InFlight { attempt, cancel });
        info!(
            attempt,
            transport = self.transport.name(),
            retry = self.failures,
            "sending contact message"
        );
        let send = self
            .transport
            .send(self.fields.payload(), token)
            .map(move |result| ContactMsg::Outcome { attempt, result });
        Cmd::batch(vec![
            send,
            Cmd::delay(self.settings.timeout(), ContactMsg::TimedOut { attempt }),
        ])
    }

    fn take_in_flight(&mut self, attempt: u64) -> bool {
        if self.current_attempt() == Some(attempt) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    fn cancel_in_flight(&mut self) {
        if let Some(flight) = self.in_flight.take() {
            debug!(attempt = flight.attempt, "cancelling contact delivery");
            flight.cancel.cancel();
        }
    }

    fn succeed(&mut self, attempt: u64) -> Cmd<ContactMsg> {
        info!(attempt, "contact message delivered");
        self.fields = ContactFields::default();
        self.errors.clear();
        self.failures = 0;
        self.status = FormStatus::Success;
        self.last_success = Some(attempt);
        Cmd::delay(
            self.settings.success_display(),
            ContactMsg::SuccessElapsed { attempt },
        )
    }

    fn fail(&mut self, attempt: u64, err: DeliveryError) -> Cmd<ContactMsg> {
        self.failures += 1;
        let policy = &self.settings.retry;
        if err.is_retryable() && policy.should_retry(self.failures) {
            let wait = policy.delay(self.failures - 1);
            warn!(
                attempt,
                %err,
                failures = self.failures,
                wait_ms = wait.as_millis() as u64,
                "contact delivery failed; retrying"
            );
            return Cmd::delay(
                wait,
                ContactMsg::RetryDue {
                    submission: self.submission,
                },
            );
        }
        warn!(attempt, %err, failures = self.failures, "contact delivery failed");
        self.status = FormStatus::Failed(err);
        Cmd::none()
    }
}
