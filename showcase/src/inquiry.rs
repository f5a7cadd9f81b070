//! Inquiry (contact) dialog: form state, validation and submit status.
//!
//! Delivery itself (email service, HTTP) belongs to the caller: [`InquiryDialog::begin_submit`]
//! hands out the validated form and [`InquiryDialog::finish`] takes the outcome back.

use std::sync::LazyLock;

use regex::Regex;

use crate::Modal;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

/// What the visitor is asking about. Chosen by the button that opened the dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InquiryKind {
    Contact,
    Partnership,
    /// A pricing package; its name prefills the service field.
    Package(String),
}

impl InquiryKind {
    pub fn label(&self) -> &str {
        match self {
            Self::Contact => "Contact",
            Self::Partnership => "Partnership",
            Self::Package(name) => name,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl InquiryForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Service => &mut self.service,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Checks required fields. Phone and service are optional.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.push(FieldError::NameRequired);
        }
        if !EMAIL.is_match(&self.email) {
            errors.push(FieldError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError::MessageRequired);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Enter a valid email")]
    InvalidEmail,
    #[error("Message is required")]
    MessageRequired,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            Self::NameRequired => Field::Name,
            Self::InvalidEmail => Field::Email,
            Self::MessageRequired => Field::Message,
        }
    }
}

/// Every failed check of one validation pass, in field order.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.iter().copied().find(|e| e.field() == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.errors.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Failure reported by the caller's delivery integration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    #[error("delivery is not configured")]
    NotConfigured,
    #[error("delivery failed: {0}")]
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("inquiry dialog is closed")]
    Closed,
    #[error("a submission is already in flight")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] FieldErrors),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmitStatus {
    /// Status line shown under the form.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Sending => Some("Sending..."),
            Self::Success => Some("Success. We'll contact you shortly."),
            Self::Error => Some("Something went wrong. Please try again."),
        }
    }
}

/// The inquiry modal together with its form.
#[derive(Clone, Debug, Default)]
pub struct InquiryDialog {
    modal: Modal<InquiryKind>,
    form: InquiryForm,
    errors: FieldErrors,
    status: SubmitStatus,
}

impl InquiryDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the dialog for `kind`. A package inquiry prefills the service field; other
    /// fields keep what the visitor already typed.
    pub fn open(&mut self, kind: InquiryKind) {
        if let InquiryKind::Package(name) = &kind {
            self.form.service.clone_from(name);
        }
        sdebug!(kind = kind.label(), "inquiry opened");
        self.modal.open(kind);
        if self.status != SubmitStatus::Sending {
            self.status = SubmitStatus::Idle;
        }
    }

    pub fn close(&mut self) {
        self.modal.close();
        self.errors = FieldErrors::default();
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_open()
    }

    pub fn locks_scroll(&self) -> bool {
        self.modal.locks_scroll()
    }

    pub fn kind(&self) -> Option<&InquiryKind> {
        self.modal.selected()
    }

    pub fn form(&self) -> &InquiryForm {
        &self.form
    }

    /// Updates one field and drops its stale validation error.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        self.errors.errors.retain(|e| e.field() != field);
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Back to [`SubmitStatus::Idle`] with an empty form and no errors. The dialog stays
    /// open or closed as it was; a delivery still in flight is forgotten and its
    /// [`Self::finish`] ignored.
    pub fn reset(&mut self) {
        self.form.clear();
        self.errors = FieldErrors::default();
        self.status = SubmitStatus::Idle;
    }

    /// Validates and moves to [`SubmitStatus::Sending`].
    ///
    /// On success, returns the form to deliver. Validation failures are also kept in
    /// [`Self::errors`] for display.
    pub fn begin_submit(&mut self) -> Result<InquiryForm, SubmitError> {
        if !self.is_open() {
            return Err(SubmitError::Closed);
        }
        if self.status == SubmitStatus::Sending {
            return Err(SubmitError::InFlight);
        }
        if let Err(errors) = self.form.validate() {
            sdebug!(failed = errors.len(), "inquiry validation failed");
            self.errors = errors.clone();
            return Err(errors.into());
        }
        self.errors = FieldErrors::default();
        self.status = SubmitStatus::Sending;
        Ok(self.form.clone())
    }

    /// Reports the delivery outcome of the submission started by `begin_submit`.
    ///
    /// Success clears the form. Ignored when no submission is in flight.
    pub fn finish(&mut self, outcome: Result<(), DeliveryError>) {
        if self.status != SubmitStatus::Sending {
            swarn!("finish called without a submission in flight");
            return;
        }
        match outcome {
            Ok(()) => {
                self.status = SubmitStatus::Success;
                self.form.clear();
            }
            Err(_err) => {
                swarn!(error = %_err, "inquiry delivery failed");
                self.status = SubmitStatus::Error;
            }
        }
    }
}
