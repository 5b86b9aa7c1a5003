//! State behind the inquiry page: the six inputs, where the submission stands, and
//! which fields failed validation.

use crate::domain::{FieldErrors, InquiryField, InquiryForm, NewInquiry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Body returned by `POST /api/sendInquiry`.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SendInquiryResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl SendInquiryResponse {
    pub fn delivered() -> Self {
        Self {
            success: true,
            error: None,
            errors: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            errors: None,
        }
    }
}

/// What the caller should do after asking to submit.
#[derive(Debug)]
pub enum Submission {
    /// A request is already in flight.
    Ignored,
    /// Validation failed, see `FormState::errors`.
    Invalid,
    /// Send this inquiry, then report back through `FormState::finish`.
    Ready(NewInquiry),
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: InquiryForm,
    status: SubmissionStatus,
    errors: FieldErrors,
}

impl FormState {
    pub fn new(fields: InquiryForm) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn fields(&self) -> &InquiryForm {
        &self.fields
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_field(&mut self, field: InquiryField, value: String) {
        self.fields.set(field, value);
    }

    pub fn begin_submit(&mut self) -> Submission {
        if self.status == SubmissionStatus::Loading {
            return Submission::Ignored;
        }
        match NewInquiry::parse(&self.fields) {
            Ok(inquiry) => {
                self.errors.clear();
                self.status = SubmissionStatus::Loading;
                Submission::Ready(inquiry)
            }
            Err(errors) => {
                self.errors = errors;
                self.status = SubmissionStatus::Idle;
                Submission::Invalid
            }
        }
    }

    /// Records the outcome of the request started by `begin_submit`.
    ///
    /// Only a response carrying `success: true` counts as delivered; everything else,
    /// including transport errors, keeps the visitor's input for another attempt.
    pub fn finish<E>(&mut self, result: Result<SendInquiryResponse, E>)
    where
        E: std::fmt::Debug,
    {
        if self.status != SubmissionStatus::Loading {
            return;
        }
        match result {
            Ok(response) if response.success => {
                self.fields = InquiryForm::default();
                self.status = SubmissionStatus::Success;
            }
            Ok(response) => {
                tracing::warn!(error = ?response.error, "Inquiry was not delivered");
                self.status = SubmissionStatus::Error;
            }
            Err(e) => {
                tracing::error!(error.cause_chain = ?e, "Inquiry submission failed");
                self.status = SubmissionStatus::Error;
            }
        }
    }

    /// Closes the confirmation modal or the error banner.
    pub fn dismiss(&mut self) {
        if matches!(
            self.status,
            SubmissionStatus::Success | SubmissionStatus::Error
        ) {
            self.status = SubmissionStatus::Idle;
        }
    }
}
