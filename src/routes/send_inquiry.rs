use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode, web};

use crate::{
    domain::{FieldErrors, InquiryForm, NewInquiry},
    form::SendInquiryResponse,
    notification::OwnerNotifier,
    routes::error_chain_fmt,
};

#[derive(thiserror::Error)]
pub enum SendInquiryError {
    #[error("Invalid inquiry")]
    ValidationError(FieldErrors),
    #[error("Failed to send email")]
    UnexpectedError(#[from] anyhow::Error),
}

// Same logic to get the full error chain on `Debug`
impl std::fmt::Debug for SendInquiryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SendInquiryError {
    fn status_code(&self) -> StatusCode {
        match self {
            SendInquiryError::ValidationError(_) => StatusCode::BAD_REQUEST,
            SendInquiryError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut body = SendInquiryResponse::failed(self.to_string());
        if let SendInquiryError::ValidationError(errors) = self {
            body.errors = Some(errors.clone());
        }
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Accepts an inquiry as JSON, validates it again and emails it to the owner.
#[tracing::instrument(
    name = "Sending an inquiry",
    skip(body, notifier),
    fields(
        inquirer_email = %body.email,
        inquirer_name = %body.name
    )
)]
pub async fn send_inquiry(
    body: web::Json<InquiryForm>,
    notifier: web::Data<OwnerNotifier>,
) -> Result<HttpResponse, SendInquiryError> {
    let inquiry = NewInquiry::parse(&body).map_err(|errors| {
        tracing::info!(errors = %errors, "Rejected an invalid inquiry");
        SendInquiryError::ValidationError(errors)
    })?;
    notifier.notify(&inquiry).await.map_err(|e| {
        tracing::error!(error.cause_chain = ?e, "Failed to deliver the inquiry");
        SendInquiryError::UnexpectedError(e)
    })?;
    Ok(HttpResponse::Ok().json(SendInquiryResponse::delivered()))
}

/// Answers unreadable JSON bodies in the same shape as every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(error = %err, "Rejected an unreadable inquiry payload");
    let response = HttpResponse::BadRequest().json(SendInquiryResponse::failed("Invalid request body"));
    actix_web::error::InternalError::from_response(err, response).into()
}
