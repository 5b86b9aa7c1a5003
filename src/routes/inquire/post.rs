use actix_web::{
    HttpResponse, error::ErrorInternalServerError, http::StatusCode, http::header::ContentType,
    web,
};

use crate::{
    configuration::SiteSettings,
    domain::InquiryForm,
    form::{FormState, SendInquiryResponse, Submission, SubmissionStatus},
    notification::OwnerNotifier,
};

use super::page;

/// Plain HTML form submission: validates, forwards the inquiry and re-renders the page
/// with either inline errors, an error banner or the confirmation modal.
#[tracing::instrument(
    name = "Submitting the inquiry form",
    skip(form, notifier, site),
    fields(
        inquirer_email = %form.email,
        inquirer_name = %form.name
    )
)]
pub async fn submit_inquiry(
    form: web::Form<InquiryForm>,
    notifier: web::Data<OwnerNotifier>,
    site: web::Data<SiteSettings>,
) -> Result<HttpResponse, actix_web::Error> {
    let mut state = FormState::new(form.into_inner());

    if let Submission::Ready(inquiry) = state.begin_submit() {
        let outcome = notifier
            .notify(&inquiry)
            .await
            .map(|_| SendInquiryResponse::delivered());
        state.finish(outcome);
    }

    let status = match state.status() {
        SubmissionStatus::Success => StatusCode::OK,
        SubmissionStatus::Error => StatusCode::INTERNAL_SERVER_ERROR,
        SubmissionStatus::Idle | SubmissionStatus::Loading => StatusCode::BAD_REQUEST,
    };
    let body = page::render(&site, &state).map_err(ErrorInternalServerError)?;
    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body))
}
