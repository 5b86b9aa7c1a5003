//! Turning a validated inquiry into the email the business owner receives.

use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::{EmailAddress, NewInquiry};
use crate::email_client::EmailClient;

const NO_VISIT_DATE: &str = "Not specified";

/// Rendered owner notification.
pub struct Notification {
    pub html: String,
    pub text: String,
}

impl Notification {
    pub fn compose(inquiry: &NewInquiry, received_at: DateTime<Utc>) -> Self {
        let received_at = received_at.to_rfc3339_opts(SecondsFormat::Secs, true);
        let rows = [
            ("Name", inquiry.name.as_ref().to_string()),
            ("Age", inquiry.age.to_string()),
            ("Email", inquiry.email.to_string()),
            ("Contact", inquiry.contact.as_ref().to_string()),
            ("Preferred Location", inquiry.location.to_string()),
            (
                "Preferred Date",
                inquiry
                    .visit_date
                    .clone()
                    .unwrap_or_else(|| NO_VISIT_DATE.to_string()),
            ),
            ("Submitted At", received_at),
        ];

        let mut html = String::from("<h2>New Inquiry Submitted</h2>\n");
        let mut text = String::from("New Inquiry Submitted\n\n");
        for (label, value) in &rows {
            html.push_str(&format!(
                "<p><strong>{}:</strong> {}</p>\n",
                label,
                htmlescape::encode_minimal(value)
            ));
            text.push_str(&format!("{}: {}\n", label, value));
        }
        Self { html, text }
    }
}

/// Forwards inquiries to the business owner's inbox.
pub struct OwnerNotifier {
    email_client: EmailClient,
    recipient: EmailAddress,
    subject: String,
}

impl OwnerNotifier {
    pub fn new(email_client: EmailClient, recipient: EmailAddress, subject: String) -> Self {
        Self {
            email_client,
            recipient,
            subject,
        }
    }

    /// Sends one email per call. Nothing is retried or deduplicated.
    #[tracing::instrument(
        name = "Notifying the owner of a new inquiry",
        skip(self, inquiry),
        fields(recipient = %self.recipient)
    )]
    pub async fn notify(&self, inquiry: &NewInquiry) -> Result<(), anyhow::Error> {
        let notification = Notification::compose(inquiry, Utc::now());
        self.email_client
            .send_email(
                &self.recipient,
                &self.subject,
                &notification.html,
                &notification.text,
            )
            .await
            .context("Failed to send the inquiry notification email.")?;
        Ok(())
    }
}
