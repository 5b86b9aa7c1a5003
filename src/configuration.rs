//! src/configuration.rs

use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::EmailAddress;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub inquiry: InquirySettings,
    pub site: SiteSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    pub authorization_token: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<EmailAddress, String> {
        EmailAddress::parse(self.sender_email.clone())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    // Environment variables always arrive as strings
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

/// Where owner notifications go and how they are titled.
#[derive(serde::Deserialize, Clone)]
pub struct InquirySettings {
    /// Falls back to the sender address when unset, so the account mails itself.
    #[serde(default)]
    pub recipient_email: Option<String>,
    pub subject: String,
}

impl InquirySettings {
    pub fn recipient(&self, sender: &EmailAddress) -> Result<EmailAddress, String> {
        match &self.recipient_email {
            Some(recipient) if !recipient.trim().is_empty() => {
                EmailAddress::parse(recipient.clone())
            }
            _ => Ok(sender.clone()),
        }
    }
}

/// Static text rendered around the inquiry form.
#[derive(serde::Deserialize, Clone, Debug)]
pub struct SiteSettings {
    pub title: String,
    pub description: String,
    pub heading: String,
    pub tagline: String,
    pub og_image: String,
    pub agent_name: String,
    pub agent_phone: String,
}

/// The possible runtime environment for our application
#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

/// Parses the raw `APP_ENVIRONMENT` value into an `Environment`, rejecting anything
/// other than `local` or `production`.
impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. \
Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, anyhow::Error> {
    let base_path = std::env::current_dir()?;
    let configuration_directory = base_path.join("configuration");
    // Detect the running environment, defaults to `local` if unspecified
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // Add in settings from environment variables (with a prefix of APP and
        // '__' as separator)
        // E.g. `APP_APPLICATION__PORT=5001 would set `Settings.application.port`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        );
    // The mail account credentials of older deployments. Read once here, never per request.
    let settings = with_account_credentials(
        settings,
        std::env::var("EMAIL_USER").ok(),
        std::env::var("EMAIL_PASS").ok(),
    )?
    .build()?;
    Ok(settings.try_deserialize::<Settings>()?)
}

fn with_account_credentials(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    user: Option<String>,
    pass: Option<String>,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
    builder
        .set_override_option("email_client.sender_email", user)?
        .set_override_option("email_client.authorization_token", pass)
}
