use std::sync::LazyLock;

use regex::Regex;

// Deliberately loose: something, an `@`, something, a dot, something.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Debug, Clone)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(s: String) -> Result<EmailAddress, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Email is required".into());
        }
        if !EMAIL_PATTERN.is_match(trimmed) {
            return Err("Email is invalid".into());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
