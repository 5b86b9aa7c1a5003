const DIGITS: usize = 11;

/// A local mobile number such as `09171234567`.
#[derive(Debug, Clone)]
pub struct ContactNumber(String);

impl ContactNumber {
    pub fn parse(s: String) -> Result<ContactNumber, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Contact number is required".into());
        }
        if trimmed.len() != DIGITS || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("Contact number must be exactly {} digits", DIGITS));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for ContactNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
