use unicode_segmentation::UnicodeSegmentation;

const MAX_LENGTH: usize = 50;

#[derive(Debug, Clone)]
pub struct InquirerName(String);

impl InquirerName {
    /// Returns an instance of `InquirerName` if the input is non-blank and at most
    /// fifty user-perceived characters long.
    pub fn parse(s: String) -> Result<InquirerName, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Name is required".into());
        }
        // A grapheme is defined by the Unicode standard as a "user-perceived"
        // character: `ñ` is a single grapheme, but it may be composed of two characters.
        if trimmed.graphemes(true).count() > MAX_LENGTH {
            return Err(format!("Name must be {} characters or less", MAX_LENGTH));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for InquirerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
