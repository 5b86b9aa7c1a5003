use std::ops::RangeInclusive;

const ACCEPTED_AGES: RangeInclusive<u8> = 18..=60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InquirerAge(u8);

impl InquirerAge {
    pub fn parse(s: String) -> Result<InquirerAge, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Age is required".into());
        }
        // Anything that is not a whole number in range gets the same message.
        match trimmed.parse::<u8>() {
            Ok(age) if ACCEPTED_AGES.contains(&age) => Ok(Self(age)),
            _ => Err(format!(
                "Age must be between {} and {}",
                ACCEPTED_AGES.start(),
                ACCEPTED_AGES.end()
            )),
        }
    }
}

impl std::fmt::Display for InquirerAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
