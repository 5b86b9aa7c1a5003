use std::collections::BTreeMap;

/// The inputs of the inquiry form, serialized under their wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InquiryField {
    Name,
    Age,
    Email,
    Contact,
    Location,
    VisitDate,
}

impl InquiryField {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryField::Name => "name",
            InquiryField::Age => "age",
            InquiryField::Email => "email",
            InquiryField::Contact => "contact",
            InquiryField::Location => "location",
            InquiryField::VisitDate => "visitDate",
        }
    }
}

/// Validation messages keyed by the field they belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<InquiryField, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: InquiryField, message: String) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: InquiryField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (InquiryField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.as_str(), message)?;
            first = false;
        }
        Ok(())
    }
}
