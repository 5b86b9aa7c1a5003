use serde_aux::field_attributes::deserialize_string_from_number;

use crate::domain::{
    ContactNumber, EmailAddress, FieldErrors, InquirerAge, InquirerName, InquiryField, Location,
};

/// Raw inquiry fields exactly as the visitor typed them.
///
/// Shared by the JSON endpoint and the HTML form, so every field defaults to an empty
/// string when it is absent from the payload.
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct InquiryForm {
    pub name: String,
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub age: String,
    pub email: String,
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub contact: String,
    pub location: String,
    pub visit_date: String,
}

impl InquiryForm {
    pub fn get(&self, field: InquiryField) -> &str {
        match field {
            InquiryField::Name => &self.name,
            InquiryField::Age => &self.age,
            InquiryField::Email => &self.email,
            InquiryField::Contact => &self.contact,
            InquiryField::Location => &self.location,
            InquiryField::VisitDate => &self.visit_date,
        }
    }

    pub fn set(&mut self, field: InquiryField, value: String) {
        match field {
            InquiryField::Name => self.name = value,
            InquiryField::Age => self.age = value,
            InquiryField::Email => self.email = value,
            InquiryField::Contact => self.contact = value,
            InquiryField::Location => self.location = value,
            InquiryField::VisitDate => self.visit_date = value,
        }
    }
}

/// An inquiry that passed validation and is ready to be forwarded.
#[derive(Debug, Clone)]
pub struct NewInquiry {
    pub name: InquirerName,
    pub age: InquirerAge,
    pub email: EmailAddress,
    pub contact: ContactNumber,
    pub location: Location,
    pub visit_date: Option<String>,
}

impl NewInquiry {
    /// Runs every field rule and reports all failing fields at once.
    pub fn parse(form: &InquiryForm) -> Result<NewInquiry, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = record(&mut errors, InquiryField::Name, || {
            InquirerName::parse(form.name.clone())
        });
        let age = record(&mut errors, InquiryField::Age, || {
            InquirerAge::parse(form.age.clone())
        });
        let email = record(&mut errors, InquiryField::Email, || {
            EmailAddress::parse(form.email.clone())
        });
        let contact = record(&mut errors, InquiryField::Contact, || {
            ContactNumber::parse(form.contact.clone())
        });
        let location = record(&mut errors, InquiryField::Location, || {
            Location::parse(form.location.clone())
        });
        let visit_date = Some(form.visit_date.trim())
            .filter(|date| !date.is_empty())
            .map(str::to_string);

        match (name, age, email, contact, location) {
            (Some(name), Some(age), Some(email), Some(contact), Some(location)) => Ok(Self {
                name,
                age,
                email,
                contact,
                location,
                visit_date,
            }),
            _ => Err(errors),
        }
    }
}

fn record<T>(
    errors: &mut FieldErrors,
    field: InquiryField,
    parse: impl FnOnce() -> Result<T, String>,
) -> Option<T> {
    match parse() {
        Ok(value) => Some(value),
        Err(message) => {
            errors.insert(field, message);
            None
        }
    }
}
