use askama::Template;

use crate::{
    configuration::SiteSettings,
    domain::{InquiryField, Location},
    form::{FormState, SubmissionStatus},
};

pub const SUCCESS_MESSAGE: &str =
    "Inquiry submitted successfully! You will receive project details soon.";
pub const FAILURE_MESSAGE: &str = "Failed to submit inquiry. Please try again.";

#[derive(Template)]
#[template(path = "inquiry.html")]
struct InquiryPage<'a> {
    site: &'a SiteSettings,
    show_banner: bool,
    show_modal: bool,
    success_message: &'a str,
    failure_message: &'a str,
    inputs: Vec<InputField<'a>>,
    locations: Vec<LocationOption>,
    location_error: Option<&'a str>,
    visit_date: InputField<'a>,
}

struct InputField<'a> {
    name: &'static str,
    label: &'static str,
    // Static markup, never user input
    attributes: &'static str,
    value: &'a str,
    error: Option<&'a str>,
}

impl<'a> InputField<'a> {
    fn new(
        state: &'a FormState,
        field: InquiryField,
        label: &'static str,
        attributes: &'static str,
    ) -> Self {
        Self {
            name: field.as_str(),
            label,
            attributes,
            value: state.fields().get(field),
            error: state.errors().get(field),
        }
    }
}

struct LocationOption {
    name: &'static str,
    selected: bool,
}

pub fn render(site: &SiteSettings, state: &FormState) -> Result<String, askama::Error> {
    let selected = state.fields().location.as_str();
    let page = InquiryPage {
        site,
        show_banner: state.status() == SubmissionStatus::Error,
        show_modal: state.status() == SubmissionStatus::Success,
        success_message: SUCCESS_MESSAGE,
        failure_message: FAILURE_MESSAGE,
        inputs: vec![
            InputField::new(state, InquiryField::Name, "Full Name", r#"type="text" maxlength="50""#),
            InputField::new(state, InquiryField::Age, "Age", r#"type="number" min="18" max="60""#),
            InputField::new(state, InquiryField::Email, "Email Address", r#"type="email""#),
            InputField::new(
                state,
                InquiryField::Contact,
                "Contact Number",
                r#"type="tel" placeholder="09XXXXXXXXX""#,
            ),
        ],
        locations: Location::ALL
            .into_iter()
            .map(|location| LocationOption {
                name: location.as_str(),
                selected: location.as_str() == selected,
            })
            .collect(),
        location_error: state.errors().get(InquiryField::Location),
        visit_date: InputField::new(
            state,
            InquiryField::VisitDate,
            "Preferred Date for Showroom / Condo Viewing",
            r#"type="date""#,
        ),
    };
    page.render()
}
