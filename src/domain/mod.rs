mod contact_number;
mod email_address;
mod inquirer_age;
mod inquirer_name;
mod inquiry_field;
mod location;
mod new_inquiry;

pub use contact_number::ContactNumber;
pub use email_address::EmailAddress;
pub use inquirer_age::InquirerAge;
pub use inquirer_name::InquirerName;
pub use inquiry_field::{FieldErrors, InquiryField};
pub use location::Location;
pub use new_inquiry::{InquiryForm, NewInquiry};
