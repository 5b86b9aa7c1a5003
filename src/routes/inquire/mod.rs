mod get;
mod page;
mod post;

pub use get::inquiry_page;
pub use post::submit_inquiry;
