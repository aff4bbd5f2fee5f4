pub mod error;
pub mod form_validation;
pub mod handlers;
pub mod prompts;
pub mod report_validation;
pub mod request;
pub mod service;
