mod contact_service;
mod mailer;

pub use contact_service::ContactService;
pub use mailer::Mailer;
