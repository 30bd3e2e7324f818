//! Notification domain module

mod command;
mod request;
mod urgency;

pub use command::ExternalCommand;
pub use request::NotificationRequest;
pub use urgency::Urgency;
