//! Contact - Form submission, success panel and notifications

pub mod controller;
pub mod notification;

pub use controller::ContactController;
pub use notification::{Notification, Notifications, Severity};
