//! External service integrations.

pub mod admin_bootstrap;
pub mod email;
pub mod inquiry_notifier;

pub use admin_bootstrap::{bootstrap_admin_key, BootstrapOutcome};
pub use email::{EmailError, EmailMessage, EmailService};
pub use inquiry_notifier::{
    attempt_inquiry_notification, notify_inquiry_created_quietly, EmailInquiryNotifier,
};
