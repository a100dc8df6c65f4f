//! Domain services for the corporate site.
//!
//! Services contain business logic that operates on domain models.

pub mod export;
pub mod notification;

pub use export::{
    arrange_by_selection, export_inquiries_csv, ArrangedSelection, ExportError,
    INQUIRY_EXPORT_HEADERS, UTF8_BOM,
};

pub use notification::{
    compose_inquiry_notification, notification_subject, ComposeOptions, InquiryNotification,
    InquiryNotifier, MockInquiryNotifier, NotificationError,
};
