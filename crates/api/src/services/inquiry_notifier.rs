//! Email-backed inquiry notifier.

use async_trait::async_trait;
use domain::models::Inquiry;
use domain::services::{
    compose_inquiry_notification, notification_subject, ComposeOptions, InquiryNotifier,
    NotificationError,
};
use std::time::Duration;
use tracing::{info, warn};

use super::email::{EmailMessage, EmailService};
use crate::config::{EmailConfig, NotificationConfig};
use crate::middleware::metrics::record_notification_failed;

/// Sends the administrator mail through the configured email provider.
#[derive(Clone)]
pub struct EmailInquiryNotifier {
    email: EmailService,
    recipient: String,
    options: ComposeOptions,
}

impl EmailInquiryNotifier {
    pub fn new(email: &EmailConfig, notification: &NotificationConfig) -> Self {
        Self {
            email: EmailService::new(email.clone()),
            recipient: notification.admin_email.trim().to_string(),
            options: ComposeOptions {
                html: email.html_templates(),
                admin_console_url: notification.admin_console_url.clone(),
            },
        }
    }
}

#[async_trait]
impl InquiryNotifier for EmailInquiryNotifier {
    async fn notify_inquiry_created(&self, inquiry: &Inquiry) -> Result<(), NotificationError> {
        if !self.email.is_enabled() {
            return Ok(());
        }
        if self.recipient.is_empty() {
            return Err(NotificationError::NoRecipient);
        }

        let mail = compose_inquiry_notification(inquiry, &self.options);
        let subject = mail.subject.clone();

        self.email
            .send(EmailMessage {
                to: self.recipient.clone(),
                to_name: None,
                subject: mail.subject,
                body_text: mail.body_text,
                body_html: mail.body_html,
            })
            .await
            .map_err(|e| NotificationError::Delivery {
                recipient: self.recipient.clone(),
                subject,
                reason: e.to_string(),
            })
    }
}

/// Runs one notification attempt, giving up after `timeout`.
pub async fn attempt_inquiry_notification(
    notifier: &dyn InquiryNotifier,
    inquiry: &Inquiry,
    timeout: Duration,
) -> Result<(), NotificationError> {
    match tokio::time::timeout(timeout, notifier.notify_inquiry_created(inquiry)).await {
        Ok(result) => result,
        Err(_) => Err(NotificationError::TimedOut {
            subject: notification_subject(inquiry),
            after: timeout,
        }),
    }
}

/// Makes one bounded notification attempt and swallows any failure.
///
/// Failures are logged and counted; the caller never sees them.
pub async fn notify_inquiry_created_quietly(
    notifier: &dyn InquiryNotifier,
    inquiry: &Inquiry,
    timeout: Duration,
) {
    match attempt_inquiry_notification(notifier, inquiry, timeout).await {
        Ok(()) => info!(inquiry_id = inquiry.id, "Inquiry notification dispatched"),
        Err(NotificationError::Delivery {
            recipient,
            subject,
            reason,
        }) => {
            record_notification_failed();
            warn!(
                inquiry_id = inquiry.id,
                recipient = %recipient,
                subject = %subject,
                error = %reason,
                "Failed to send inquiry notification"
            );
        }
        Err(e @ NotificationError::TimedOut { .. }) => {
            record_notification_failed();
            warn!(
                inquiry_id = inquiry.id,
                timeout_ms = timeout.as_millis() as u64,
                error = %e,
                "Inquiry notification timed out"
            );
        }
        Err(e) => {
            record_notification_failed();
            warn!(
                inquiry_id = inquiry.id,
                subject = %notification_subject(inquiry),
                error = %e,
                "Failed to send inquiry notification"
            );
        }
    }
}
