//! Inquiry notification service.
//!
//! Composes the administrator mail sent for every newly created inquiry and
//! defines the delivery seam used by the API layer.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::models::Inquiry;

/// Options controlling how the notification mail is rendered.
#[derive(Debug, Clone, Default)]
pub struct ComposeOptions {
    /// Render an HTML alternative next to the plain-text body.
    pub html: bool,
    /// Link to the inquiry list in the admin console, shown in the HTML body.
    pub admin_console_url: Option<String>,
}

/// A rendered notification mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryNotification {
    pub subject: String,
    pub body_text: String,
    pub body_html: Option<String>,
}

/// Error raised when a notification cannot be delivered.
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("failed to deliver \"{subject}\" to {recipient}: {reason}")]
    Delivery {
        recipient: String,
        subject: String,
        reason: String,
    },

    #[error("notification recipient is not configured")]
    NoRecipient,

    #[error("delivery of \"{subject}\" timed out after {after:?}")]
    TimedOut { subject: String, after: Duration },
}

/// Builds the subject line for an inquiry notification.
pub fn notification_subject(inquiry: &Inquiry) -> String {
    format!(
        "[문의 알림] {} ({}님)로부터 새로운 문의가 도착했습니다.",
        inquiry.company, inquiry.name
    )
}

/// Renders the notification mail for a newly created inquiry.
pub fn compose_inquiry_notification(
    inquiry: &Inquiry,
    options: &ComposeOptions,
) -> InquiryNotification {
    InquiryNotification {
        subject: notification_subject(inquiry),
        body_text: render_text(inquiry),
        body_html: options
            .html
            .then(|| render_html(inquiry, options.admin_console_url.as_deref())),
    }
}

fn render_text(inquiry: &Inquiry) -> String {
    format!(
        "[새로운 문의 상세]\n\
         - 유형: {}\n\
         - 회사명: {}\n\
         - 담당자: {}\n\
         - 연락처: {}\n\
         - 이메일: {}\n\
         \n\
         내용:\n\
         {}\n",
        inquiry.category.label(),
        inquiry.company,
        inquiry.name,
        inquiry.phone,
        inquiry.email,
        inquiry.message,
    )
}

const HTML_STYLE: &str = "\
body { font-family: 'Malgun Gothic', 'Apple SD Gothic Neo', sans-serif; line-height: 1.6; color: #333; }
.container { max-width: 600px; margin: 0 auto; border: 1px solid #ddd; border-top: 4px solid #0d47a1; background-color: #fff; }
.header { background-color: #f8f9fa; padding: 20px; text-align: center; border-bottom: 1px solid #eee; }
.header h1 { margin: 0; color: #0d47a1; font-size: 24px; }
.content { padding: 30px; }
.info-box { background-color: #f5f7fa; padding: 20px; border-radius: 5px; margin-bottom: 20px; }
.info-row { margin-bottom: 10px; border-bottom: 1px solid #e0e0e0; padding-bottom: 5px; }
.info-label { font-weight: bold; color: #555; display: inline-block; width: 80px; }
.message-box { padding: 15px; background-color: #fff; border: 1px solid #e0e0e0; border-radius: 4px; border-left: 4px solid #1976d2; }
.footer { text-align: center; font-size: 12px; color: #888; padding: 20px; background-color: #f8f9fa; border-top: 1px solid #eee; }
.btn { display: inline-block; padding: 10px 20px; background-color: #0d47a1; color: #fff; text-decoration: none; border-radius: 4px; font-weight: bold; margin-top: 20px; }";

fn render_html(inquiry: &Inquiry, admin_console_url: Option<&str>) -> String {
    let text = |s: &str| html_escape::encode_text(s).into_owned();

    let message = inquiry
        .message
        .lines()
        .map(text)
        .collect::<Vec<_>>()
        .join("<br>");

    let email_href = html_escape::encode_double_quoted_attribute(&inquiry.email);

    let button = admin_console_url
        .map(|url| {
            format!(
                "<div style=\"text-align: center;\"><a href=\"{}\" class=\"btn\" style=\"color: #fff;\">관리자 페이지에서 확인하기</a></div>",
                html_escape::encode_double_quoted_attribute(url)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
{style}
</style>
</head>
<body>
<div class="container">
<div class="header">
<h1>YM Information Tech</h1>
<p style="margin: 5px 0 0; color: #666; font-size: 14px;">새로운 홈페이지 문의가 접수되었습니다.</p>
</div>
<div class="content">
<div class="info-box">
<div class="info-row"><span class="info-label">문의유형</span> {category}</div>
<div class="info-row"><span class="info-label">회사명</span> {company}</div>
<div class="info-row"><span class="info-label">담당자</span> {name}</div>
<div class="info-row"><span class="info-label">연락처</span> {phone}</div>
<div class="info-row" style="border-bottom: none;"><span class="info-label">이메일</span> <a href="mailto:{email_href}">{email}</a></div>
</div>
<p style="font-weight: bold; margin-bottom: 10px;">문의 내용:</p>
<div class="message-box">{message}</div>
{button}
</div>
<div class="footer">
본 메일은 (주)와이엠정보통신 홈페이지에서 발송된 알림 메일입니다.<br>
&copy; YM Information Technology. All rights reserved.
</div>
</div>
</body>
</html>
"#,
        style = HTML_STYLE,
        category = text(inquiry.category.label()),
        company = text(&inquiry.company),
        name = text(&inquiry.name),
        phone = text(&inquiry.phone),
        email_href = email_href,
        email = text(&inquiry.email),
        message = message,
        button = button,
    )
}

/// Delivery seam for inquiry notifications.
#[async_trait::async_trait]
pub trait InquiryNotifier: Send + Sync {
    /// Notify the administrator that an inquiry was created.
    ///
    /// Implementations make a single delivery attempt.
    async fn notify_inquiry_created(&self, inquiry: &Inquiry) -> Result<(), NotificationError>;
}

/// Mock notifier for development and testing.
///
/// Records every attempt and never talks to a mail server.
#[derive(Debug, Clone, Default)]
pub struct MockInquiryNotifier {
    attempts: Arc<AtomicUsize>,
    /// Whether to simulate failures for testing.
    pub simulate_failure: bool,
}

impl MockInquiryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock notifier that fails every delivery.
    pub fn failing() -> Self {
        Self {
            attempts: Arc::default(),
            simulate_failure: true,
        }
    }

    /// Number of delivery attempts made so far, across all clones.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl InquiryNotifier for MockInquiryNotifier {
    async fn notify_inquiry_created(&self, inquiry: &Inquiry) -> Result<(), NotificationError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let subject = notification_subject(inquiry);

        if self.simulate_failure {
            tracing::warn!(
                inquiry_id = %inquiry.id,
                "Mock inquiry notifier simulating failure"
            );
            return Err(NotificationError::Delivery {
                recipient: "admin@example.com".to_string(),
                subject,
                reason: "Simulated failure".to_string(),
            });
        }

        tracing::info!(
            inquiry_id = %inquiry.id,
            subject = %subject,
            "Mock: Would send inquiry notification"
        );
        Ok(())
    }
}
