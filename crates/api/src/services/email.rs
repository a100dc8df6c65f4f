//! Email service for administrator notifications.
//!
//! Supports multiple email providers:
//! - `console`: Logs emails to console (development)
//! - `smtp`: Sends via SMTP server
//! - `sendgrid`: Uses SendGrid API

use crate::config::EmailConfig;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};

const SENDGRID_ENDPOINT: &str = "https://api.sendgrid.com/v3/mail/send";

/// Errors that can occur during email operations.
#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Email service not configured: {0}")]
    NotConfigured(String),

    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    #[error("Failed to send email: {0}")]
    SendFailed(String),

    #[error("Provider error: {0}")]
    ProviderError(String),
}

/// Email message to be sent.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    /// Recipient email address
    pub to: String,
    /// Recipient name (optional)
    pub to_name: Option<String>,
    /// Email subject
    pub subject: String,
    /// Plain text body
    pub body_text: String,
    /// HTML body (optional)
    pub body_html: Option<String>,
}

/// Email service for sending transactional emails.
#[derive(Clone)]
pub struct EmailService {
    config: Arc<EmailConfig>,
}

impl EmailService {
    /// Creates a new EmailService with the given configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns true if email sending is enabled.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn provider(&self) -> &str {
        &self.config.provider
    }

    fn transport_timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_secs)
    }

    /// Sends an email using the configured provider.
    ///
    /// A disabled service logs the message and reports success.
    pub async fn send(&self, message: EmailMessage) -> Result<(), EmailError> {
        if !self.config.enabled {
            debug!(
                to = %message.to,
                subject = %message.subject,
                "Email sending disabled, skipping"
            );
            return Ok(());
        }

        match self.config.provider.as_str() {
            "console" => self.send_console(message).await,
            "smtp" => self.send_smtp(message).await,
            "sendgrid" => self.send_sendgrid(message).await,
            other => Err(EmailError::NotConfigured(format!(
                "unknown email provider '{}'",
                other
            ))),
        }
    }

    async fn send_console(&self, message: EmailMessage) -> Result<(), EmailError> {
        info!(
            to = %message.to,
            to_name = ?message.to_name,
            subject = %message.subject,
            from = %self.config.sender_email,
            from_name = %self.config.sender_name,
            "Email (console provider)"
        );

        info!(body_text = %message.body_text, "Email body (plain text)");

        if let Some(html) = &message.body_html {
            debug!(body_html_length = html.len(), "Email body (HTML)");
        }

        Ok(())
    }

    async fn send_smtp(&self, message: EmailMessage) -> Result<(), EmailError> {
        if self.config.smtp_host.is_empty() {
            return Err(EmailError::NotConfigured("smtp_host is empty".into()));
        }

        let email = self.build_message(&message)?;

        let builder = if self.config.smtp_use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)
                .map_err(|e| EmailError::NotConfigured(format!("SMTP relay: {}", e)))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.config.smtp_host)
        };

        let mut builder = builder
            .port(self.config.smtp_port)
            .timeout(Some(self.transport_timeout()));
        if !self.config.smtp_username.is_empty() {
            builder = builder.credentials(Credentials::new(
                self.config.smtp_username.clone(),
                self.config.smtp_password.clone(),
            ));
        }
        let transport = builder.build();

        match transport.send(email).await {
            Ok(_) => {
                info!(
                    to = %message.to,
                    subject = %message.subject,
                    host = %self.config.smtp_host,
                    "Email sent via SMTP"
                );
                Ok(())
            }
            Err(e) => {
                error!(host = %self.config.smtp_host, error = %e, "SMTP delivery failed");
                Err(EmailError::SendFailed(format!("SMTP: {}", e)))
            }
        }
    }

    fn build_message(&self, message: &EmailMessage) -> Result<Message, EmailError> {
        let from = mailbox(Some(&self.config.sender_name), &self.config.sender_email)?;
        let to = mailbox(message.to_name.as_deref(), &message.to)?;

        let builder = Message::builder()
            .from(from)
            .to(to)
            .subject(message.subject.clone());

        let built = match &message.body_html {
            Some(html) => builder.multipart(MultiPart::alternative_plain_html(
                message.body_text.clone(),
                html.clone(),
            )),
            None => builder.singlepart(SinglePart::plain(message.body_text.clone())),
        };

        built.map_err(|e| EmailError::SendFailed(format!("Failed to build message: {}", e)))
    }

    async fn send_sendgrid(&self, message: EmailMessage) -> Result<(), EmailError> {
        if self.config.sendgrid_api_key.is_empty() {
            return Err(EmailError::NotConfigured("sendgrid_api_key is empty".into()));
        }

        let mut recipient = serde_json::json!({ "email": message.to });
        if let Some(name) = &message.to_name {
            recipient["name"] = serde_json::json!(name);
        }

        let mut content = vec![serde_json::json!({
            "type": "text/plain",
            "value": message.body_text
        })];
        if let Some(html) = &message.body_html {
            content.push(serde_json::json!({
                "type": "text/html",
                "value": html
            }));
        }

        let body = serde_json::json!({
            "personalizations": [{ "to": [recipient] }],
            "from": {
                "email": self.config.sender_email,
                "name": self.config.sender_name
            },
            "subject": message.subject,
            "content": content
        });

        let client = reqwest::Client::builder()
            .timeout(self.transport_timeout())
            .build()
            .map_err(|e| EmailError::NotConfigured(format!("SendGrid client: {}", e)))?;

        let response = client
            .post(SENDGRID_ENDPOINT)
            .bearer_auth(&self.config.sendgrid_api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| EmailError::SendFailed(format!("SendGrid request failed: {}", e)))?;

        if response.status().is_success() {
            info!(
                to = %message.to,
                subject = %message.subject,
                "Email sent via SendGrid"
            );
            Ok(())
        } else {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_body, "SendGrid API error");
            Err(EmailError::ProviderError(format!(
                "SendGrid returned {}: {}",
                status, error_body
            )))
        }
    }
}

fn mailbox(name: Option<&str>, address: &str) -> Result<Mailbox, EmailError> {
    let address = address
        .parse::<Address>()
        .map_err(|_| EmailError::InvalidAddress(address.to_string()))?;
    Ok(Mailbox::new(
        name.filter(|n| !n.is_empty()).map(str::to_string),
        address,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> EmailConfig {
        EmailConfig {
            enabled: true,
            provider: "console".to_string(),
            sender_email: "noreply@example.com".to_string(),
            sender_name: "Corporate Site".to_string(),
            ..EmailConfig::default()
        }
    }

    fn message(body_html: Option<&str>) -> EmailMessage {
        EmailMessage {
            to: "admin@example.com".to_string(),
            to_name: None,
            subject: "New inquiry".to_string(),
            body_text: "Hello".to_string(),
            body_html: body_html.map(str::to_string),
        }
    }

    #[test]
    fn test_email_service_creation() {
        let service = EmailService::new(test_config());
        assert!(service.is_enabled());
        assert_eq!(service.provider(), "console");
    }

    #[tokio::test]
    async fn test_send_console_email() {
        let service = EmailService::new(test_config());
        assert!(service.send(message(Some("<p>Hello</p>"))).await.is_ok());
    }

    #[tokio::test]
    async fn test_send_disabled_silently_succeeds() {
        let service = EmailService::new(EmailConfig {
            enabled: false,
            provider: "smtp".to_string(),
            ..test_config()
        });
        assert!(service.send(message(None)).await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_provider_is_rejected() {
        let service = EmailService::new(EmailConfig {
            provider: "pigeon".to_string(),
            ..test_config()
        });
        let result = service.send(message(None)).await;
        assert!(matches!(result, Err(EmailError::NotConfigured(_))));
    }

    #[tokio::test]
    async fn test_smtp_without_host_is_not_configured() {
        let service = EmailService::new(EmailConfig {
            provider: "smtp".to_string(),
            ..test_config()
        });
        let result = service.send(message(None)).await;
        assert!(matches!(result, Err(EmailError::NotConfigured(_))));
    }

    #[tokio::test]
    async fn test_sendgrid_without_key_is_not_configured() {
        let service = EmailService::new(EmailConfig {
            provider: "sendgrid".to_string(),
            ..test_config()
        });
        let result = service.send(message(None)).await;
        assert!(matches!(result, Err(EmailError::NotConfigured(_))));
    }

    #[test]
    fn test_transport_timeout_follows_config() {
        let service = EmailService::new(EmailConfig {
            timeout_secs: 3,
            ..test_config()
        });
        assert_eq!(service.transport_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_build_message_rejects_invalid_recipient() {
        let service = EmailService::new(test_config());
        let mut msg = message(None);
        msg.to = "not an address".to_string();
        assert!(matches!(
            service.build_message(&msg),
            Err(EmailError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_build_message_with_html_alternative() {
        let service = EmailService::new(test_config());
        let built = service.build_message(&message(Some("<p>Hello</p>"))).unwrap();
        let raw = String::from_utf8(built.formatted()).unwrap();
        assert!(raw.contains("multipart/alternative"));
        assert!(raw.contains("Subject: New inquiry"));
    }
}
