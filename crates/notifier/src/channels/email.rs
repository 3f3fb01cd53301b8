//! SMTP email channel.
//!
//! Connects to the submission port, upgrades with STARTTLS and logs in with
//! the LOGIN mechanism. The sender address doubles as the SMTP username.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::{Credentials, Mechanism};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, info};

use vocab_common::config::AppConfig;
use vocab_common::types::Reminder;

use crate::channels::NotifyChannel;
use crate::error::ChannelError;

/// SMTP connection settings.
#[derive(Debug, Clone)]
pub struct EmailSettings {
    pub from: String,
    pub token: String,
    pub to: String,
    pub server: String,
    pub port: u16,
}

impl EmailSettings {
    /// Extract SMTP settings, naming the first missing variable.
    pub fn from_config(config: &AppConfig) -> Result<Self, ChannelError> {
        let required = |value: &Option<String>, key: &str| {
            value
                .clone()
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ChannelError::NotConfigured(key.to_string()))
        };

        Ok(Self {
            from: required(&config.mail_from, "MAIL_FROM")?,
            token: required(&config.mail_token, "MAIL_TOKEN")?,
            to: required(&config.mail_to, "MAIL_TO")?,
            server: required(&config.mail_server, "MAIL_SERVER")?,
            port: config.mail_port,
        })
    }
}

/// Delivers reminders as plain-text email.
pub struct EmailChannel {
    from: Mailbox,
    to: Mailbox,
    server: String,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailChannel {
    pub fn new(settings: EmailSettings) -> Result<Self, ChannelError> {
        let from: Mailbox = settings.from.parse()?;
        let to: Mailbox = settings.to.parse()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.server)?
            .port(settings.port)
            .credentials(Credentials::new(settings.from.clone(), settings.token))
            .authentication(vec![Mechanism::Login])
            .build();

        debug!(server = %settings.server, port = settings.port, "SMTP transport configured");

        Ok(Self {
            from,
            to,
            server: settings.server,
            transport,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ChannelError> {
        Self::new(EmailSettings::from_config(config)?)
    }

    /// Build the outgoing message: subject is the title, body the word lines.
    pub fn build_message(&self, reminder: &Reminder) -> Result<Message, ChannelError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(reminder.title.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(reminder.body.clone())?;
        Ok(message)
    }
}

#[async_trait]
impl NotifyChannel for EmailChannel {
    fn name(&self) -> &'static str {
        "email"
    }

    async fn send(&self, reminder: &Reminder) -> Result<(), ChannelError> {
        let message = self.build_message(reminder)?;

        debug!(
            channel = "email",
            server = %self.server,
            reminder_id = %reminder.id,
            "Sending reminder"
        );

        self.transport.send(message).await?;

        info!(
            channel = "email",
            to = %self.to,
            subject = %reminder.title,
            "Email sent successfully"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn settings() -> EmailSettings {
        EmailSettings {
            from: "reminder@example.com".to_string(),
            token: "app-password".to_string(),
            to: "learner@example.com".to_string(),
            server: "smtp.example.com".to_string(),
            port: 587,
        }
    }

    fn reminder() -> Reminder {
        Reminder {
            id: Uuid::new_v4(),
            title: "APPLE - BANANA".to_string(),
            body: "- apple | elma | fruit\n- banana | muz | yellow\n".to_string(),
            words: vec!["apple".to_string(), "banana".to_string()],
            created_at: Utc::now(),
        }
    }

    fn config_with_mail() -> AppConfig {
        AppConfig::from_lookup(|key| {
            match key {
                "DB_URI" => Some("mongodb://localhost"),
                "MAIL_FROM" => Some("reminder@example.com"),
                "MAIL_TOKEN" => Some("secret"),
                "MAIL_TO" => Some("learner@example.com"),
                "MAIL_SERVER" => Some("smtp.example.com"),
                "MAIL_PORT" => Some("2525"),
                _ => None,
            }
            .map(str::to_string)
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_message_headers_and_body() {
        let channel = EmailChannel::new(settings()).unwrap();
        let message = channel.build_message(&reminder()).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("From: reminder@example.com"));
        assert!(raw.contains("To: learner@example.com"));
        assert!(raw.contains("Subject: APPLE - BANANA"));
        assert!(raw.contains("Content-Type: text/plain"));
        assert!(raw.contains("- apple | elma | fruit"));
    }

    #[test]
    fn test_settings_from_config() {
        let settings = EmailSettings::from_config(&config_with_mail()).unwrap();
        assert_eq!(settings.server, "smtp.example.com");
        assert_eq!(settings.port, 2525);
        assert_eq!(settings.from, "reminder@example.com");
    }

    #[test]
    fn test_missing_settings_named() {
        let mut config = config_with_mail();
        config.mail_to = None;

        match EmailSettings::from_config(&config) {
            Err(ChannelError::NotConfigured(key)) => assert_eq!(key, "MAIL_TO"),
            other => panic!("expected NotConfigured, got {:?}", other.map(|s| s.to)),
        }
    }

    #[tokio::test]
    async fn test_invalid_address_rejected() {
        let mut bad = settings();
        bad.to = "not an address".to_string();
        assert!(matches!(
            EmailChannel::new(bad),
            Err(ChannelError::Address(_))
        ));
    }
}
