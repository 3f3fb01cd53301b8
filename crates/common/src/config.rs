use serde::Deserialize;

use crate::types::DeliveryChannel;

/// Default push gateway endpoint (FCM legacy HTTP API).
pub const DEFAULT_PUSH_URL: &str = "https://fcm.googleapis.com/fcm/send";

/// Default push target topic.
pub const DEFAULT_PUSH_TOPIC: &str = "/topics/vocabulary";

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// MongoDB connection string
    pub database_uri: String,

    /// Database holding the vocabulary collection (default: "eng")
    pub database_name: String,

    /// Vocabulary collection name (default: "vocab")
    pub collection_name: String,

    /// Interface the HTTP server binds to
    pub listen_addr: String,

    /// Port the HTTP server binds to
    pub port: u16,

    /// Channel used by the `/send` trigger
    pub channel: DeliveryChannel,

    /// Words sampled into a single reminder (default: 3)
    pub reminder_word_count: usize,

    /// Words returned by the `/words` listing (default: 20)
    pub word_list_size: usize,

    /// SMTP sender address, also the SMTP login
    pub mail_from: Option<String>,

    /// SMTP password / app token
    pub mail_token: Option<String>,

    /// Reminder recipient
    pub mail_to: Option<String>,

    /// SMTP server hostname
    pub mail_server: Option<String>,

    /// SMTP submission port (default: 587)
    pub mail_port: u16,

    /// Push gateway `Authorization` header value, sent verbatim
    pub push_token: Option<String>,

    /// Push gateway endpoint
    pub push_url: String,

    /// Push target (topic or device token)
    pub push_topic: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            database_uri: lookup("DB_URI")
                .ok_or_else(|| anyhow::anyhow!("DB_URI environment variable is required"))?,
            database_name: or_default("DB_NAME", "eng"),
            collection_name: or_default("DB_COLLECTION", "vocab"),
            listen_addr: or_default("LISTEN_ADDR", "0.0.0.0"),
            port: or_default("PORT", "8080")
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid u16"))?,
            channel: or_default("NOTIFY_CHANNEL", "email")
                .parse()
                .map_err(|e| anyhow::anyhow!("NOTIFY_CHANNEL: {}", e))?,
            reminder_word_count: or_default("REMINDER_WORD_COUNT", "3")
                .parse()
                .map_err(|_| anyhow::anyhow!("REMINDER_WORD_COUNT must be a valid usize"))?,
            word_list_size: or_default("WORD_LIST_SIZE", "20")
                .parse()
                .map_err(|_| anyhow::anyhow!("WORD_LIST_SIZE must be a valid usize"))?,
            mail_from: lookup("MAIL_FROM"),
            mail_token: lookup("MAIL_TOKEN"),
            mail_to: lookup("MAIL_TO"),
            mail_server: lookup("MAIL_SERVER"),
            mail_port: or_default("MAIL_PORT", "587")
                .parse()
                .map_err(|_| anyhow::anyhow!("MAIL_PORT must be a valid u16"))?,
            push_token: lookup("TOKEN"),
            push_url: or_default("PUSH_URL", DEFAULT_PUSH_URL),
            push_topic: or_default("PUSH_TOPIC", DEFAULT_PUSH_TOPIC),
        })
    }

    /// `host:port` string the HTTP server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.listen_addr, self.port)
    }
}
