//! Reminder delivery for the vocabulary reminder service.
//!
//! Exactly one channel is active per deployment, selected by
//! `NOTIFY_CHANNEL`:
//!
//! - `email`: SMTP with STARTTLS + LOGIN auth (`MAIL_FROM`, `MAIL_TOKEN`,
//!   `MAIL_TO`, `MAIL_SERVER`, `MAIL_PORT`)
//! - `push`: JSON POST to a push gateway (`TOKEN`, `PUSH_URL`, `PUSH_TOPIC`)
//!
//! Delivery is a single attempt; failures are returned to the caller.

pub mod channels;
pub mod error;

pub use channels::NotifyChannel;
pub use channels::email::{EmailChannel, EmailSettings};
pub use channels::push::PushChannel;
pub use error::ChannelError;

use std::sync::Arc;

use vocab_common::config::AppConfig;
use vocab_common::types::DeliveryChannel;

/// Build the channel selected by the configuration.
pub fn channel_from_config(config: &AppConfig) -> Result<Arc<dyn NotifyChannel>, ChannelError> {
    let channel: Arc<dyn NotifyChannel> = match config.channel {
        DeliveryChannel::Email => Arc::new(EmailChannel::from_config(config)?),
        DeliveryChannel::Push => Arc::new(PushChannel::from_config(config)?),
    };

    tracing::info!(channel = channel.name(), "Delivery channel initialized");
    Ok(channel)
}
