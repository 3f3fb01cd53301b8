//! Reminder delivery channels.

pub mod email;
pub mod push;

use async_trait::async_trait;

use vocab_common::types::Reminder;

use crate::error::ChannelError;

/// Trait for delivery channels (SMTP email, push gateway).
#[async_trait]
pub trait NotifyChannel: Send + Sync {
    /// Get the name of this channel.
    fn name(&self) -> &'static str;

    /// Deliver a reminder through this channel.
    async fn send(&self, reminder: &Reminder) -> Result<(), ChannelError>;
}
