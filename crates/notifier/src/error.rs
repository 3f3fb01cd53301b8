//! Error types for reminder delivery.

use thiserror::Error;

/// Errors that can occur when delivering a reminder.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// HTTP request to the push gateway failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// SMTP session failed (connect, STARTTLS, auth or send)
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Sender or recipient address could not be parsed
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// Email message could not be built
    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    /// Channel is missing required settings
    #[error("Channel not configured: {0}")]
    NotConfigured(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}
