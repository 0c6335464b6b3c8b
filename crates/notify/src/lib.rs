//! Chat transport for pool balance notifications.
//!
//! The [`Notifier`] trait is the seam the scheduler dispatches through:
//! establish a session once, resolve the destination channel on every
//! cycle, then send plain-text messages to it. [`DiscordNotifier`] implements
//! it against the Discord REST API.

mod discord;
#[cfg(test)]
mod test_utils;

pub use discord::{DiscordNotifier, DISCORD_API_BASE};

use std::{fmt, future::Future};
use thiserror::Error;

/// Numeric destination channel identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelId(pub u64);

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A channel handle that resolved successfully and can receive messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: ChannelId,
    pub name: Option<String>,
}

/// Identity of the bot account once the session is established.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    pub user_id: String,
    pub username: String,
}

#[derive(Error, Debug)]
pub enum NotifyError {
    /// Error parsing or validating the API base URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Bot token is empty
    #[error("Bot token is empty")]
    EmptyToken,

    /// Transport-level failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Bot token was rejected
    #[error("Bot token rejected: {0}")]
    Unauthorized(String),

    /// Channel does not exist or is not visible to the bot
    #[error("Failed to fetch channel with ID {0}")]
    ChannelNotFound(ChannelId),

    /// Any other non-success HTTP status
    #[error("Chat API returned {status}: {body}")]
    Status { status: u16, body: String },
}

impl NotifyError {
    /// Whether the transport could not be reached or refused the request.
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. })
    }
}

/// Outbound notification transport.
pub trait Notifier: Send + Sync {
    /// Establish the session, validating the credential.
    fn connect(&self) -> impl Future<Output = Result<SessionInfo, NotifyError>> + Send;

    /// Resolve a channel identifier to a handle messages can be sent to.
    fn resolve_channel(
        &self,
        id: ChannelId,
    ) -> impl Future<Output = Result<Channel, NotifyError>> + Send;

    /// Send a plain-text message.
    fn send(
        &self,
        channel: &Channel,
        message: &str,
    ) -> impl Future<Output = Result<(), NotifyError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_id_display() {
        assert_eq!(ChannelId(1_234_567_890_123).to_string(), "1234567890123");
    }

    #[test]
    fn test_channel_not_found_message() {
        let err = NotifyError::ChannelNotFound(ChannelId(42));
        assert_eq!(err.to_string(), "Failed to fetch channel with ID 42");
        assert!(!err.is_network());
    }
}
