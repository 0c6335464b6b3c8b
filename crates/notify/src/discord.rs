//! Discord REST transport.
//!
//! Only three endpoints are used: `GET /users/@me` to establish the session,
//! `GET /channels/{id}` to resolve the destination, and
//! `POST /channels/{id}/messages` to deliver the message.

use crate::{Channel, ChannelId, Notifier, NotifyError, SessionInfo};
use reqwest::{header::AUTHORIZATION, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Discord REST API v10.
pub const DISCORD_API_BASE: &str = "https://discord.com/api/v10";

/// Notifier posting to Discord channels as a bot user.
#[derive(Debug, Clone)]
pub struct DiscordNotifier {
    client: reqwest::Client,
    api_base: Url,
    token: String,
}

impl DiscordNotifier {
    /// Creates a notifier whose requests fail after `timeout`.
    pub fn new(
        api_base: &str,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Self::with_client(client, api_base, token)
    }

    /// Creates a notifier with a custom HTTP client and API base URL.
    pub fn with_client(
        client: reqwest::Client,
        api_base: &str,
        token: impl Into<String>,
    ) -> Result<Self, NotifyError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(NotifyError::EmptyToken);
        }

        // Keep a trailing slash so `join` appends instead of replacing the
        // last path segment.
        let api_base = format!("{}/", api_base.trim_end_matches('/'))
            .parse()
            .map_err(|e| NotifyError::InvalidUrl(format!("{}", e)))?;

        Ok(Self {
            client,
            api_base,
            token,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, NotifyError> {
        self.api_base
            .join(path)
            .map_err(|e| NotifyError::InvalidUrl(format!("{}", e)))
    }

    fn authorization(&self) -> String {
        format!("Bot {}", self.token)
    }
}

impl Notifier for DiscordNotifier {
    async fn connect(&self) -> Result<SessionInfo, NotifyError> {
        let response = self
            .client
            .get(self.endpoint("users/@me")?)
            .header(AUTHORIZATION, self.authorization())
            .send()
            .await?;

        let user: User = check_status(response, None).await?.json().await?;

        Ok(SessionInfo {
            user_id: user.id,
            username: user.username,
        })
    }

    async fn resolve_channel(&self, id: ChannelId) -> Result<Channel, NotifyError> {
        let response = self
            .client
            .get(self.endpoint(&format!("channels/{id}"))?)
            .header(AUTHORIZATION, self.authorization())
            .send()
            .await?;

        let channel: ChannelObject = check_status(response, Some(id)).await?.json().await?;
        debug!(channel = %id, name = ?channel.name, "Resolved channel");

        Ok(Channel {
            id,
            name: channel.name,
        })
    }

    async fn send(&self, channel: &Channel, message: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.endpoint(&format!("channels/{}/messages", channel.id))?)
            .header(AUTHORIZATION, self.authorization())
            .json(&CreateMessage { content: message })
            .send()
            .await?;

        check_status(response, None).await?;

        Ok(())
    }
}

/// Passes successful responses through and maps failures to [`NotifyError`].
async fn check_status(
    response: Response,
    channel: Option<ChannelId>,
) -> Result<Response, NotifyError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown".to_string());

    Err(status_error(status, body, channel))
}

/// Discord answers 404 for unknown channels and 403 for channels the bot
/// cannot see; both mean the destination does not resolve.
fn status_error(status: StatusCode, body: String, channel: Option<ChannelId>) -> NotifyError {
    match (status, channel) {
        (StatusCode::UNAUTHORIZED, _) => NotifyError::Unauthorized(body),
        (StatusCode::NOT_FOUND | StatusCode::FORBIDDEN, Some(id)) => {
            NotifyError::ChannelNotFound(id)
        }
        _ => NotifyError::Status {
            status: status.as_u16(),
            body,
        },
    }
}

#[derive(Debug, Deserialize)]
struct User {
    id: String,
    username: String,
}

#[derive(Debug, Deserialize)]
struct ChannelObject {
    name: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreateMessage<'a> {
    content: &'a str,
}
