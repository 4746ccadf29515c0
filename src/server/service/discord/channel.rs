//! Delivery of rendered commands to the configured Discord channel.

use async_trait::async_trait;
use serenity::{
    all::{Channel, ChannelId, ChannelType, CreateMessage, GuildId},
    http::Http,
};
use std::sync::Arc;

use crate::server::error::{internal::InternalError, AppError};

/// Destination for rendered chat commands.
#[async_trait]
pub trait ChannelSender: Send + Sync {
    /// Posts `content` as a single message.
    async fn send(&self, content: &str) -> Result<(), AppError>;
}

/// Posts messages to one text channel of one guild through the bot's HTTP client.
pub struct DiscordChannelSender {
    http: Arc<Http>,
    guild_id: GuildId,
    channel_id: ChannelId,
}

impl DiscordChannelSender {
    /// # Arguments
    /// - `http` - Discord HTTP client shared with the bot
    /// - `guild_id` - Guild the channel must belong to
    /// - `channel_id` - Target text channel
    pub fn new(http: Arc<Http>, guild_id: u64, channel_id: u64) -> Self {
        Self {
            http,
            guild_id: GuildId::new(guild_id),
            channel_id: ChannelId::new(channel_id),
        }
    }

    fn channel_not_found(&self) -> AppError {
        InternalError::ChannelNotFound {
            guild_id: self.guild_id.get(),
            channel_id: self.channel_id.get(),
        }
        .into()
    }
}

#[async_trait]
impl ChannelSender for DiscordChannelSender {
    /// Fetches the channel on every send and verifies it is a text channel in the
    /// configured guild before posting.
    ///
    /// # Returns
    /// - `Ok(())` - Message posted
    /// - `Err(AppError::InternalErr(ChannelNotFound))` - Channel missing or of the wrong kind
    /// - `Err(AppError::DiscordErr)` - Discord rejected the message
    async fn send(&self, content: &str) -> Result<(), AppError> {
        let channel = match self.channel_id.to_channel(&self.http).await {
            Ok(channel) => channel,
            Err(e) => {
                tracing::error!("Failed to fetch channel {}: {:?}", self.channel_id, e);
                return Err(self.channel_not_found());
            }
        };

        let Channel::Guild(channel) = channel else {
            return Err(self.channel_not_found());
        };

        if channel.kind != ChannelType::Text || channel.guild_id != self.guild_id {
            return Err(self.channel_not_found());
        }

        channel
            .send_message(&self.http, CreateMessage::new().content(content))
            .await?;

        Ok(())
    }
}

/// Sender that records messages instead of posting them.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingChannelSender {
    pub sent: tokio::sync::Mutex<Vec<String>>,
    pub fail: bool,
}

#[cfg(test)]
impl RecordingChannelSender {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub async fn messages(&self) -> Vec<String> {
        self.sent.lock().await.clone()
    }
}

#[cfg(test)]
#[async_trait]
impl ChannelSender for RecordingChannelSender {
    async fn send(&self, content: &str) -> Result<(), AppError> {
        if self.fail {
            return Err(InternalError::ChannelNotFound {
                guild_id: 0,
                channel_id: 0,
            }
            .into());
        }

        self.sent.lock().await.push(content.to_string());
        Ok(())
    }
}
