//! The gateway/session handle commands talk to.
//!
//! Commands never touch the client library directly; they go through the
//! [`Session`] trait so command logic can be exercised against a recording
//! double in tests. [`SerenitySession`] is the production implementation,
//! wrapping the serenity [`Context`] (REST client + cache).

use serenity::all::{Channel, ChannelId, Context, GuildId, MessageId, PartialGuild};
use serenity::async_trait;

use crate::error::Result;

/// Operations the client/session object exposes, keyed by opaque IDs.
#[async_trait]
pub trait Session: Send + Sync {
    /// Send a plain-text message to a channel.
    async fn send_message(&self, channel_id: ChannelId, text: &str) -> Result<()>;

    /// Delete a message from a channel.
    async fn delete_message(&self, channel_id: ChannelId, message_id: MessageId) -> Result<()>;

    /// Look up a channel by id.
    async fn channel(&self, channel_id: ChannelId) -> Result<Channel>;

    /// Look up a guild by id.
    async fn guild(&self, guild_id: GuildId) -> Result<PartialGuild>;
}

/// [`Session`] backed by a live serenity [`Context`].
pub struct SerenitySession {
    ctx: Context,
}

impl SerenitySession {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl Session for SerenitySession {
    async fn send_message(&self, channel_id: ChannelId, text: &str) -> Result<()> {
        channel_id.say(&self.ctx.http, text).await?;
        Ok(())
    }

    async fn delete_message(&self, channel_id: ChannelId, message_id: MessageId) -> Result<()> {
        channel_id.delete_message(&self.ctx.http, message_id).await?;
        Ok(())
    }

    async fn channel(&self, channel_id: ChannelId) -> Result<Channel> {
        Ok(channel_id.to_channel(&self.ctx).await?)
    }

    async fn guild(&self, guild_id: GuildId) -> Result<PartialGuild> {
        Ok(guild_id.to_partial_guild(&self.ctx).await?)
    }
}

// ---------------------------------------------------------------------------
// Test support
// ---------------------------------------------------------------------------
