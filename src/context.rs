//! Per-message dispatch context.
//!
//! [`MessageContext`] is built once per inbound message and handed to every
//! registered command. It bundles the message with the session handle and
//! offers the convenience calls commands actually use.

use serenity::all::{Channel, ChannelId, GuildId, Message, MessageId, PartialGuild};

use crate::error::Result;
use crate::session::Session;

/// The slice of an inbound gateway message the dispatch path carries.
///
/// The full library message type drags along author, attachments, embeds and
/// more; commands only need the routing ids and the text.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub id: MessageId,
    pub channel_id: ChannelId,
    pub guild_id: Option<GuildId>,
    pub content: String,
}

impl From<&Message> for InboundMessage {
    fn from(msg: &Message) -> Self {
        Self {
            id: msg.id,
            channel_id: msg.channel_id,
            guild_id: msg.guild_id,
            content: msg.content.clone(),
        }
    }
}

/// Short-lived bundle of one inbound message and the session handle.
///
/// Lifetime is one dispatch call.
pub struct MessageContext<'a> {
    message: InboundMessage,
    session: &'a dyn Session,
}

impl<'a> MessageContext<'a> {
    pub fn new(message: InboundMessage, session: &'a dyn Session) -> Self {
        Self { message, session }
    }

    /// Text content of the message.
    pub fn content(&self) -> &str {
        &self.message.content
    }

    /// Channel the message was sent in.
    pub fn channel_id(&self) -> ChannelId {
        self.message.channel_id
    }

    /// Guild the message was sent in, if any.
    pub fn guild_id(&self) -> Option<GuildId> {
        self.message.guild_id
    }

    /// Id of the message itself.
    pub fn message_id(&self) -> MessageId {
        self.message.id
    }

    /// Fetch the full channel object for the originating channel.
    pub async fn channel(&self) -> Result<Channel> {
        self.session.channel(self.message.channel_id).await
    }

    /// Fetch the guild the message was sent in. `None` for direct messages.
    pub async fn guild(&self) -> Result<Option<PartialGuild>> {
        match self.message.guild_id {
            Some(id) => Ok(Some(self.session.guild(id).await?)),
            None => Ok(None),
        }
    }

    /// Send `text` to the originating channel.
    pub async fn reply(&self, text: &str) -> Result<()> {
        self.session
            .send_message(self.message.channel_id, text)
            .await
    }

    /// Delete the wrapped message.
    pub async fn delete(&self) -> Result<()> {
        self.session
            .delete_message(self.message.channel_id, self.message.id)
            .await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
