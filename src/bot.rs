//! Client wiring and the event dispatcher.
//!
//! The gateway protocol itself (websocket, heartbeats, resume, REST rate
//! limits) is serenity's job. This module only wires the pieces together:
//! load the credential, build the registry, and hand inbound message events
//! to [`CommandRegistry::dispatch`].

use serenity::all::{Client, Context, EventHandler, GatewayIntents, Message, Ready};
use serenity::async_trait;
use tracing::{error, info};

use crate::commands::PingCommand;
use crate::error::Result;
use crate::registry::CommandRegistry;
use crate::session::SerenitySession;
use crate::token;

/// Bridges gateway events into [`CommandRegistry::dispatch`].
pub struct CommandDispatcher {
    registry: CommandRegistry,
}

impl CommandDispatcher {
    pub fn new(registry: CommandRegistry) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl EventHandler for CommandDispatcher {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, guilds = ready.guilds.len(), "bot is ready");
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let message_id = msg.id;
        let session = SerenitySession::new(ctx);

        // A failing command aborts dispatch for the commands after it; the
        // event callback is the end of the line, so log and move on.
        if let Err(e) = self.registry.dispatch((&msg).into(), &session).await {
            error!(message_id = %message_id, error = %e, "command dispatch failed");
        }
    }
}

/// The registry the bot ships with: just the ping command.
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(PingCommand);
    registry
}

/// Gateway intents: guild and DM messages, with message content.
fn gateway_intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
}

/// Load the credential, build the client, and run until the gateway
/// connection ends.
pub async fn start() -> Result<()> {
    let token = token::load()?;
    let dispatcher = CommandDispatcher::new(default_registry());

    let mut client = Client::builder(&token, gateway_intents())
        .event_handler(dispatcher)
        .await?;

    info!("connecting to the gateway");
    client.start().await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
