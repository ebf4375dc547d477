//! Built-in commands.

use serenity::async_trait;

use crate::context::MessageContext;
use crate::error::Result;
use crate::registry::Command;

/// Replies `Pong!` to any message whose content starts with `!ping`.
///
/// Prefix semantics on purpose: `!ping are you there` still gets a pong.
/// No argument parsing, no cooldown.
pub struct PingCommand;

#[async_trait]
impl Command for PingCommand {
    async fn act(&self, ctx: &MessageContext<'_>) -> Result<()> {
        if ctx.content().starts_with("!ping") {
            ctx.reply("Pong!").await?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
