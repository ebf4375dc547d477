//! Command trait and the ordered dispatch registry.

use serenity::async_trait;
use tracing::debug;

use crate::context::{InboundMessage, MessageContext};
use crate::error::Result;
use crate::session::Session;

/// A unit of behaviour triggered by an inbound message.
///
/// Every registered command sees every message; it decides for itself
/// whether the message is relevant.
#[async_trait]
pub trait Command: Send + Sync {
    /// Act on one message context.
    async fn act(&self, ctx: &MessageContext<'_>) -> Result<()>;
}

/// Append-only, ordered list of commands.
///
/// Populated once at startup and never mutated afterwards; dispatch walks
/// the list in registration order.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command. Dispatch order is registration order.
    pub fn register<C: Command + 'static>(&mut self, command: C) {
        self.commands.push(Box::new(command));
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Run every registered command against one inbound message.
    ///
    /// One [`MessageContext`] is built and shared by all commands. There is
    /// no error isolation: the first command that fails aborts dispatch for
    /// the commands registered after it.
    pub async fn dispatch(&self, message: InboundMessage, session: &dyn Session) -> Result<()> {
        debug!(
            message_id = %message.id,
            commands = self.commands.len(),
            "dispatching message"
        );

        let ctx = MessageContext::new(message, session);
        for command in &self.commands {
            command.act(&ctx).await?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serenity::all::{ChannelId, MessageId};

    use super::*;
    use crate::session::testing::RecordingSession;

    fn message(content: &str) -> InboundMessage {
        InboundMessage {
            id: MessageId::new(100),
            channel_id: ChannelId::new(200),
            guild_id: None,
            content: content.to_string(),
        }
    }

    /// Command that appends its tag to a shared log.
    struct Recorder {
        tag: usize,
        log: Arc<Mutex<Vec<usize>>>,
    }

    #[async_trait]
    impl Command for Recorder {
        async fn act(&self, _ctx: &MessageContext<'_>) -> Result<()> {
            self.log.lock().unwrap().push(self.tag);
            Ok(())
        }
    }

    /// Command that always fails.
    struct Failing;

    #[async_trait]
    impl Command for Failing {
        async fn act(&self, _ctx: &MessageContext<'_>) -> Result<()> {
            Err(serenity::Error::Other("boom").into())
        }
    }

    // -- registration ------------------------------------------------------

    #[test]
    fn new_registry_is_empty() {
        let registry = CommandRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn register_appends() {
        let mut registry = CommandRegistry::new();
        registry.register(Failing);
        registry.register(Failing);
        assert_eq!(registry.len(), 2);
    }

    // -- dispatch ----------------------------------------------------------

    #[tokio::test]
    async fn dispatch_invokes_all_commands_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = CommandRegistry::new();
        for tag in 0..5 {
            registry.register(Recorder {
                tag,
                log: Arc::clone(&log),
            });
        }

        let session = RecordingSession::default();
        registry.dispatch(message("hello"), &session).await.unwrap();

        assert_eq!(*log.lock().unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn dispatch_invokes_each_command_once_per_message() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = CommandRegistry::new();
        for tag in 0..2 {
            registry.register(Recorder {
                tag,
                log: Arc::clone(&log),
            });
        }

        let session = RecordingSession::default();
        registry.dispatch(message("one"), &session).await.unwrap();
        registry.dispatch(message("two"), &session).await.unwrap();

        assert_eq!(*log.lock().unwrap(), vec![0, 1, 0, 1]);
    }

    #[tokio::test]
    async fn failing_command_aborts_remaining_dispatch() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = CommandRegistry::new();
        registry.register(Recorder {
            tag: 0,
            log: Arc::clone(&log),
        });
        registry.register(Failing);
        registry.register(Recorder {
            tag: 2,
            log: Arc::clone(&log),
        });

        let session = RecordingSession::default();
        let result = registry.dispatch(message("hello"), &session).await;

        assert!(result.is_err());
        // The command registered after the failure never ran.
        assert_eq!(*log.lock().unwrap(), vec![0]);
    }

    #[tokio::test]
    async fn empty_registry_dispatch_is_a_no_op() {
        let registry = CommandRegistry::new();
        let session = RecordingSession::default();

        registry.dispatch(message("hello"), &session).await.unwrap();
        assert!(session.sent.lock().unwrap().is_empty());
    }
}
