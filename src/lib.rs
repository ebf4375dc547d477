//! Minimal Discord chat bot: one dispatch loop, one command.
//!
//! All low-level gateway, HTTP, reconnection, and rate-limit work lives in
//! serenity. This crate is the thin layer on top: credential loading, a
//! [`registry::CommandRegistry`] walked in registration order for every
//! inbound message, and the single built-in [`commands::PingCommand`].

pub mod bot;
pub mod commands;
pub mod context;
pub mod error;
pub mod registry;
pub mod session;
pub mod token;

pub use context::{InboundMessage, MessageContext};
pub use error::{Error, Result};
pub use registry::{Command, CommandRegistry};
pub use session::Session;
