//! Crate-wide error type.
//!
//! Only one failure mode is ours: the credential file at startup. Everything
//! else (network, auth, malformed events) surfaces as a [`serenity::Error`]
//! and is wrapped transparently.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The bot token file could not be read at startup.
    #[error(
        "failed to load the bot token: make sure a readable file named `{}` exists in the working directory",
        path.display()
    )]
    TokenUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The token file exists but contains nothing but whitespace.
    #[error("bot token file `{}` is empty", path.display())]
    TokenEmpty { path: PathBuf },

    /// Any error surfaced by the Discord client library.
    #[error(transparent)]
    Discord(#[from] serenity::Error),
}
