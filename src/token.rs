//! Bot credential loading.
//!
//! The token comes from a plain-text `.bot-token` file in the working
//! directory, read exactly once at startup. A `DISCORD_TOKEN` environment
//! variable (or `.env` entry, honoured via dotenv) takes precedence when
//! set. Failure here is fatal: the bot never connects without a token.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Name of the token file expected in the working directory.
pub const TOKEN_FILE: &str = ".bot-token";

/// Environment variable that overrides [`TOKEN_FILE`].
pub const TOKEN_ENV: &str = "DISCORD_TOKEN";

/// Load the bot token from the environment or the token file.
pub fn load() -> Result<String> {
    dotenv::dotenv().ok();

    if let Ok(token) = std::env::var(TOKEN_ENV) {
        let token = token.trim().to_string();
        if !token.is_empty() {
            debug!(source = TOKEN_ENV, "loaded bot token from environment");
            return Ok(token);
        }
    }

    load_from(Path::new(TOKEN_FILE))
}

/// Read and trim a token file, rejecting empty content.
fn load_from(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path).map_err(|source| Error::TokenUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let token = raw.trim();
    if token.is_empty() {
        return Err(Error::TokenEmpty {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "loaded bot token from file");
    Ok(token.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
