//! Binary entry point: logging setup, then hand off to [`pongbot::bot::start`].

use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = pongbot::bot::start().await {
        error!(error = %e, "bot exited with error");
        std::process::exit(1);
    }
}
