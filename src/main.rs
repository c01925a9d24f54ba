use std::sync::Arc;

use coyote::config::Config;
use coyote::server::{self, DefaultHandler};
use coyote::session::SessionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = Config::load()?;

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(cfg.tracing_level())
        .init();

    let sessions = SessionStore::new();
    let handler = Arc::new(DefaultHandler::new(cfg.session_cookie.clone()));

    tokio::select! {
        res = server::listener::run(&cfg, sessions, handler) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
