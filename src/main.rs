mod app;
mod config;
mod console;
mod content;
mod prefs;
mod profile;
mod reveal;
mod surface;
mod theme;

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use console::UserAction;
use surface::Surface;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = config::AppConfig::from_env();
    tracing::info!(
        source = %config.data_source,
        prefs = %config.prefs_path.display(),
        interval = ?config.timing.interval,
        output = ?config.output,
        "profile-reveal starting"
    );

    let (tx, rx) = mpsc::unbounded_channel();
    let renderer = console::spawn_renderer(rx, config.output);
    let surface: Arc<dyn Surface> = Arc::new(tx);

    let mut app = app::App::boot(&config, surface).await;
    tracing::info!(
        theme = %app.theme(),
        nicknames = app.document().nicknames.len(),
        categories = app.document().favorites.as_ref().map_or(0, serde_json::Map::len),
        "profile ready"
    );

    // User actions arrive one per line; end of input waits out any reveal.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => match UserAction::parse(&line) {
                Some(UserAction::Reveal) => {
                    if !app.reveal() {
                        let status = app.reveal_status();
                        tracing::info!(position = status.position, total = status.total, "reveal still running");
                    }
                }
                Some(UserAction::ToggleTheme) => {
                    app.toggle_theme();
                }
                Some(UserAction::Quit) => break,
                None if line.trim().is_empty() => {}
                None => tracing::warn!(input = %line.trim(), "unknown action"),
            },
            Ok(None) => {
                app.reveal_finished().await;
                break;
            }
            Err(e) => {
                tracing::error!(error = %e, "stdin read failed");
                break;
            }
        }
    }

    drop(app);
    let _ = renderer.await;
    tracing::info!("profile-reveal stopped");
}
