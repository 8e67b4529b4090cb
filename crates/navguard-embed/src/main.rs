//! navguard-embed: replay bridge commands against a logging host surface.
//!
//! Reads newline-delimited JSON commands from stdin and writes one JSON reply
//! per line to stdout. Config comes from `navguard.yaml` or `$NAVGUARD_CONFIG`.
//! Decision counters are printed to stderr at EOF.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{fmt, EnvFilter};

use navguard_embed::config;
use navguard_embed::dispatch::Dispatcher;
use navguard_embed::host::LoggingSurfaceFactory;
use navguard_embed::obs::NavMetrics;
use navguard_embed::session::SessionRegistry;

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::var("NAVGUARD_CONFIG").unwrap_or_else(|_| "navguard.yaml".to_string());
    let cfg = config::load_from_file(&path).expect("config load failed");
    tracing::info!(%path, defaults = cfg.defaults.whitelist.len(), denial = ?cfg.denial, "navguard-embed starting");

    let metrics = Arc::new(NavMetrics::default());
    let registry = SessionRegistry::new(&cfg, Arc::new(LoggingSurfaceFactory), Arc::clone(&metrics));
    let dispatcher = Dispatcher::new(Arc::new(registry));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await.expect("stdin read failed") {
        if line.trim().is_empty() {
            continue;
        }
        let reply = dispatcher.dispatch_json(&line).await;
        let mut out = serde_json::to_string(&reply).expect("reply encode failed");
        out.push('\n');
        stdout.write_all(out.as_bytes()).await.expect("stdout write failed");
    }
    stdout.flush().await.expect("stdout flush failed");

    eprint!("{}", metrics.render());
}
