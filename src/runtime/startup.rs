use std::sync::mpsc::Sender;

use crate::app::App;
use crate::config::Settings;
use crate::ledger::{self, ResolveOutcome};

/// Set up file logging when `VIVACE_LOG` is set.
///
/// Inside the TUI session logs go to the file, never to the terminal;
/// without the variable nothing is emitted.
pub fn init_logging() {
    let Some(path) = std::env::var_os("VIVACE_LOG") else {
        return;
    };

    match std::fs::File::create(&path) {
        Ok(file) => {
            let filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
        Err(e) => eprintln!("vivace: failed to open log file: {e}"),
    }
}

/// Kick off the background resolution for the app's transaction ids.
pub fn spawn_resolution(app: &App, settings: &Settings, tx: Sender<ResolveOutcome>) {
    if app.txids.is_empty() {
        return;
    }

    ledger::spawn_resolve(
        settings.gateway.base.clone(),
        settings.gateway.identity_endpoint.clone(),
        app.txids.clone(),
        settings.resolver.content_types.clone(),
        app.generation,
        tx,
    );
}
