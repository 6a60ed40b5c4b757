use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize tracing with a terminal layer and, when a log file is given,
/// an ANSI-free append layer for the persistent log. A log file that cannot
/// be opened downgrades to terminal-only with a warning.
pub fn init(log_file: Option<&Path>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let terminal = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let file = log_file.and_then(|path| {
        match fs::OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(file),
            Err(err) => {
                eprintln!(
                    "warning: failed to open log file {} ({err}); logging to terminal only",
                    path.display()
                );
                None
            }
        }
    });

    match file {
        Some(file) => {
            let persistent = tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(file));
            tracing_subscriber::registry()
                .with(filter)
                .with(terminal)
                .with(persistent)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(terminal)
                .init();
        }
    }
}
