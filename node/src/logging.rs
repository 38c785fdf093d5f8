//! # Log Output
//!
//! Sets up the `tracing` subscriber for the validator CLI. Verdicts and
//! signed transactions go to stdout so they can be piped or diffed; every
//! log line goes to stderr. Rejections are logged by the protocol crate
//! (info for authorization, warn for payload), so the default filter keeps
//! both crates at `info`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Shape of the stderr log stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Colored lines with file and line number, for an operator at a terminal.
    Pretty,
    /// One JSON object per event, for feeding rejections into a collector.
    Json,
}

impl LogFormat {
    /// Maps the `--json-logs` flag.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Installs the global subscriber. Must run once, before the first event;
/// a second call panics.
///
/// `default_filter` applies only when `RUST_LOG` is unset. To see each
/// verified signature entry as well as the verdicts:
///
/// ```text
/// RUST_LOG=warden_node=info,warden_protocol=trace warden-node validate txs.json
/// ```
pub fn init_logging(default_filter: &str, format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    match format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_thread_ids(false)
                        .with_file(true)
                        .with_line_number(true),
                )
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .json()
                        .flatten_event(true)
                        .with_writer(std::io::stderr)
                        .with_target(true),
                )
                .init();
        }
    }

    tracing::debug!(?format, "logging initialized");
}
