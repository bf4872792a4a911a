//! Diagnostics setup.
//!
//! Log events always go to standard error: standard output carries the
//! program's visible text and must stay byte-exact for whoever launched us.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directives (default: `warn`)
//! - `LAUNCHER_PAYLOAD_LOG_FORMAT`: `json` for JSON lines, anything else for
//!   compact text

use std::{env, io};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FORMAT_VAR: &str = "LAUNCHER_PAYLOAD_LOG_FORMAT";
const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }

    pub fn from_env() -> Self {
        Self::parse(env::var(LOG_FORMAT_VAR).ok().as_deref())
    }
}

/// Installs the global subscriber. A second call, or any failure to install,
/// is silently ignored: missing logs never stop the program.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let format = LogFormat::from_env();
    let result = match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init(),
        LogFormat::Compact => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .compact()
                    .with_ansi(false)
                    .with_writer(io::stderr),
            )
            .try_init(),
    };

    if result.is_ok() {
        tracing::debug!(format = ?format, "logging initialized");
    }
}
