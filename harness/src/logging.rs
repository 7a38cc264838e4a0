//! Tracing subscriber setup for binaries that drive the harness.
//!
//! Logs always go to stderr so stdout stays reserved for deterministic
//! output. The filter comes from `WAYFIND_LOG` (or `RUST_LOG`), falling back
//! to `default_level`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "WAYFIND_LOG";

/// Install the global subscriber.
///
/// `default_level` is a bare level (`"warn"`) applied to the wayfind
/// crates, or a full directive (`"wayfind_search=trace"`).
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(default_level: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directive(default_level)));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
            .try_init()?;
    }

    Ok(())
}

fn default_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("wayfind_search={level},wayfind_harness={level}")
    }
}
