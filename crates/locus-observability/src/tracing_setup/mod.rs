//! Tracing initialization. Every entry point is idempotent: the first call
//! installs the global subscriber and later calls do nothing.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use locus_core::config::ObservabilityConfig;

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "LOCUS_LOG";

static INIT: Once = Once::new();

/// Initialize tracing from `LOCUS_LOG`.
///
/// Format: `LOCUS_LOG=locus_cache=debug,locus_suggest=info`.
/// Falls back to `info` if `LOCUS_LOG` is unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter, false);
}

/// Initialize tracing with an explicit filter string (for tests or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

/// Initialize tracing from config. `LOCUS_LOG` still wins when set.
pub fn init_from_config(config: &ObservabilityConfig) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        // A subscriber installed by the host application takes precedence.
        let _ = if json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_thread_ids(true))
                .try_init()
        };
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_initialization_is_harmless() {
        init_tracing_with_filter("debug");
        init_tracing();
        init_from_config(&ObservabilityConfig::default());
        tracing::info!("still logging");
    }

    #[test]
    fn span_macros_expand() {
        let span = crate::suggestion_span!("mil", 3u64);
        let _guard = span.enter();
        let _ = crate::selection_span!("ChIJ-centrale", "remote");
        let _ = crate::cache_span!("predictions", "sweep");
    }
}
