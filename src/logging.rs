//! Diagnostic logging setup.
//!
//! Logs go to stderr only; stdout carries image renderings and must stay
//! byte-exact.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive that overrides config.
pub const LOG_ENV: &str = "PXG_LOG";

/// Build the filter: `PXG_LOG` if set and valid, else `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber. Returns `false` if one was already set.
pub fn init_tracing(default_level: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_filter_falls_back_to_default() {
        let previous = std::env::var_os(LOG_ENV);
        std::env::remove_var(LOG_ENV);
        let filter = env_filter("debug");
        if let Some(value) = previous {
            std::env::set_var(LOG_ENV, value);
        }
        assert_eq!(filter.to_string().to_lowercase(), "debug");
    }

    #[test]
    #[serial]
    fn test_env_filter_prefers_env() {
        let previous = std::env::var_os(LOG_ENV);
        std::env::set_var(LOG_ENV, "trace");
        let filter = env_filter("warn");
        match previous {
            Some(value) => std::env::set_var(LOG_ENV, value),
            None => std::env::remove_var(LOG_ENV),
        }
        assert_eq!(filter.to_string().to_lowercase(), "trace");
    }
}
