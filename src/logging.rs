//! Tracing subscriber setup.

use std::sync::Once;

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable selecting the log level when `--debug` is absent.
pub const LOG_LEVEL_ENV_VAR: &str = "GOWEIGHT_LOG_LEVEL";

/// Installs the global stderr subscriber. Later calls are no-ops.
///
/// `RUST_LOG`, when set, takes precedence over both `debug` and
/// `GOWEIGHT_LOG_LEVEL`.
pub fn init(debug: bool) {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let level = if debug {
            Level::DEBUG
        } else {
            std::env::var(LOG_LEVEL_ENV_VAR).map_or(Level::WARN, |raw| parse_level(&raw))
        };

        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(format!("goweight={level}"))
        };

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init();
    });
}

fn parse_level(raw: &str) -> Level {
    match raw.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{raw}', defaulting to WARN. Valid levels: trace, debug, info, warn, error"
            );
            Level::WARN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels_case_insensitively() {
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level(" info "), Level::INFO);
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("error"), Level::ERROR);
    }

    #[test]
    fn unknown_level_falls_back_to_warn() {
        assert_eq!(parse_level("loud"), Level::WARN);
    }

    #[test]
    fn init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
