//! `RUST_LOG` handling
//!
//! Only the first directive matters. `aqi_dashboard=debug,reqwest=info`
//! and `debug` both select `Debug`; anything unparsable means `Info`.

use crate::error_classifier::LogLevel;
use std::env;

const RUST_LOG: &str = "RUST_LOG";

/// Threshold from the environment, `Info` when unset.
pub fn get_rust_log_level() -> LogLevel {
    env::var(RUST_LOG)
        .map(|value| parse_rust_log_level(&value))
        .unwrap_or(LogLevel::Info)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    let directive = rust_log.split(',').next().unwrap_or_default();
    let level = match directive.rsplit_once('=') {
        Some((_target, level)) => level,
        None => directive,
    };

    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info,
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

/// Whether an event at `event_level` passes the `RUST_LOG` threshold.
pub fn should_log_with_env(event_level: LogLevel) -> bool {
    should_log(event_level, get_rust_log_level())
}

/// Applies the `RUST_LOG` threshold to the `log` facade.
pub fn init_max_level() {
    log::set_max_level(get_rust_log_level().into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_levels() {
        assert_eq!(parse_rust_log_level("trace"), LogLevel::Trace);
        assert_eq!(parse_rust_log_level("DEBUG"), LogLevel::Debug);
        assert_eq!(parse_rust_log_level("warning"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("error"), LogLevel::Error);
    }

    #[test]
    fn first_directive_wins() {
        assert_eq!(parse_rust_log_level("aqi_dashboard=debug"), LogLevel::Debug);
        assert_eq!(
            parse_rust_log_level("aqi_dashboard=error,reqwest=trace"),
            LogLevel::Error
        );
    }

    #[test]
    fn garbage_means_info() {
        assert_eq!(parse_rust_log_level(""), LogLevel::Info);
        assert_eq!(parse_rust_log_level("loud"), LogLevel::Info);
    }

    #[test]
    fn threshold_comparison() {
        assert!(should_log(LogLevel::Error, LogLevel::Debug));
        assert!(should_log(LogLevel::Warn, LogLevel::Warn));
        assert!(!should_log(LogLevel::Debug, LogLevel::Info));
    }
}
