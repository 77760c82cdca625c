use crate::api::error::ApiError;
use log::LevelFilter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_api_error(&self, error: &ApiError) -> LogLevel {
        if let ApiError::Decode(_) = error {
            // The API no longer speaks our schema
            return LogLevel::Error;
        }
        match error.status() {
            // Unknown city or no data yet for it
            Some(404) => LogLevel::Warn,
            // Temporary server issues
            Some(500..=599) => LogLevel::Warn,
            // Access refused
            Some(401 | 403) => LogLevel::Error,
            // Network issues, usually temporary
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> ApiError {
        ApiError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn server_errors_are_warnings() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_api_error(&http(500)), LogLevel::Warn);
        assert_eq!(classifier.classify_api_error(&http(503)), LogLevel::Warn);
        assert_eq!(classifier.classify_api_error(&http(404)), LogLevel::Warn);
    }

    #[test]
    fn auth_and_schema_errors_are_errors() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_api_error(&http(401)), LogLevel::Error);
        assert_eq!(classifier.classify_api_error(&http(403)), LogLevel::Error);

        let decode = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        assert_eq!(
            classifier.classify_api_error(&ApiError::Decode(decode)),
            LogLevel::Error
        );
    }

    #[test]
    fn level_maps_onto_log_filter() {
        assert_eq!(LevelFilter::from(LogLevel::Warn), LevelFilter::Warn);
        assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::Trace);
    }
}
