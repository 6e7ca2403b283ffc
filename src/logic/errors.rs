//! Failure classification for log lines
//!
//! The data facade never surfaces error kinds to the UI (a failed call is
//! simply "no data"), but the debug log records what went wrong.

use anyhow::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    NetworkError, // DNS, routing, etc.
    Decode,       // Body was not the JSON we expected
    Other,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::ConnectionRefused => "connection-refused",
            ErrorType::Timeout => "timeout",
            ErrorType::NotFound => "not-found",
            ErrorType::ServerError => "server-error",
            ErrorType::NetworkError => "network",
            ErrorType::Decode => "decode",
            ErrorType::Other => "other",
        }
    }
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            if let Some(status) = reqwest_err.status() {
                return match status.as_u16() {
                    404 => ErrorType::NotFound,
                    500..=599 => ErrorType::ServerError,
                    _ => ErrorType::Other,
                };
            }
            if reqwest_err.is_timeout() {
                return ErrorType::Timeout;
            }
            if reqwest_err.is_decode() {
                return ErrorType::Decode;
            }
        }
        if cause.downcast_ref::<serde_json::Error>().is_some() {
            return ErrorType::Decode;
        }
    }

    let error_msg = format!("{:#}", error).to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }
    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Root cause of an error chain, as a single line
pub fn format_error_message(error: &Error) -> String {
    error
        .chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| error.to_string())
}

/// One log line describing a failed call
pub fn describe_failure(operation: &str, error: &Error) -> String {
    format!(
        "{} failed [{}]: {}",
        operation,
        classify_error(error).as_str(),
        format_error_message(error)
    )
}
