//! JSON line-delimited operation logging.
//!
//! Each call appends one JSON object per line to the file named by the
//! `CHUNKING_COGNITION_LOG` environment variable. When the variable is
//! unset, logging is a successful no-op so library callers pay nothing.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::{Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

/// Environment variable naming the log file.
pub const LOG_PATH_ENV: &str = "CHUNKING_COGNITION_LOG";

#[derive(Serialize)]
struct Record<'a, T: Serialize> {
    timestamp_ms: u128,
    operation: &'a str,
    payload: &'a T,
}

/// Appends one `{timestamp_ms, operation, payload}` line to the log sink.
///
/// Returns `Ok(())` without writing when no sink is configured.
pub fn log_operation<T: Serialize>(operation: &str, payload: &T) -> Result<(), LoggingError> {
    let Some(sink) = sink() else {
        return Ok(());
    };

    let record = Record {
        timestamp_ms: now_ms(),
        operation,
        payload,
    };
    let line = serde_json::to_string(&record)?;

    let mut file = sink.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    writeln!(file, "{line}")?;
    Ok(())
}

fn sink() -> Option<&'static Mutex<File>> {
    static SINK: OnceLock<Option<Mutex<File>>> = OnceLock::new();
    SINK.get_or_init(|| {
        let path = std::env::var(LOG_PATH_ENV).ok()?;
        let file = OpenOptions::new().create(true).append(true).open(path).ok()?;
        Some(Mutex::new(file))
    })
    .as_ref()
}

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or(0)
}

#[derive(Debug)]
pub enum LoggingError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl std::fmt::Display for LoggingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggingError::Io(err) => write!(f, "IO error: {}", err),
            LoggingError::Serialize(err) => write!(f, "Serialize error: {}", err),
        }
    }
}

impl std::error::Error for LoggingError {}

impl From<std::io::Error> for LoggingError {
    fn from(value: std::io::Error) -> Self {
        LoggingError::Io(value)
    }
}

impl From<serde_json::Error> for LoggingError {
    fn from(value: serde_json::Error) -> Self {
        LoggingError::Serialize(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Payload {
        value: u32,
    }

    #[test]
    fn test_log_operation_never_fails_without_sink() {
        // Whether or not a sink is configured in the environment, logging a
        // serializable payload succeeds.
        assert!(log_operation("test_event", &Payload { value: 7 }).is_ok());
    }

    #[test]
    fn test_record_shape() {
        let payload = Payload { value: 7 };
        let record = Record {
            timestamp_ms: 1,
            operation: "op",
            payload: &payload,
        };
        let line = serde_json::to_string(&record).unwrap();
        assert!(line.contains("\"operation\":\"op\""));
        assert!(line.contains("\"value\":7"));
    }
}
