//! Logging setup.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use rfgate_common::RfgateError;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Map a level name to a filter.
///
/// Accepts the classic names (`WARNING`, `CRITICAL`) alongside tracing's
/// own; matching is case-insensitive.
pub fn parse_level(s: &str) -> Result<LevelFilter, String> {
    match s.trim().to_ascii_uppercase().as_str() {
        "TRACE" => Ok(LevelFilter::TRACE),
        "DEBUG" => Ok(LevelFilter::DEBUG),
        "INFO" => Ok(LevelFilter::INFO),
        "WARN" | "WARNING" => Ok(LevelFilter::WARN),
        "ERROR" | "CRITICAL" => Ok(LevelFilter::ERROR),
        "OFF" => Ok(LevelFilter::OFF),
        other => Err(format!(
            "unknown log level '{other}' (expected DEBUG, INFO, WARNING, ERROR or CRITICAL)"
        )),
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` directives are applied on top of `level`. With a log file the
/// file is truncated and written without ANSI colors.
pub fn init(level: LevelFilter, logfile: Option<&Path>) -> Result<(), RfgateError> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let installed = match logfile {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    installed.map_err(|e| RfgateError::Other(format!("failed to install logger: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_classic_names() {
        assert_eq!(parse_level("DEBUG"), Ok(LevelFilter::DEBUG));
        assert_eq!(parse_level("INFO"), Ok(LevelFilter::INFO));
        assert_eq!(parse_level("WARNING"), Ok(LevelFilter::WARN));
        assert_eq!(parse_level("ERROR"), Ok(LevelFilter::ERROR));
        assert_eq!(parse_level("CRITICAL"), Ok(LevelFilter::ERROR));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(parse_level("warning"), Ok(LevelFilter::WARN));
        assert_eq!(parse_level(" Info "), Ok(LevelFilter::INFO));
        assert_eq!(parse_level("warn"), Ok(LevelFilter::WARN));
    }

    #[test]
    fn init_truncates_log_file_and_writes_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rfgate.log");
        std::fs::write(&path, "stale line from a previous run\n").unwrap();

        init(LevelFilter::INFO, Some(&path)).unwrap();
        tracing::info!("door - PIN 5 - Status 1");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale line"));
        let line = content
            .lines()
            .find(|l| l.contains("door - PIN 5 - Status 1"))
            .unwrap();
        assert!(!line.contains("\x1b["));
        assert!(line.starts_with(|c: char| c.is_ascii_digit()));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = parse_level("verbose").unwrap_err();
        assert!(err.contains("VERBOSE"));
    }
}
