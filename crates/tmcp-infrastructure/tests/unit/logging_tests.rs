//! Logging Tests

use tmcp_domain::Error;
use tmcp_infrastructure::logging::parse_log_level;
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").ok(), Some(Level::TRACE));
    assert_eq!(parse_log_level("DEBUG").ok(), Some(Level::DEBUG));
    assert_eq!(parse_log_level("info").ok(), Some(Level::INFO));
    assert_eq!(parse_log_level("warning").ok(), Some(Level::WARN));
    assert_eq!(parse_log_level("error").ok(), Some(Level::ERROR));
}

#[test]
fn test_parse_invalid_log_level() {
    let error = parse_log_level("verbose").expect_err("should reject");

    assert!(error.to_string().contains("Invalid log level: verbose"));
    assert!(matches!(error, Error::Config { source: None, .. }));
}
