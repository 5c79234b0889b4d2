//! Integration tests for logger system
//!
//! These tests verify:
//! - Threshold gating
//! - Console stream selection and file fan-out
//! - Per-level sink configuration
//! - File sink failure handling
//! - Record layout read back from disk
//! - JSON configuration loading

use leveled_logger::appenders::console::{ConsoleAppender, SharedBuffer};
use leveled_logger::core::config::LoggerConfig;
use leveled_logger::core::log_level::LogLevel;
use leveled_logger::core::logger::Logger;
use leveled_logger::core::sink_set::SinkSet;
use leveled_logger::core::timestamp::is_timestamp;
use leveled_logger::{critical, debug, error, info};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

struct Capture {
    out: SharedBuffer,
    err: SharedBuffer,
}

impl Capture {
    fn new() -> Self {
        Self {
            out: SharedBuffer::new(),
            err: SharedBuffer::new(),
        }
    }

    fn console(&self) -> ConsoleAppender {
        ConsoleAppender::new().with_writers(self.out.clone(), self.err.clone())
    }
}

fn logger_in(dir: &Path, threshold: LogLevel, capture: &Capture) -> Logger {
    Logger::builder()
        .threshold(threshold)
        .output_path_prefix(dir)
        .console(capture.console())
        .build()
        .expect("valid configuration")
}

fn read_lines(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(content) => content.lines().map(String::from).collect(),
        Err(_) => Vec::new(),
    }
}

#[test]
fn test_below_threshold_produces_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let capture = Capture::new();
    let logger = logger_in(temp_dir.path(), LogLevel::Info, &capture);

    debug!(logger, "x");

    assert!(capture.out.is_empty());
    assert!(capture.err.is_empty());
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_info_reaches_stdout_and_info_log() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let capture = Capture::new();
    let logger = logger_in(temp_dir.path(), LogLevel::Info, &capture);

    logger.log(
        LogLevel::Info,
        "f.c",
        10,
        format_args!("My name is {}", "Hello world"),
    );

    let out_lines = capture.out.lines();
    assert_eq!(out_lines.len(), 1);
    assert!(out_lines[0].ends_with("f.c.10 My name is Hello world"));
    assert!(capture.err.is_empty());

    let file_lines = read_lines(&temp_dir.path().join("info.log"));
    assert_eq!(file_lines, out_lines);
}

#[test]
fn test_console_only_level_skips_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let capture = Capture::new();
    let mut logger = logger_in(temp_dir.path(), LogLevel::Info, &capture);
    logger.set_sinks(LogLevel::Error, SinkSet::CONSOLE);

    let error_log = temp_dir.path().join("error.log");
    fs::write(&error_log, "existing\n").unwrap();

    error!(logger, "boom");

    let err_lines = capture.err.lines();
    assert_eq!(err_lines.len(), 1);
    assert!(err_lines[0].ends_with(" boom"));
    assert!(err_lines[0].contains("[Error]"));
    assert!(capture.out.is_empty());
    assert_eq!(read_lines(&error_log), vec!["existing"]);
}

#[test]
fn test_unwritable_file_reports_path_and_keeps_console() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let capture = Capture::new();
    let mut logger = logger_in(temp_dir.path(), LogLevel::Info, &capture);
    logger
        .set_file_path(LogLevel::Info, "no/such/dir/info.log")
        .unwrap();

    info!(logger, "still on console");

    let out_lines = capture.out.lines();
    assert_eq!(out_lines.len(), 1);
    assert!(out_lines[0].ends_with(" still on console"));

    let err_lines = capture.err.lines();
    assert_eq!(err_lines.len(), 1);
    assert!(err_lines[0].starts_with("[LOGGER ERROR]"));
    assert!(err_lines[0].contains("no/such/dir/info.log"));
    assert_eq!(logger.metrics().sink_failures(), 1);
}

#[test]
fn test_critical_threshold() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let capture = Capture::new();
    let mut logger = logger_in(temp_dir.path(), LogLevel::Info, &capture);
    logger.set_threshold(LogLevel::Critical);

    error!(logger, "dropped");
    assert!(capture.out.is_empty());
    assert!(capture.err.is_empty());
    assert!(!temp_dir.path().join("error.log").exists());

    critical!(logger, "kept");
    let err_lines = capture.err.lines();
    assert_eq!(err_lines.len(), 1);
    assert!(err_lines[0].ends_with(" kept"));
    assert_eq!(read_lines(&temp_dir.path().join("critical.log")), err_lines);
}

#[test]
fn test_file_record_layout() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let capture = Capture::new();
    let mut logger = logger_in(temp_dir.path(), LogLevel::Debug, &capture);
    logger.set_sinks(LogLevel::Warning, SinkSet::FILE);

    logger.log(LogLevel::Warning, "src/net.rs", 77, format_args!("retry {}", 3));

    let content = fs::read_to_string(temp_dir.path().join("warning.log")).unwrap();
    assert!(content.ends_with('\n'));
    let record = content.strip_suffix('\n').unwrap();
    assert!(!record.contains('\n'));

    let (timestamp, rest) = record.split_at(19);
    assert!(is_timestamp(timestamp), "bad timestamp in {:?}", record);
    assert_eq!(rest, " [Warning] src/net.rs.77 retry 3");
    assert!(capture.out.is_empty());
    assert!(capture.err.is_empty());
}

#[test]
fn test_records_append_in_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let capture = Capture::new();
    let mut logger = logger_in(temp_dir.path(), LogLevel::Debug, &capture);
    logger.set_sinks(LogLevel::Debug, SinkSet::FILE);

    for i in 0..20 {
        debug!(logger, "message {}", i);
    }

    let lines = read_lines(&temp_dir.path().join("debug.log"));
    assert_eq!(lines.len(), 20);
    for (i, line) in lines.iter().enumerate() {
        assert!(line.ends_with(&format!("message {}", i)));
    }
}

#[test]
fn test_levels_share_a_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let capture = Capture::new();
    let mut logger = logger_in(temp_dir.path(), LogLevel::Debug, &capture);
    for level in LogLevel::ALL {
        logger.set_sinks(level, SinkSet::FILE);
        logger.set_file_path(level, "all.log").unwrap();
    }

    debug!(logger, "one");
    error!(logger, "two");

    let lines = read_lines(&temp_dir.path().join("all.log"));
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("[Debug]"));
    assert!(lines[1].contains("[Error]"));
}

#[test]
fn test_logger_from_json_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("logger.json");
    let json = format!(
        r#"{{
            "threshold": "warning",
            "output_path_prefix": {},
            "levels": {{
                "warning": {{ "sinks": ["file"], "file_path": "warn.log", "max_file_bytes": 2048 }}
            }}
        }}"#,
        serde_json::to_string(temp_dir.path()).unwrap()
    );
    fs::write(&config_path, json).unwrap();

    let capture = Capture::new();
    let logger = Logger::builder()
        .config(LoggerConfig::from_json_file(&config_path).unwrap())
        .console(capture.console())
        .build()
        .unwrap();

    assert_eq!(logger.threshold(), LogLevel::Warning);
    assert_eq!(logger.level_config(LogLevel::Warning).max_file_bytes(), 2048);
    assert_eq!(logger.level_config(LogLevel::Error).sinks(), SinkSet::ALL);

    info!(logger, "gated");
    logger.warning("to file");

    assert!(capture.out.is_empty());
    assert!(capture.err.is_empty());
    let lines = read_lines(&temp_dir.path().join("warn.log"));
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(" to file"));
}

#[test]
fn test_max_file_bytes_is_not_enforced() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let capture = Capture::new();
    let mut logger = logger_in(temp_dir.path(), LogLevel::Info, &capture);
    logger.set_sinks(LogLevel::Info, SinkSet::FILE);
    logger.set_max_file_bytes(LogLevel::Info, 10);

    for i in 0..5 {
        info!(logger, "record number {}", i);
    }

    let path = temp_dir.path().join("info.log");
    assert!(fs::metadata(&path).unwrap().len() > 10);
    assert_eq!(read_lines(&path).len(), 5);
}
