//! Timestamp source and formatting
//!
//! Records carry local wall-clock time rendered as `YYYY.MM.DD HH:MM:SS`.
//! The time source sits behind [`Clock`] so tests can pin it.

use chrono::{DateTime, Local};
use std::fmt;

/// strftime pattern for the leading timestamp of every record.
pub const TIMESTAMP_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// Supplies the current local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always returns the same instant.
///
/// # Examples
///
/// ```
/// use chrono::{Local, TimeZone};
/// use leveled_logger::core::timestamp::{format_timestamp, Clock, FixedClock};
///
/// let instant = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).single().unwrap();
/// let clock = FixedClock::new(instant);
/// assert_eq!(format_timestamp(&clock.now()).to_string(), "2024.03.09 07:05:01");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Local>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Local>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.instant
    }
}

/// Lazily formats `datetime` with [`TIMESTAMP_FORMAT`].
pub fn format_timestamp(datetime: &DateTime<Local>) -> impl fmt::Display + '_ {
    datetime.format(TIMESTAMP_FORMAT)
}

/// Checks that `text` has the `YYYY.MM.DD HH:MM:SS` shape.
pub fn is_timestamp(text: &str) -> bool {
    const SHAPE: &[u8] = b"dddd.dd.dd dd:dd:dd";
    let bytes = text.as_bytes();
    bytes.len() == SHAPE.len()
        && bytes.iter().zip(SHAPE).all(|(&b, &s)| match s {
            b'd' => b.is_ascii_digit(),
            sep => b == sep,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
    }

    #[test]
    fn test_format_is_dotted_date() {
        let result = format_timestamp(&fixed_datetime()).to_string();
        assert_eq!(result, "2025.01.08 10:30:45");
    }

    #[test]
    fn test_fixed_clock_does_not_advance() {
        let clock = FixedClock::new(fixed_datetime());
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_system_clock_matches_shape() {
        let rendered = format_timestamp(&SystemClock.now()).to_string();
        assert!(is_timestamp(&rendered), "unexpected timestamp {}", rendered);
    }

    #[test]
    fn test_is_timestamp_rejects_other_shapes() {
        assert!(is_timestamp("2025.01.08 10:30:45"));
        assert!(!is_timestamp("2025-01-08 10:30:45"));
        assert!(!is_timestamp("2025.01.08T10:30:45"));
        assert!(!is_timestamp("2025.01.08 10:30"));
    }
}
