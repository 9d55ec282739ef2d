//! Timestamp display utilities.
//!
//! Attempt timestamps are local civil date-times without a zone, so they are
//! shown exactly as stored.

use std::fmt;

use jiff::civil::DateTime;

use crate::models::attempt::timestamp_format::FORMAT;

/// Formats an attempt timestamp as `YYYY-MM-DD HH:MM:SS`.
pub struct LogTimestamp<'a>(pub &'a DateTime);

impl<'a> fmt::Display for LogTimestamp<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime(FORMAT))
    }
}

/// Formats only the date part as `YYYY-MM-DD`.
pub struct LogDate<'a>(pub &'a DateTime);

impl<'a> fmt::Display for LogDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.date())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_timestamp_formats() {
        let at = date(2025, 1, 4).at(7, 5, 9, 0);
        assert_eq!(LogTimestamp(&at).to_string(), "2025-01-04 07:05:09");
        assert_eq!(LogDate(&at).to_string(), "2025-01-04");
    }
}
