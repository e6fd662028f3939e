//! Error types for the date picker core.

use crate::domain::CalendarDate;

/// Error type for the fallible constructors and parsers of the core.
///
/// Navigation and selection never fail: out-of-bounds input is clamped or
/// ignored instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    /// Returned when a month index is outside 0-11.
    #[error("month must be in 0..=11, got {month}")]
    InvalidMonth {
        /// The invalid zero-based month.
        month: u32,
    },

    /// Returned when a day does not exist in its month.
    #[error("day {day} does not exist in {year}-{:02}", .month + 1)]
    InvalidDay {
        /// Year of the rejected date.
        year: i32,
        /// Zero-based month of the rejected date.
        month: u32,
        /// The invalid day.
        day: u32,
    },

    /// Returned when a range starts after it ends.
    #[error("range start {start} is after range end {end}")]
    InvalidRange {
        /// Requested start.
        start: CalendarDate,
        /// Requested end.
        end: CalendarDate,
    },

    /// Returned when the visible window would hold no months.
    #[error("window size must be >= 1, got {size}")]
    InvalidWindowSize {
        /// The invalid window size.
        size: usize,
    },

    /// Returned when a weekday cannot be computed for the year.
    #[error("year {year} is outside the supported calendar")]
    UnsupportedYear {
        /// The unsupported year.
        year: i32,
    },

    /// Returned when text is not a `YYYY-MM-DD` date.
    #[error("invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        input: String,
    },

    /// Returned when text is not a known selection mode.
    #[error("invalid selection mode '{input}', expected 'single' or 'range'")]
    InvalidMode {
        /// The rejected input.
        input: String,
    },

    /// Returned when an event script line cannot be understood.
    #[error("invalid event '{input}'")]
    InvalidEvent {
        /// The rejected input.
        input: String,
    },
}
