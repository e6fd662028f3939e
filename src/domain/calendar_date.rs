use crate::error::PickerError;
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MONTHS_PER_YEAR: u32 = 12;

// Month lengths for a non-leap year, indexed by zero-based month.
const MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Leap test used for grid layout. Every fourth year is a leap year; the
/// Gregorian century exception is deliberately not applied.
pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0
}

/// Number of days in a zero-based month under the simplified leap rule.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, PickerError> {
    match month {
        1 if is_leap_year(year) => Ok(29),
        0..=11 => Ok(MONTH_DAYS[month as usize]),
        _ => Err(PickerError::InvalidMonth { month }),
    }
}

/// A calendar day: year, zero-based month and day of month.
///
/// Ordering follows the calendar, so comparing two dates is the same as
/// comparing them at midnight UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, PickerError> {
        let max_day = days_in_month(year, month)?;
        if day == 0 || day > max_day {
            return Err(PickerError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    // Callers guarantee the day exists in the month.
    pub(crate) fn new_unchecked(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month (0 = January).
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth::new_unchecked(self.year, self.month)
    }

    /// January 1st of the given year.
    pub fn first_of_year(year: i32) -> Self {
        Self::new_unchecked(year, 0, 1)
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self::new_unchecked(date.year(), date.month0(), date.day())
    }

    /// Converts back to a `chrono` date. Returns `None` for days that only
    /// exist under the simplified leap rule, such as 1900-02-29.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, self.day)
    }

    /// Normalizes a timestamp to its calendar day in UTC.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::from_naive(datetime.with_timezone(&Utc).date_naive())
    }

    /// The current local calendar day.
    pub fn today() -> Self {
        Self::from_naive(Local::now().date_naive())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PickerError::InvalidDate {
            input: s.to_string(),
        };

        // Split from the right so a leading minus sign stays with the year.
        let mut parts = s.trim().rsplitn(3, '-');
        let day = parts.next().ok_or_else(invalid)?;
        let month = parts.next().ok_or_else(invalid)?;
        let year = parts.next().ok_or_else(invalid)?;

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let day: u32 = day.parse().map_err(|_| invalid())?;
        if month == 0 {
            return Err(invalid());
        }

        Self::new(year, month - 1, day)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = PickerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

/// A calendar month: year plus zero-based month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, PickerError> {
        if month >= MONTHS_PER_YEAR {
            return Err(PickerError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    fn new_unchecked(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following month, or `None` past the last representable year.
    pub fn next(&self) -> Option<Self> {
        if self.month < MONTHS_PER_YEAR - 1 {
            Some(Self::new_unchecked(self.year, self.month + 1))
        } else {
            let year = self.year.checked_add(1)?;
            Some(Self::new_unchecked(year, 0))
        }
    }

    /// The preceding month, or `None` before the first representable year.
    pub fn previous(&self) -> Option<Self> {
        if self.month > 0 {
            Some(Self::new_unchecked(self.year, self.month - 1))
        } else {
            let year = self.year.checked_sub(1)?;
            Some(Self::new_unchecked(year, MONTHS_PER_YEAR - 1))
        }
    }

    pub fn days(&self) -> u32 {
        // month is validated on construction
        days_in_month(self.year, self.month).unwrap_or(31)
    }

    pub fn date(&self, day: u32) -> Result<CalendarDate, PickerError> {
        CalendarDate::new(self.year, self.month, day)
    }

    /// Weekday of the first day of the month, 1 = Sunday through 7 = Saturday.
    pub fn first_weekday(&self) -> Result<u32, PickerError> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
            .map(|date| date.weekday().number_from_sunday())
            .ok_or(PickerError::UnsupportedYear { year: self.year })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month + 1)
    }
}
