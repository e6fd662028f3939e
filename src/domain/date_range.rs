use crate::domain::{CalendarDate, MonthGrid, YearMonth};
use crate::error::PickerError;
use serde::{Deserialize, Serialize};

/// An inclusive span of calendar days with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

#[derive(Deserialize)]
struct RawRange {
    start: CalendarDate,
    end: CalendarDate,
}

impl TryFrom<RawRange> for DateRange {
    type Error = PickerError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl DateRange {
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, PickerError> {
        if start > end {
            return Err(PickerError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering a single day.
    pub fn day(date: CalendarDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Builds a range from two dates in either order.
    pub fn ordered(a: CalendarDate, b: CalendarDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// January 1st of `first_year` through December 31st of `last_year`.
    pub fn years(first_year: i32, last_year: i32) -> Result<Self, PickerError> {
        Self::new(
            CalendarDate::first_of_year(first_year),
            CalendarDate::new(last_year, 11, 31)?,
        )
    }

    pub fn start(&self) -> CalendarDate {
        self.start
    }

    pub fn end(&self) -> CalendarDate {
        self.end
    }

    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn contains_year(&self, year: i32) -> bool {
        year >= self.start.year() && year <= self.end.year()
    }

    /// Every calendar month touched by the range, in order.
    pub fn months(&self) -> impl Iterator<Item = YearMonth> {
        let last = self.end.year_month();
        let mut current = Some(self.start.year_month()).filter(|first| *first <= last);
        std::iter::from_fn(move || {
            let month = current?;
            current = if month == last { None } else { month.next() };
            Some(month)
        })
    }

    pub fn month_count(&self) -> usize {
        self.months().count()
    }

    /// Expands the range into one month grid per calendar month spanned,
    /// from the start's month through the end's month inclusive.
    pub fn month_grids(&self) -> Result<Vec<MonthGrid>, PickerError> {
        self.months().map(MonthGrid::for_month).collect()
    }
}
