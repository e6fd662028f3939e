use crate::domain::{CalendarDate, YearMonth};
use crate::error::PickerError;

pub const DAYS_PER_WEEK: usize = 7;
pub const CALENDAR_WEEKS: usize = 6;
pub const GRID_CELLS: usize = CALENDAR_WEEKS * DAYS_PER_WEEK;

/// Index of the cell that always falls inside the grid's own month. At most
/// six leading days come from the previous month, so index 10 is at worst the
/// fifth day of the month.
pub const OWNER_CELL: usize = 10;

/// Six weeks of seven days covering one month, padded with the trailing days
/// of the previous month and the leading days of the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    cells: [CalendarDate; GRID_CELLS],
}

impl MonthGrid {
    /// Builds the 42-day grid for a zero-based month. Columns run Sunday to
    /// Saturday.
    pub fn build(month: u32, year: i32) -> Result<Self, PickerError> {
        let current = YearMonth::new(year, month)?;
        let unsupported = || PickerError::UnsupportedYear { year };
        let previous = current.previous().ok_or_else(unsupported)?;
        let next = current.next().ok_or_else(unsupported)?;

        let month_days = current.days() as usize;
        let days_from_previous = (current.first_weekday()? - 1) as usize;
        let days_from_next = GRID_CELLS - (days_from_previous + month_days);

        let previous_days = previous.days() as usize;
        let leading = (previous_days - days_from_previous + 1..=previous_days)
            .map(|day| CalendarDate::new_unchecked(previous.year(), previous.month(), day as u32));
        let own = (1..=month_days)
            .map(|day| CalendarDate::new_unchecked(current.year(), current.month(), day as u32));
        let trailing = (1..=days_from_next)
            .map(|day| CalendarDate::new_unchecked(next.year(), next.month(), day as u32));

        let cells: Vec<CalendarDate> = leading.chain(own).chain(trailing).collect();
        let cells: [CalendarDate; GRID_CELLS] = cells.try_into().map_err(|_| unsupported())?;

        if cells[OWNER_CELL].year_month() != current {
            return Err(unsupported());
        }
        Ok(Self { cells })
    }

    pub fn for_month(year_month: YearMonth) -> Result<Self, PickerError> {
        Self::build(year_month.month(), year_month.year())
    }

    /// The month this grid was built for, read from the owner cell.
    pub fn owner(&self) -> YearMonth {
        self.cells[OWNER_CELL].year_month()
    }

    pub fn cells(&self) -> &[CalendarDate; GRID_CELLS] {
        &self.cells
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDate]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalendarDate> {
        self.cells.iter()
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.cells.contains(&date)
    }
}
