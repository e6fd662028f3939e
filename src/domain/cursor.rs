use crate::domain::{CalendarDate, DateRange, MONTHS_PER_YEAR, Selection};

/// Whole calendar months from `base` to `target`, ignoring days.
///
/// A target earlier in the same year counts as zero; a target in an earlier
/// year comes out negative.
pub fn months_between(base: CalendarDate, target: CalendarDate) -> i64 {
    let years = i64::from(target.year()) - i64::from(base.year());
    let months = i64::from(target.month()) - i64::from(base.month());
    if years == 0 {
        return months.max(0);
    }
    years * i64::from(MONTHS_PER_YEAR) + months
}

/// Left edge of the visible window of month grids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorNavigator {
    range: DateRange,
    cursor: usize,
    cursor_max: usize,
}

impl CursorNavigator {
    /// Places the cursor for the first render.
    ///
    /// A selection wins; otherwise, when `today` lies inside the range, the
    /// window opens on January of today's year rather than the current month.
    pub fn new(
        range: DateRange,
        window_size: usize,
        selection: &Selection,
        today: CalendarDate,
    ) -> Self {
        let mut navigator = Self::at(range, window_size, 0);
        let target = match selection.start() {
            Some(start) => Some(start),
            None if range.contains(today) => Some(CalendarDate::first_of_year(today.year())),
            None => None,
        };
        if let Some(target) = target {
            navigator.cursor = navigator.clamp(months_between(range.start(), target));
        }
        log::debug!(
            "initial cursor {} of {} for {}",
            navigator.cursor,
            navigator.cursor_max,
            range.start()
        );
        navigator
    }

    /// Restores a known cursor, clamped to the bounds for this range.
    pub fn at(range: DateRange, window_size: usize, cursor: usize) -> Self {
        let total_months = range.month_count();
        let cursor_max = total_months.saturating_sub(window_size);
        Self {
            range,
            cursor: cursor.min(cursor_max),
            cursor_max,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_max(&self) -> usize {
        self.cursor_max
    }

    pub fn is_at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.cursor_max
    }

    pub fn step_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn step_next(&mut self) {
        self.cursor = (self.cursor + 1).min(self.cursor_max);
    }

    /// Moves the window to January of `year`. Years outside the range are
    /// ignored; returns whether the jump was accepted.
    pub fn jump_to_year(&mut self, year: i32) -> bool {
        if !self.range.contains_year(year) {
            log::debug!(
                "ignoring jump to {year}, outside {}..{}",
                self.range.start().year(),
                self.range.end().year()
            );
            return false;
        }
        self.cursor = self.clamp(months_between(
            self.range.start(),
            CalendarDate::first_of_year(year),
        ));
        true
    }

    /// The year shown for the current window. At the last position this is
    /// the range's final year.
    pub fn viewing_year(&self) -> i32 {
        if self.is_at_end() {
            return self.range.end().year();
        }
        let offset = (self.cursor as u64 + u64::from(self.range.start().month()))
            / u64::from(MONTHS_PER_YEAR);
        self.range.start().year() + offset as i32
    }

    fn clamp(&self, months: i64) -> usize {
        months.clamp(0, self.cursor_max as i64) as usize
    }
}
