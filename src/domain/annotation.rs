use crate::domain::{CalendarDate, DAYS_PER_WEEK, DateRange, MonthGrid, Selection};
use serde::Serialize;

/// Display flags for one grid cell, derived fresh on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellAnnotation {
    pub date: CalendarDate,
    pub is_hidden: bool,
    pub is_disabled: bool,
    pub is_selected: bool,
    pub is_first_selected: bool,
    pub is_last_selected: bool,
    pub is_weekend: bool,
}

impl CellAnnotation {
    /// Hidden and disabled cells swallow clicks.
    pub fn is_clickable(&self) -> bool {
        !self.is_hidden && !self.is_disabled
    }
}

/// The bounds a grid is annotated against.
#[derive(Debug, Clone, Copy)]
pub struct AnnotationContext<'a> {
    pub range: DateRange,
    pub sub_range: Option<DateRange>,
    pub selection: &'a Selection,
}

impl AnnotationContext<'_> {
    pub fn is_disabled(&self, date: CalendarDate) -> bool {
        !self.range.contains(date) || self.sub_range.is_some_and(|sub| !sub.contains(date))
    }

    pub fn annotate_cell(&self, grid: &MonthGrid, index: usize) -> CellAnnotation {
        let date = grid.cells()[index];
        let column = index % DAYS_PER_WEEK;
        let selected = self.selection.bounds().filter(|bounds| bounds.contains(date));

        CellAnnotation {
            date,
            is_hidden: date.year_month() != grid.owner(),
            is_disabled: self.is_disabled(date),
            is_selected: selected.is_some(),
            is_first_selected: selected.is_some_and(|bounds| bounds.start() == date),
            is_last_selected: selected.is_some_and(|bounds| bounds.end() == date),
            is_weekend: column == 0 || column == DAYS_PER_WEEK - 1,
        }
    }

    /// Annotates all 42 cells of a grid, in grid order.
    pub fn annotate(&self, grid: &MonthGrid) -> Vec<CellAnnotation> {
        (0..grid.cells().len())
            .map(|index| self.annotate_cell(grid, index))
            .collect()
    }
}
