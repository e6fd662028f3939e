use crate::domain::{
    AnnotationContext, CalendarDate, CellAnnotation, CursorNavigator, MonthGrid, PickerEvent,
    PickerOptions, PickerSession, Selection,
};
use crate::error::PickerError;
use crate::infrastructure::{ChangeContext, HookRegistry};
use serde::Serialize;

/// One visible month, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthView {
    pub year: i32,
    /// Zero-based month.
    pub month: u32,
    /// Leftmost month; carries the "previous" control.
    pub first: bool,
    /// Rightmost month; carries the "next" control.
    pub last: bool,
    pub cells: Vec<CellAnnotation>,
}

/// Everything a renderer needs for one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickerView {
    pub months: Vec<MonthView>,
    pub viewing_year: i32,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub cursor: usize,
    pub selection: Selection,
}

/// A date picker: all month grids for the range, a cursor into them and the
/// current selection.
pub struct DatePicker {
    options: PickerOptions,
    months: Vec<MonthGrid>,
    navigator: CursorNavigator,
    selection: Selection,
    hooks: HookRegistry,
}

impl DatePicker {
    pub fn new(
        options: PickerOptions,
        selection: Selection,
        today: CalendarDate,
    ) -> Result<Self, PickerError> {
        options.validate()?;
        let months = options.range.month_grids()?;
        let navigator =
            CursorNavigator::new(options.range, options.window_size, &selection, today);

        Ok(Self {
            options,
            months,
            navigator,
            selection,
            hooks: HookRegistry::new(),
        })
    }

    /// Rebuilds a picker from a saved session, clamping the cursor to the
    /// range it was saved with.
    pub fn restore(session: PickerSession) -> Result<Self, PickerError> {
        let options = session.options;
        options.validate()?;
        let months = options.range.month_grids()?;
        let navigator = CursorNavigator::at(options.range, options.window_size, session.cursor);

        Ok(Self {
            options,
            months,
            navigator,
            selection: session.selection,
            hooks: HookRegistry::new(),
        })
    }

    pub fn with_hooks(mut self, hooks: HookRegistry) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn cursor(&self) -> usize {
        self.navigator.cursor()
    }

    pub fn month_count(&self) -> usize {
        self.months.len()
    }

    pub fn session(&self) -> PickerSession {
        PickerSession {
            options: self.options,
            cursor: self.navigator.cursor(),
            selection: self.selection,
        }
    }

    /// The month grids currently in view.
    pub fn window(&self) -> &[MonthGrid] {
        let start = self.navigator.cursor();
        let end = (start + self.options.window_size).min(self.months.len());
        &self.months[start..end]
    }

    fn annotation_context(&self) -> AnnotationContext<'_> {
        AnnotationContext {
            range: self.options.range,
            sub_range: self.options.sub_range,
            selection: &self.selection,
        }
    }

    pub fn view(&self) -> PickerView {
        let context = self.annotation_context();
        let window = self.window();
        let months = window
            .iter()
            .enumerate()
            .map(|(index, grid)| {
                let owner = grid.owner();
                MonthView {
                    year: owner.year(),
                    month: owner.month(),
                    first: index == 0,
                    last: index + 1 == window.len(),
                    cells: context.annotate(grid),
                }
            })
            .collect();

        PickerView {
            months,
            viewing_year: self.navigator.viewing_year(),
            prev_disabled: self.navigator.is_at_start(),
            next_disabled: self.navigator.is_at_end(),
            cursor: self.navigator.cursor(),
            selection: self.selection,
        }
    }

    pub fn click_previous(&mut self) {
        self.navigator.step_previous();
    }

    pub fn click_next(&mut self) {
        self.navigator.step_next();
    }

    pub fn select_year(&mut self, year: i32) -> bool {
        self.navigator.jump_to_year(year)
    }

    /// Clicks the visible, in-month cell showing `date`. Dates not on screen,
    /// shown only as padding, or outside the allowed bounds are ignored.
    pub fn click_date(&mut self, date: CalendarDate) -> Option<Selection> {
        let context = self.annotation_context();
        let cell = self.window().iter().find_map(|grid| {
            grid.cells()
                .iter()
                .position(|cell| *cell == date && cell.year_month() == grid.owner())
                .map(|index| context.annotate_cell(grid, index))
        });

        match cell {
            Some(cell) if cell.is_clickable() => Some(self.select(cell.date)),
            Some(_) => {
                log::debug!("ignoring click on disabled date {date}");
                None
            }
            None => {
                log::debug!("ignoring click on {date}, not shown in the current window");
                None
            }
        }
    }

    /// Clicks a cell by position: `month` indexes the visible window and
    /// `index` the 42 cells of that month.
    pub fn click_cell(&mut self, month: usize, index: usize) -> Option<Selection> {
        let grid = self.window().get(month)?;
        if index >= grid.cells().len() {
            return None;
        }
        let cell = self.annotation_context().annotate_cell(grid, index);
        if !cell.is_clickable() {
            log::debug!("ignoring click on hidden or disabled cell {}", cell.date);
            return None;
        }
        Some(self.select(cell.date))
    }

    fn select(&mut self, clicked: CalendarDate) -> Selection {
        let previous = self.selection;
        self.selection = previous.transition(self.options.mode, clicked);
        log::info!("selection {} -> {}", previous, self.selection);

        let context = ChangeContext {
            clicked,
            mode: self.options.mode,
            previous,
        };
        self.hooks.execute_change_hooks(&context, &self.selection);
        self.selection
    }

    /// Applies one renderer event. Returns the new selection when a click
    /// changed it.
    pub fn apply(&mut self, event: PickerEvent) -> Option<Selection> {
        match event {
            PickerEvent::Previous => {
                self.click_previous();
                None
            }
            PickerEvent::Next => {
                self.click_next();
                None
            }
            PickerEvent::SelectYear(year) => {
                self.select_year(year);
                None
            }
            PickerEvent::ClickDate(date) => self.click_date(date),
        }
    }

    /// Replaces the selection without running hooks, for hosts that own it.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DateRange, SelectionMode};
    use crate::infrastructure::SelectionHook;
    use std::sync::{Arc, Mutex};

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    fn shows(view: &PickerView, target: CalendarDate) -> bool {
        view.months
            .iter()
            .flat_map(|month| month.cells.iter())
            .any(|cell| cell.date == target && !cell.is_hidden)
    }

    fn picker(mode: SelectionMode, selection: Selection) -> DatePicker {
        let range = DateRange::new(date(2019, 11, 31), date(2020, 11, 31)).unwrap();
        let options = PickerOptions::new(range).with_mode(mode);
        DatePicker::new(options, selection, date(2019, 5, 1)).unwrap()
    }

    #[test]
    fn window_navigation_scenario() {
        let mut picker = picker(SelectionMode::Single, Selection::Single(date(2020, 0, 1)));
        assert_eq!(picker.month_count(), 13);

        let view = picker.view();
        assert_eq!(view.months.len(), 2);
        assert_eq!((view.months[0].year, view.months[0].month), (2020, 0));
        assert_eq!((view.months[1].year, view.months[1].month), (2020, 1));
        assert!(view.months[0].cells[0].is_hidden);
        assert!(!shows(&view, date(2020, 2, 31)));

        picker.click_next();
        assert!(shows(&picker.view(), date(2020, 2, 31)));

        picker.click_previous();
        assert!(!shows(&picker.view(), date(2020, 2, 31)));
    }

    #[test]
    fn view_flags_follow_cursor() {
        let mut picker = picker(SelectionMode::Single, Selection::Empty);
        let view = picker.view();
        assert_eq!(view.cursor, 0);
        assert!(view.prev_disabled);
        assert!(!view.next_disabled);
        assert!(view.months[0].first && !view.months[0].last);
        assert!(view.months[1].last);
        assert_eq!(view.viewing_year, 2019);

        for _ in 0..20 {
            picker.click_next();
        }
        let view = picker.view();
        assert_eq!(view.cursor, 11);
        assert!(view.next_disabled);
        assert_eq!(view.viewing_year, 2020);
        assert_eq!((view.months[1].year, view.months[1].month), (2020, 11));
    }

    #[test]
    fn range_clicks_build_a_span() {
        let mut picker = picker(SelectionMode::Range, Selection::Single(date(2020, 0, 1)));
        picker.set_selection(Selection::Empty);

        assert_eq!(picker.click_date(date(2020, 0, 13)), Some(Selection::Single(date(2020, 0, 13))));
        let span = picker.click_date(date(2020, 0, 15)).unwrap();
        assert_eq!(span, Selection::span(date(2020, 0, 13), date(2020, 0, 15)).unwrap());

        // Clicking before the span starts over.
        assert_eq!(picker.click_date(date(2020, 0, 11)), Some(Selection::Single(date(2020, 0, 11))));
    }

    #[test]
    fn padding_and_disabled_cells_ignore_clicks() {
        let range = DateRange::new(date(2020, 0, 5), date(2020, 11, 31)).unwrap();
        let sub_range = DateRange::new(date(2020, 0, 1), date(2020, 0, 20)).unwrap();
        let options = PickerOptions::new(range).with_sub_range(sub_range);
        let mut picker = DatePicker::new(options, Selection::Empty, date(2020, 0, 10)).unwrap();

        // Before the range start.
        assert_eq!(picker.click_date(date(2020, 0, 4)), None);
        // After the sub-range end.
        assert_eq!(picker.click_date(date(2020, 0, 21)), None);
        // Index 0 of January 2020 is 2019-12-29, shown only as padding.
        assert_eq!(picker.click_cell(0, 0), None);
        // Not in the visible window at all.
        assert_eq!(picker.click_date(date(2020, 5, 1)), None);
        assert_eq!(picker.selection(), Selection::Empty);

        assert_eq!(picker.click_date(date(2020, 0, 10)), Some(Selection::Single(date(2020, 0, 10))));
    }

    #[test]
    fn trailing_padding_is_clickable_in_its_own_month() {
        let mut picker = picker(SelectionMode::Single, Selection::Single(date(2020, 0, 1)));
        // 2020-02-01 appears as padding in January and in its own February grid.
        assert_eq!(
            picker.click_date(date(2020, 1, 1)),
            Some(Selection::Single(date(2020, 1, 1)))
        );
    }

    #[test]
    fn click_cell_uses_grid_positions() {
        let mut picker = picker(SelectionMode::Single, Selection::Single(date(2020, 0, 1)));
        // January 2020 starts on a Wednesday, so index 3 is the 1st.
        assert_eq!(picker.click_cell(0, 3), Some(Selection::Single(date(2020, 0, 1))));
        assert_eq!(picker.click_cell(0, 42), None);
        assert_eq!(picker.click_cell(2, 0), None);
    }

    #[test]
    fn year_events_outside_range_are_ignored() {
        let mut picker = picker(SelectionMode::Single, Selection::Empty);
        picker.apply(PickerEvent::Next);
        picker.apply(PickerEvent::Next);
        assert_eq!(picker.cursor(), 2);

        picker.apply(PickerEvent::SelectYear(2025));
        assert_eq!(picker.cursor(), 2);

        picker.apply(PickerEvent::SelectYear(2020));
        assert_eq!(picker.cursor(), 1);
        assert_eq!(picker.view().viewing_year, 2020);
    }

    #[test]
    fn restore_clamps_cursor() {
        let picker = picker(SelectionMode::Range, Selection::Single(date(2020, 0, 1)));
        let mut session = picker.session();
        session.cursor = 99;

        let restored = DatePicker::restore(session).unwrap();
        assert_eq!(restored.cursor(), 11);
        assert_eq!(restored.selection(), Selection::Single(date(2020, 0, 1)));
    }

    #[test]
    fn zero_window_is_rejected() {
        let range = DateRange::years(2020, 2020).unwrap();
        let options = PickerOptions::new(range).with_window_size(0);
        assert!(matches!(
            DatePicker::new(options, Selection::Empty, date(2020, 0, 1)),
            Err(PickerError::InvalidWindowSize { size: 0 })
        ));
    }

    #[test]
    fn window_larger_than_range_shows_every_month() {
        let range = DateRange::new(date(2020, 0, 1), date(2020, 1, 29)).unwrap();
        let options = PickerOptions::new(range).with_window_size(5);
        let picker = DatePicker::new(options, Selection::Empty, date(2020, 0, 1)).unwrap();
        let view = picker.view();
        assert_eq!(view.months.len(), 2);
        assert!(view.prev_disabled && view.next_disabled);
    }

    struct Counter(Arc<Mutex<usize>>);

    impl SelectionHook for Counter {
        fn on_selection_changed(
            &self,
            _context: &ChangeContext,
            _selection: &Selection,
        ) -> anyhow::Result<()> {
            *self.0.lock().unwrap() += 1;
            Ok(())
        }

        fn name(&self) -> &str {
            "Counter"
        }
    }

    #[test]
    fn hooks_fire_only_for_accepted_clicks() {
        let count = Arc::new(Mutex::new(0));
        let mut hooks = HookRegistry::new();
        hooks.register(Counter(count.clone()));

        let mut picker = picker(SelectionMode::Single, Selection::Single(date(2020, 0, 1)))
            .with_hooks(hooks);
        picker.click_date(date(2020, 0, 2));
        picker.click_cell(0, 0);
        picker.click_date(date(2020, 8, 1));

        assert_eq!(*count.lock().unwrap(), 1);
    }
}
