use crate::application::{MonthView, PickerView};
use crate::domain::{CellAnnotation, DAYS_PER_WEEK};

const WEEKDAY_HEADER: &str = " Su  Mo  Tu  We  Th  Fr  Sa";

/// Plain-text rendering of a picker view, one month below the other.
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, view: &PickerView) -> String {
        let mut out = format!(
            "=== {} === (selection: {})\n",
            view.viewing_year, view.selection
        );

        for month in &view.months {
            out.push('\n');
            self.render_month(&mut out, month, view);
        }

        out
    }

    pub fn print(&self, view: &PickerView) {
        print!("{}", self.render(view));
    }

    fn render_month(&self, out: &mut String, month: &MonthView, view: &PickerView) {
        let prev = if !month.first {
            "   "
        } else if view.prev_disabled {
            " - "
        } else {
            " < "
        };
        let next = if !month.last {
            "   "
        } else if view.next_disabled {
            " - "
        } else {
            " > "
        };
        let title = format!("{} {}", month_name(month.month), month.year);
        out.push_str(&format!("{prev}{title:^21}{next}\n"));
        out.push_str(WEEKDAY_HEADER);
        out.push('\n');

        for week in month.cells.chunks(DAYS_PER_WEEK) {
            let line: String = week.iter().map(render_cell).collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn render_cell(cell: &CellAnnotation) -> String {
    let day = cell.date.day();
    if cell.is_hidden {
        "    ".to_string()
    } else if cell.is_selected {
        format!("[{day:>2}]")
    } else if cell.is_disabled {
        format!("({day:>2})")
    } else {
        format!(" {day:>2} ")
    }
}

fn month_name(month: u32) -> &'static str {
    u8::try_from(month + 1)
        .ok()
        .and_then(|number| chrono::Month::try_from(number).ok())
        .map(|month| month.name())
        .unwrap_or("?")
}
