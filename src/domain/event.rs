use crate::domain::CalendarDate;
use std::fmt;

/// Input coming back from whatever renders the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    Previous,
    Next,
    SelectYear(i32),
    ClickDate(CalendarDate),
}

impl fmt::Display for PickerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickerEvent::Previous => write!(f, "prev"),
            PickerEvent::Next => write!(f, "next"),
            PickerEvent::SelectYear(year) => write!(f, "year {year}"),
            PickerEvent::ClickDate(date) => write!(f, "click {date}"),
        }
    }
}
