use crate::domain::{CalendarDate, DateRange};
use crate::error::PickerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a click combines with the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Single,
    Range,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Single => write!(f, "single"),
            SelectionMode::Range => write!(f, "range"),
        }
    }
}

impl FromStr for SelectionMode {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(SelectionMode::Single),
            "range" => Ok(SelectionMode::Range),
            _ => Err(PickerError::InvalidMode {
                input: s.to_string(),
            }),
        }
    }
}

/// The chosen dates: nothing, one day, or an inclusive span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    tag = "kind",
    content = "dates",
    rename_all = "lowercase",
    from = "StoredSelection"
)]
pub enum Selection {
    #[default]
    Empty,
    Single(CalendarDate),
    Range(DateRange),
}

// Wire form of `Selection`; a stored one-day range is read back as `Single`.
#[derive(Deserialize)]
#[serde(tag = "kind", content = "dates", rename_all = "lowercase")]
enum StoredSelection {
    Empty,
    Single(CalendarDate),
    Range(DateRange),
}

impl From<StoredSelection> for Selection {
    fn from(stored: StoredSelection) -> Self {
        match stored {
            StoredSelection::Empty => Selection::Empty,
            StoredSelection::Single(date) => Selection::Single(date),
            StoredSelection::Range(range) => Selection::from_range(range),
        }
    }
}

impl Selection {
    /// Collapses a one-day span to `Single` so equal endpoints always compare
    /// equal regardless of how they were produced.
    pub fn from_range(range: DateRange) -> Self {
        if range.is_single_day() {
            Selection::Single(range.start())
        } else {
            Selection::Range(range)
        }
    }

    pub fn span(start: CalendarDate, end: CalendarDate) -> Result<Self, PickerError> {
        DateRange::new(start, end).map(Self::from_range)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }

    /// The selection as a range; a single day is a degenerate range.
    pub fn bounds(&self) -> Option<DateRange> {
        match self {
            Selection::Empty => None,
            Selection::Single(date) => Some(DateRange::day(*date)),
            Selection::Range(range) => Some(*range),
        }
    }

    pub fn start(&self) -> Option<CalendarDate> {
        self.bounds().map(|range| range.start())
    }

    pub fn end(&self) -> Option<CalendarDate> {
        self.bounds().map(|range| range.end())
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.bounds().is_some_and(|range| range.contains(date))
    }

    /// Applies a date click.
    ///
    /// In single mode every click replaces the selection. In range mode:
    /// - empty: the clicked day becomes the selection
    /// - one day `d`: the span between `d` and the click, earliest first
    /// - span `[lo, hi]`: a click outside starts over from the clicked day, a
    ///   click inside keeps `lo` and moves the end to the click
    pub fn transition(&self, mode: SelectionMode, clicked: CalendarDate) -> Selection {
        if mode == SelectionMode::Single {
            return Selection::Single(clicked);
        }

        match *self {
            Selection::Empty => Selection::Single(clicked),
            Selection::Single(date) => Selection::from_range(DateRange::ordered(clicked, date)),
            Selection::Range(range) if range.is_single_day() => {
                Selection::from_range(DateRange::ordered(clicked, range.start()))
            }
            Selection::Range(range) => {
                if clicked < range.start() || clicked > range.end() {
                    Selection::Single(clicked)
                } else {
                    Selection::from_range(DateRange::ordered(range.start(), clicked))
                }
            }
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Empty => write!(f, "(none)"),
            Selection::Single(date) => write!(f, "{date}"),
            Selection::Range(range) => write!(f, "{}..{}", range.start(), range.end()),
        }
    }
}
