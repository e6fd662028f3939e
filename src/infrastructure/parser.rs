use crate::domain::{CalendarDate, DateRange, PickerEvent, Selection};
use crate::error::PickerError;
use anyhow::{Context, Result};

/// Reads picker event scripts: one event per line.
///
/// ```text
/// # open on 2020 and pick a week
/// year 2020
/// next
/// click 2020-03-02
/// click 2020-03-08
/// ```
pub struct EventScriptParser;

impl EventScriptParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, content: &str) -> Result<Vec<PickerEvent>> {
        let mut events = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let event = self
                .parse_event(line)
                .with_context(|| format!("line {}: cannot parse '{}'", index + 1, line))?;
            events.push(event);
        }

        Ok(events)
    }

    pub fn parse_event(&self, line: &str) -> Result<PickerEvent, PickerError> {
        let invalid = || PickerError::InvalidEvent {
            input: line.to_string(),
        };

        let mut words = line.split_whitespace();
        let command = words.next().ok_or_else(invalid)?.to_ascii_lowercase();
        let argument = words.next();
        if words.next().is_some() {
            return Err(invalid());
        }

        match (command.as_str(), argument) {
            ("prev" | "previous", None) => Ok(PickerEvent::Previous),
            ("next", None) => Ok(PickerEvent::Next),
            ("year", Some(year)) => year
                .parse()
                .map(PickerEvent::SelectYear)
                .map_err(|_| invalid()),
            ("click", Some(date)) => date.parse().map(PickerEvent::ClickDate),
            _ => Err(invalid()),
        }
    }
}

impl Default for EventScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses `DATE` as a single day or `START..END` as a span, in either order.
pub fn parse_selection(input: &str) -> Result<Selection, PickerError> {
    match input.split_once("..") {
        Some((a, b)) => {
            let a: CalendarDate = a.parse()?;
            let b: CalendarDate = b.parse()?;
            Ok(Selection::from_range(DateRange::ordered(a, b)))
        }
        None => input.parse().map(Selection::Single),
    }
}

/// Parses `START..END` into a validated range.
pub fn parse_range(input: &str) -> Result<DateRange, PickerError> {
    let (start, end) = input.split_once("..").ok_or_else(|| PickerError::InvalidDate {
        input: input.to_string(),
    })?;
    DateRange::new(start.parse()?, end.parse()?)
}
