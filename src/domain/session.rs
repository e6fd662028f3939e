use crate::domain::{DateRange, Selection, SelectionMode};
use crate::error::PickerError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WINDOW_SIZE: usize = 2;

/// Host configuration for one picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerOptions {
    /// Every displayable day.
    pub range: DateRange,
    /// Optional tighter bound on which days can be picked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_range: Option<DateRange>,
    #[serde(default)]
    pub mode: SelectionMode,
    /// Number of month grids visible at once.
    #[serde(default = "default_window_size")]
    pub window_size: usize,
}

fn default_window_size() -> usize {
    DEFAULT_WINDOW_SIZE
}

impl PickerOptions {
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            sub_range: None,
            mode: SelectionMode::default(),
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }

    pub fn with_sub_range(mut self, sub_range: DateRange) -> Self {
        self.sub_range = Some(sub_range);
        self
    }

    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn validate(&self) -> Result<(), PickerError> {
        if self.window_size == 0 {
            return Err(PickerError::InvalidWindowSize {
                size: self.window_size,
            });
        }
        Ok(())
    }
}

/// Everything a host needs to rebuild a picker between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerSession {
    pub options: PickerOptions,
    pub cursor: usize,
    #[serde(default)]
    pub selection: Selection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_window_is_rejected() {
        let options = PickerOptions::new(DateRange::years(2019, 2020).unwrap()).with_window_size(0);
        assert_eq!(
            options.validate(),
            Err(PickerError::InvalidWindowSize { size: 0 })
        );
    }

    #[test]
    fn missing_fields_take_defaults() {
        let options: PickerOptions =
            serde_json::from_str(r#"{"range":{"start":"2019-12-31","end":"2020-12-31"}}"#).unwrap();
        assert_eq!(options.window_size, DEFAULT_WINDOW_SIZE);
        assert_eq!(options.mode, SelectionMode::Single);
        assert_eq!(options.sub_range, None);
    }
}
