use crate::domain::{DEFAULT_WINDOW_SIZE, SelectionMode};
use std::path::PathBuf;

pub struct Config {
    pub state_dir: PathBuf,
    pub session_path: PathBuf,
    pub log_path: PathBuf,
    pub window_size: usize,
    pub mode: SelectionMode,
    /// Overrides the selection log hook's default when set.
    pub log_selections: Option<bool>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let state_dir = lookup("DATEPICKER_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::data_local_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("datepicker")
            });

        let session_path = state_dir.join("session.json");
        let log_path = state_dir.join("selection_log.txt");

        let window_size = match lookup("DATEPICKER_WINDOW").map(|v| v.trim().parse::<usize>()) {
            Some(Ok(size)) if size > 0 => size,
            Some(_) => {
                log::warn!("DATEPICKER_WINDOW must be a positive integer, using {DEFAULT_WINDOW_SIZE}");
                DEFAULT_WINDOW_SIZE
            }
            None => DEFAULT_WINDOW_SIZE,
        };

        let mode = match lookup("DATEPICKER_MODE").map(|v| v.parse::<SelectionMode>()) {
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                log::warn!("{e}, using single");
                SelectionMode::Single
            }
            None => SelectionMode::Single,
        };

        let log_selections = lookup("DATEPICKER_SELECTION_LOG")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "off" | "no"));

        Self {
            state_dir,
            session_path,
            log_path,
            window_size,
            mode,
            log_selections,
        }
    }
}
