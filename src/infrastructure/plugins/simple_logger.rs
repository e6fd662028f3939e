use crate::domain::Selection;
use crate::infrastructure::{ChangeContext, SelectionHook};
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Plugin that appends every selection change to a text log
pub struct SelectionLogHook {
    log_path: PathBuf,
}

impl SelectionLogHook {
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
        }
    }
}

impl SelectionHook for SelectionLogHook {
    fn on_selection_changed(&self, context: &ChangeContext, selection: &Selection) -> Result<()> {
        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open {}", self.log_path.display()))?;

        writeln!(
            file,
            "[{}] {} click on {} - {} -> {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
            context.mode,
            context.clicked,
            context.previous,
            selection
        )?;

        Ok(())
    }

    fn name(&self) -> &str {
        "Selection Log"
    }
}
