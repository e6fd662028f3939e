use crate::domain::PickerSession;
use crate::infrastructure::SessionRepository;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Stores the picker session as a JSON file.
pub struct FileSystemRepository {
    session_path: PathBuf,
}

impl FileSystemRepository {
    pub fn new(session_path: PathBuf) -> Self {
        Self { session_path }
    }

    pub fn session_path(&self) -> &Path {
        &self.session_path
    }
}

impl SessionRepository for FileSystemRepository {
    fn load(&self) -> Result<Option<PickerSession>> {
        if !self.session_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.session_path)
            .with_context(|| format!("Failed to read {}", self.session_path.display()))?;
        let session = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse session file {}", self.session_path.display()))?;
        Ok(Some(session))
    }

    fn save(&self, session: &PickerSession) -> Result<()> {
        if let Some(parent) = self.session_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.session_path, content)
            .with_context(|| format!("Failed to write {}", self.session_path.display()))?;
        log::debug!("session saved to {}", self.session_path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.session_path.exists() {
            std::fs::remove_file(&self.session_path)?;
        }
        Ok(())
    }
}
