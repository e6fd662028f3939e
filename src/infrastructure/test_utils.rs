/// Test utilities for filesystem-backed tests
///
/// `TestSession` owns a fresh temporary directory holding the session file
/// and selection log, removed again when the harness is dropped.
///
/// ```rust,ignore
/// let test_session = TestSession::new();
/// test_session.repository().save(&session)?;
/// ```
#[cfg(test)]
pub mod test_harness {
    use crate::application::Config;
    use crate::domain::SelectionMode;
    use crate::infrastructure::FileSystemRepository;
    use std::path::PathBuf;
    use tempfile::TempDir;

    pub struct TestSession {
        repository: FileSystemRepository,
        temp_dir: TempDir,
    }

    impl TestSession {
        pub fn new() -> Self {
            let temp_dir = TempDir::new().expect("Failed to create temp directory");
            let repository = FileSystemRepository::new(temp_dir.path().join("session.json"));

            Self {
                repository,
                temp_dir,
            }
        }

        pub fn repository(&self) -> &FileSystemRepository {
            &self.repository
        }

        pub fn session_path(&self) -> PathBuf {
            self.temp_dir.path().join("session.json")
        }

        pub fn log_path(&self) -> PathBuf {
            self.temp_dir.path().join("selection_log.txt")
        }

        /// A config pointing every path into the temp directory.
        pub fn config(&self) -> Config {
            Config {
                state_dir: self.temp_dir.path().to_path_buf(),
                session_path: self.session_path(),
                log_path: self.log_path(),
                window_size: 2,
                mode: SelectionMode::Single,
                log_selections: None,
            }
        }
    }

    /// Run a test against a fresh session directory
    pub fn with_test_session<F, R>(test_fn: F) -> R
    where
        F: FnOnce(&TestSession) -> R,
    {
        let test_session = TestSession::new();
        test_fn(&test_session)
    }
}

#[cfg(test)]
mod tests {
    use super::test_harness::*;

    #[test]
    fn harness_paths_live_in_one_directory() {
        with_test_session(|test_session| {
            let config = test_session.config();
            assert_eq!(config.session_path.parent(), Some(config.state_dir.as_path()));
            assert_eq!(test_session.repository().session_path(), config.session_path);
        });
    }

    #[test]
    fn harness_isolation() {
        let first = TestSession::new();
        let second = TestSession::new();
        std::fs::write(first.session_path(), "{}").unwrap();
        assert!(!second.session_path().exists());
    }
}
