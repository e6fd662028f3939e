use crate::application::{Config, DatePicker};
use crate::domain::{CalendarDate, DateRange, PickerEvent, PickerOptions, Selection};
use crate::infrastructure::{
    FileSystemRepository, HookRegistry, SelectionLogHook, SessionRepository,
};
use anyhow::{Context, Result};

/// Wires config, session storage and hooks around a [`DatePicker`].
pub struct PickerApp {
    config: Config,
    repository: Box<dyn SessionRepository>,
}

impl PickerApp {
    pub fn new() -> Self {
        Self::with_config(Config::from_env())
    }

    pub fn with_config(config: Config) -> Self {
        let repository = FileSystemRepository::new(config.session_path.clone());
        Self::with_repository(config, Box::new(repository))
    }

    pub fn with_repository(config: Config, repository: Box<dyn SessionRepository>) -> Self {
        Self { config, repository }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn hooks(&self) -> HookRegistry {
        let mut hook_registry = HookRegistry::new();
        hook_registry.register_if_enabled(
            SelectionLogHook::new(self.config.log_path.clone()),
            self.config.log_selections,
        );
        hook_registry
    }

    /// Options for a new session, filling unset values from the config.
    pub fn default_options(&self, range: DateRange) -> PickerOptions {
        PickerOptions::new(range)
            .with_mode(self.config.mode)
            .with_window_size(self.config.window_size)
    }

    /// Starts a new session, replacing any saved one.
    pub fn init(
        &self,
        options: PickerOptions,
        selection: Selection,
        today: CalendarDate,
    ) -> Result<DatePicker> {
        let picker = DatePicker::new(options, selection, today)
            .context("Failed to create date picker")?
            .with_hooks(self.hooks());
        self.save(&picker)?;
        log::info!(
            "new session over {}..{} at cursor {}",
            options.range.start(),
            options.range.end(),
            picker.cursor()
        );
        Ok(picker)
    }

    pub fn load(&self) -> Result<DatePicker> {
        let session = self
            .repository
            .load()?
            .context("No picker session found, run `datepicker init` first")?;
        let picker = DatePicker::restore(session)
            .context("Saved session is invalid")?
            .with_hooks(self.hooks());
        Ok(picker)
    }

    pub fn save(&self, picker: &DatePicker) -> Result<()> {
        self.repository.save(&picker.session())
    }

    /// Loads the session, applies the events in order and saves the result.
    pub fn apply_events(&self, events: &[PickerEvent]) -> Result<DatePicker> {
        let mut picker = self.load()?;
        for event in events {
            log::debug!("applying {event}");
            picker.apply(*event);
        }
        self.save(&picker)?;
        Ok(picker)
    }

    /// Deletes the saved session; the next command needs a fresh `init`.
    pub fn reset(&self) -> Result<()> {
        self.repository.clear()?;
        log::info!("session removed");
        Ok(())
    }

    pub fn clear_selection(&self) -> Result<DatePicker> {
        let mut picker = self.load()?;
        picker.clear_selection();
        self.save(&picker)?;
        Ok(picker)
    }
}

impl Default for PickerApp {
    fn default() -> Self {
        Self::new()
    }
}
