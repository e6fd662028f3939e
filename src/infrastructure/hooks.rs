use crate::domain::{CalendarDate, Selection, SelectionMode};
use anyhow::Result;

/// Context provided to selection hooks
#[derive(Debug, Clone)]
pub struct ChangeContext {
    pub clicked: CalendarDate,
    pub mode: SelectionMode,
    pub previous: Selection,
}

/// Trait for plugins that respond to selection changes
pub trait SelectionHook: Send + Sync {
    /// Called after a click produced a new selection
    fn on_selection_changed(&self, context: &ChangeContext, selection: &Selection) -> Result<()>;

    /// Human-readable name for this hook
    fn name(&self) -> &str;

    /// Whether this hook should be enabled by default
    fn enabled_by_default(&self) -> bool {
        true
    }
}

/// Registry for managing selection hooks
pub struct HookRegistry {
    hooks: Vec<Box<dyn SelectionHook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Register a new selection hook
    pub fn register<H>(&mut self, hook: H)
    where
        H: SelectionHook + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    /// Register a hook unless it is switched off. `enabled` overrides the
    /// hook's own default; returns whether the hook was registered.
    pub fn register_if_enabled<H>(&mut self, hook: H, enabled: Option<bool>) -> bool
    where
        H: SelectionHook + 'static,
    {
        if !enabled.unwrap_or_else(|| hook.enabled_by_default()) {
            log::debug!("Hook '{}' is disabled", hook.name());
            return false;
        }
        self.register(hook);
        true
    }

    /// Run every registered hook. A failing hook is logged and skipped.
    pub fn execute_change_hooks(&self, context: &ChangeContext, selection: &Selection) {
        for hook in &self.hooks {
            if let Err(e) = hook.on_selection_changed(context, selection) {
                log::warn!("Hook '{}' failed: {:#}", hook.name(), e);
            }
        }
    }

    /// List all registered hooks
    pub fn list_hooks(&self) -> Vec<&str> {
        self.hooks.iter().map(|h| h.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Recorder {
        seen: Arc<Mutex<Vec<Selection>>>,
    }

    impl SelectionHook for Recorder {
        fn on_selection_changed(&self, _context: &ChangeContext, selection: &Selection) -> Result<()> {
            self.seen.lock().unwrap().push(*selection);
            Ok(())
        }

        fn name(&self) -> &str {
            "Recorder"
        }
    }

    struct Failing;

    impl SelectionHook for Failing {
        fn on_selection_changed(&self, _context: &ChangeContext, _selection: &Selection) -> Result<()> {
            anyhow::bail!("always fails")
        }

        fn name(&self) -> &str {
            "Failing"
        }
    }

    #[test]
    fn failing_hook_does_not_stop_the_rest() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut registry = HookRegistry::new();
        registry.register(Failing);
        registry.register(Recorder { seen: seen.clone() });

        let clicked = CalendarDate::new(2020, 0, 5).unwrap();
        let context = ChangeContext {
            clicked,
            mode: SelectionMode::Single,
            previous: Selection::Empty,
        };
        registry.execute_change_hooks(&context, &Selection::Single(clicked));

        assert_eq!(*seen.lock().unwrap(), vec![Selection::Single(clicked)]);
        assert_eq!(registry.list_hooks(), vec!["Failing", "Recorder"]);
    }

    struct OptIn;

    impl SelectionHook for OptIn {
        fn on_selection_changed(&self, _context: &ChangeContext, _selection: &Selection) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "OptIn"
        }

        fn enabled_by_default(&self) -> bool {
            false
        }
    }

    #[test]
    fn hook_defaults_apply_unless_overridden() {
        let mut registry = HookRegistry::new();
        assert!(!registry.register_if_enabled(OptIn, None));
        assert!(registry.is_empty());

        assert!(registry.register_if_enabled(OptIn, Some(true)));
        assert!(!registry.register_if_enabled(Failing, Some(false)));
        assert!(registry.register_if_enabled(Failing, None));
        assert_eq!(registry.list_hooks(), vec!["OptIn", "Failing"]);
    }
}
