//! Named action registry.
//!
//! Both triggers reach the read action the same way: the tray menu item and
//! the global shortcut look the handler up by identifier instead of calling
//! into the command module directly. One handler, two entry points.

use std::collections::HashMap;

use tauri::AppHandle;

pub const READ_SELECTED_TEXT: &str = "read-selected-text";

pub type ActionHandler = fn(&AppHandle);

pub struct ActionRegistry {
    handlers: HashMap<&'static str, ActionHandler>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registry with the built-in actions wired up.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(READ_SELECTED_TEXT, |app| {
            if let Err(e) = crate::commands::speech::do_read_selected_text(app) {
                tracing::error!("Read action failed: {}", e);
            }
        });
        registry
    }

    pub fn register(&mut self, id: &'static str, handler: ActionHandler) {
        tracing::debug!("Registered action '{}'", id);
        self.handlers.insert(id, handler);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.handlers.contains_key(id)
    }

    /// Invoke an action by identifier. Returns false when the id is unknown,
    /// so callers can fall through to their own handling.
    pub fn invoke(&self, app: &AppHandle, id: &str) -> bool {
        match self.handlers.get(id) {
            Some(handler) => {
                handler(app);
                true
            }
            None => false,
        }
    }
}
