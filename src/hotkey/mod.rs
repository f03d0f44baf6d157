use anyhow::Result;
use tauri::{AppHandle, Manager};
use tauri_plugin_global_shortcut::{GlobalShortcutExt, ShortcutState};

use crate::actions;

/// Default trigger for the read action.
pub const READ_SHORTCUT: &str = "Ctrl+L";

/// Register the global read shortcut. Fires on key press only; the release
/// event is ignored.
pub fn register_read_shortcut(app_handle: &AppHandle, shortcut: &str) -> Result<()> {
    app_handle
        .global_shortcut()
        .on_shortcut(shortcut, |app, _shortcut, event| {
            if event.state() != ShortcutState::Pressed {
                return;
            }
            let registry = app.state::<actions::ActionRegistry>();
            if !registry.invoke(app, actions::READ_SELECTED_TEXT) {
                tracing::error!("Read action missing from registry");
            }
        })
        .map_err(|e| anyhow::anyhow!("failed to register shortcut '{}': {}", shortcut, e))?;

    tracing::info!("Registered read shortcut: {}", shortcut);
    Ok(())
}

/// Human-readable label for a shortcut string, for the tray menu.
pub fn shortcut_display_label(shortcut: &str) -> String {
    shortcut
        .split('+')
        .map(|part| match part {
            "CmdOrCtrl" => {
                if cfg!(target_os = "macos") {
                    "⌘"
                } else {
                    "Ctrl"
                }
            }
            other => other,
        })
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_shortcut_labels_pass_through() {
        assert_eq!(shortcut_display_label("Ctrl+L"), "Ctrl+L");
        assert_eq!(shortcut_display_label("Alt+Space"), "Alt+Space");
    }
}
