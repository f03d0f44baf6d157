use tauri::{AppHandle, Manager};

use crate::panel::{self, PanelModel};
use crate::state::AppState;

/// Tauri command: build the settings panel from scratch. The webview calls
/// this every time the panel is shown, so both the voice list and the
/// control values are current at display time.
#[tauri::command]
pub fn get_settings_panel(app_handle: AppHandle) -> Result<PanelModel, String> {
    let state = app_handle.state::<AppState>();

    let voices = {
        let mut guard = state.speech.lock().unwrap();
        match guard.as_mut() {
            Some(synth) => synth.voices().unwrap_or_else(|e| {
                tracing::warn!("Voice enumeration failed for panel: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        }
    };

    let settings = state.settings.lock().unwrap().clone();
    Ok(panel::build_panel(&settings, &voices))
}
