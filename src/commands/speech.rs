use anyhow::Result;
use tauri::{AppHandle, Manager};

use crate::platform;
use crate::speech::{self, VoiceInfo};
use crate::state::AppState;

/// Tauri command: read the current text selection aloud.
#[tauri::command]
pub fn read_selected_text(app_handle: AppHandle) -> Result<(), String> {
    do_read_selected_text(&app_handle).map_err(|e| e.to_string())
}

/// Tauri command: read caller-provided text aloud.
#[tauri::command]
pub fn read_text(app_handle: AppHandle, text: String) -> Result<(), String> {
    do_read_text(&app_handle, text).map_err(|e| e.to_string())
}

/// Tauri command: stop any in-progress or queued playback.
#[tauri::command]
pub fn stop_reading(app_handle: AppHandle) -> Result<(), String> {
    let state = app_handle.state::<AppState>();
    let mut guard = state.speech.lock().unwrap();
    match guard.as_mut() {
        Some(synth) => synth.stop().map_err(|e| e.to_string()),
        None => Ok(()),
    }
}

/// Tauri command: enumerate the platform voices, in platform order.
#[tauri::command]
pub fn get_voices(app_handle: AppHandle) -> Result<Vec<VoiceInfo>, String> {
    let state = app_handle.state::<AppState>();
    let mut guard = state.speech.lock().unwrap();
    match guard.as_mut() {
        Some(synth) => synth.voices().map_err(|e| e.to_string()),
        None => Ok(Vec::new()),
    }
}

/// Internal: grab the selection and hand it off. Shared by the command, the
/// global shortcut, and the tray menu item (via the action registry).
pub fn do_read_selected_text(app_handle: &AppHandle) -> Result<()> {
    let selector = platform::get_text_selector();
    let text = selector.get_selected_text()?.unwrap_or_default();
    do_read_text(app_handle, text)
}

/// Internal: submit text for playback off the event loop. Fire-and-forget:
/// nothing tracks the utterance once it is handed to the platform.
pub fn do_read_text(app_handle: &AppHandle, text: String) -> Result<()> {
    if text.trim().is_empty() {
        // Silent no-op, not an error.
        return Ok(());
    }

    let app_handle = app_handle.clone();
    tauri::async_runtime::spawn_blocking(move || {
        let state = app_handle.state::<AppState>();
        let settings = state.settings.lock().unwrap().clone();
        let mut guard = state.speech.lock().unwrap();
        match guard.as_mut() {
            Some(synth) => {
                if let Err(e) = speech::read_aloud(&text, &settings, synth.as_mut()) {
                    tracing::error!("Failed to read selection: {}", e);
                }
            }
            None => tracing::warn!("Speech service unavailable, dropping read request"),
        }
    });
    Ok(())
}
