use tauri::{AppHandle, Manager};

use crate::persistence;
use crate::state::{AppState, Settings};

#[tauri::command]
pub fn get_settings(app_handle: AppHandle) -> Result<Settings, String> {
    let state = app_handle.state::<AppState>();
    let settings = state.settings.lock().unwrap().clone();
    Ok(settings)
}

/// Each panel control maps to one of the `set_*` commands below: mutate the
/// one field, then persist immediately. No debouncing — a slider drag issues
/// one call per discrete step.
#[tauri::command]
pub fn set_language(app_handle: AppHandle, value: String) -> Result<(), String> {
    {
        let state = app_handle.state::<AppState>();
        state.settings.lock().unwrap().language = value;
    }
    persistence::save_settings(&app_handle).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn set_voice(app_handle: AppHandle, value: String) -> Result<(), String> {
    {
        let state = app_handle.state::<AppState>();
        state.settings.lock().unwrap().voice = value;
    }
    persistence::save_settings(&app_handle).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn set_pitch(app_handle: AppHandle, value: f32) -> Result<(), String> {
    {
        let state = app_handle.state::<AppState>();
        state.settings.lock().unwrap().pitch = value;
    }
    persistence::save_settings(&app_handle).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn set_speed(app_handle: AppHandle, value: f32) -> Result<(), String> {
    {
        let state = app_handle.state::<AppState>();
        state.settings.lock().unwrap().speed = value;
    }
    persistence::save_settings(&app_handle).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
