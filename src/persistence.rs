use anyhow::{Context, Result};
use tauri::{AppHandle, Manager};
use tauri_plugin_store::StoreExt;

use crate::state::Settings;

const STORE_FILE: &str = "settings.json";
const SETTINGS_KEY: &str = "settings";

/// Load the persisted settings, merging them over the defaults.
///
/// Never fails: an absent store, an absent key, or an unreadable value all
/// degrade to `Settings::default()`. Missing fields inside a stored record
/// are filled by the per-field serde defaults.
pub fn load_settings(app_handle: &AppHandle) -> Settings {
    let store = match app_handle.store(STORE_FILE) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("Failed to open settings store: {}. Using defaults.", e);
            return Settings::default();
        }
    };

    match store.get(SETTINGS_KEY) {
        Some(value) => match serde_json::from_value::<Settings>(value) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to deserialize stored settings: {}. Using defaults.", e);
                Settings::default()
            }
        },
        None => {
            tracing::info!("No stored settings found. Using defaults.");
            Settings::default()
        }
    }
}

/// Persist the current in-memory settings.
///
/// Called after every individual field edit. A failure propagates to the
/// invoking command's error channel; there is no retry.
pub fn save_settings(app_handle: &AppHandle) -> Result<()> {
    let state = app_handle.state::<crate::state::AppState>();
    let settings = state.settings.lock().unwrap().clone();

    let store = app_handle
        .store(STORE_FILE)
        .context("failed to open settings store for saving")?;

    let value = serde_json::to_value(&settings).context("failed to serialize settings")?;
    store.set(SETTINGS_KEY, value);
    store
        .save()
        .context("failed to save settings store to disk")?;
    Ok(())
}
