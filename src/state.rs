use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::speech::SpeechSynthesizer;

/// Shared application state, managed by the Tauri builder.
///
/// The host event loop serializes handler execution, so the mutexes here are
/// only ever contended by the occasional background speak task.
pub struct AppState {
    pub settings: Mutex<Settings>,
    pub speech: Mutex<Option<Box<dyn SpeechSynthesizer>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            settings: Mutex::new(Settings::default()),
            speech: Mutex::new(None),
        }
    }
}

/// The persisted preferences. Flat on purpose: one record, four fields.
///
/// Every field carries a serde default so a partial stored record (first run,
/// or a record written by an older build) always deserializes to a complete
/// value. Fields we don't know about are kept in `extra` and written back
/// untouched on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Platform voice name, or "default" to let the platform pick.
    #[serde(default = "default_sentinel")]
    pub voice: String,
    /// Reading speed multiplier, 1.0 = normal. Slider range 0.1-3.0.
    #[serde(default = "default_scale")]
    pub speed: f32,
    /// Voice pitch multiplier, 1.0 = normal. Slider range 0.1-2.0.
    #[serde(default = "default_scale")]
    pub pitch: f32,
    /// Locale tag ("en-US"), or "default" to let the platform pick.
    #[serde(default = "default_sentinel")]
    pub language: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            voice: default_sentinel(),
            speed: default_scale(),
            pitch: default_scale(),
            language: default_sentinel(),
            extra: serde_json::Map::new(),
        }
    }
}

fn default_sentinel() -> String {
    "default".to_string()
}

fn default_scale() -> f32 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_yields_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.voice, "default");
        assert_eq!(settings.speed, 1.0);
        assert_eq!(settings.pitch, 1.0);
        assert_eq!(settings.language, "default");
    }

    #[test]
    fn partial_record_is_merged_over_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"pitch": 1.5, "language": "de-DE"}"#).unwrap();
        assert_eq!(settings.pitch, 1.5);
        assert_eq!(settings.language, "de-DE");
        assert_eq!(settings.voice, "default");
        assert_eq!(settings.speed, 1.0);
    }

    #[test]
    fn save_load_round_trip_is_identity() {
        let settings = Settings {
            voice: "Samantha".to_string(),
            speed: 0.8,
            pitch: 1.2,
            language: "en-US".to_string(),
            extra: serde_json::Map::new(),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let reloaded: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, settings);
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let stored = r#"{"voice": "Daniel", "theme": "dark"}"#;
        let settings: Settings = serde_json::from_str(stored).unwrap();
        assert_eq!(settings.voice, "Daniel");
        assert_eq!(
            settings.extra.get("theme"),
            Some(&serde_json::Value::String("dark".to_string()))
        );

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["theme"], "dark");
    }

    #[test]
    fn single_field_edit_leaves_the_rest_untouched() {
        let mut settings = Settings::default();
        settings.pitch = 0.5;

        let json = serde_json::to_string(&settings).unwrap();
        let persisted: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(persisted.pitch, 0.5);
        assert_eq!(persisted.voice, "default");
        assert_eq!(persisted.speed, 1.0);
        assert_eq!(persisted.language, "default");
    }
}
