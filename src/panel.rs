//! Settings panel model.
//!
//! The webview renders whatever this module hands it; the panel is rebuilt
//! from scratch on every `get_settings_panel` call, so a reopened panel
//! always reflects the latest settings and the latest voice enumeration.

use serde::Serialize;

use crate::languages::SUPPORTED_LANGUAGES;
use crate::speech::{VoiceInfo, DEFAULT_SENTINEL};
use crate::state::Settings;

/// (min, max) for the pitch slider; step is [`SLIDER_STEP`].
pub const PITCH_RANGE: (f32, f32) = (0.1, 2.0);
/// (min, max) for the speed slider.
pub const SPEED_RANGE: (f32, f32) = (0.1, 3.0);
pub const SLIDER_STEP: f32 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectControl {
    pub name: String,
    pub options: Vec<SelectOption>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderControl {
    pub name: String,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub value: f32,
}

/// The four controls, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelModel {
    pub language: SelectControl,
    pub voice: SelectControl,
    pub pitch: SliderControl,
    pub speed: SliderControl,
}

/// Build the panel from the current settings and the current platform voice
/// enumeration. Dropdowns are seeded with "default" first; the language list
/// follows catalog order and the voice list follows platform order, unsorted.
pub fn build_panel(settings: &Settings, voices: &[VoiceInfo]) -> PanelModel {
    let mut language_options = vec![SelectOption::new(DEFAULT_SENTINEL, DEFAULT_SENTINEL)];
    language_options.extend(
        SUPPORTED_LANGUAGES
            .iter()
            .map(|(tag, label)| SelectOption::new(tag, label)),
    );

    let mut voice_options = vec![SelectOption::new(DEFAULT_SENTINEL, DEFAULT_SENTINEL)];
    voice_options.extend(voices.iter().map(|v| SelectOption::new(&v.name, &v.name)));

    PanelModel {
        language: SelectControl {
            name: "Language".to_string(),
            options: language_options,
            value: settings.language.clone(),
        },
        voice: SelectControl {
            name: "Voice".to_string(),
            options: voice_options,
            value: settings.voice.clone(),
        },
        pitch: SliderControl {
            name: "Voice Pitch".to_string(),
            min: PITCH_RANGE.0,
            max: PITCH_RANGE.1,
            step: SLIDER_STEP,
            value: settings.pitch,
        },
        speed: SliderControl {
            name: "Reading Speed".to_string(),
            min: SPEED_RANGE.0,
            max: SPEED_RANGE.1,
            step: SLIDER_STEP,
            value: settings.speed,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voice(name: &str) -> VoiceInfo {
        VoiceInfo {
            id: format!("test.{name}"),
            name: name.to_string(),
            language: "en-US".to_string(),
        }
    }

    #[test]
    fn dropdowns_are_seeded_with_default_first() {
        let panel = build_panel(&Settings::default(), &[voice("Zoe"), voice("Alex")]);
        assert_eq!(panel.language.options[0].value, "default");
        assert_eq!(panel.voice.options[0].value, "default");
    }

    #[test]
    fn language_options_follow_catalog_order() {
        let panel = build_panel(&Settings::default(), &[]);
        assert_eq!(panel.language.options.len(), 1 + SUPPORTED_LANGUAGES.len());
        for (option, (tag, label)) in panel.language.options[1..]
            .iter()
            .zip(SUPPORTED_LANGUAGES)
        {
            assert_eq!(option.value, *tag);
            assert_eq!(option.label, *label);
        }
    }

    #[test]
    fn voice_options_keep_platform_order_unsorted() {
        let panel = build_panel(&Settings::default(), &[voice("Zoe"), voice("Alex")]);
        let names: Vec<&str> = panel.voice.options[1..]
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(names, ["Zoe", "Alex"]);
    }

    #[test]
    fn controls_reflect_current_settings() {
        let settings = Settings {
            voice: "Zoe".to_string(),
            speed: 0.8,
            pitch: 1.2,
            language: "fr-FR".to_string(),
            extra: serde_json::Map::new(),
        };
        let panel = build_panel(&settings, &[voice("Zoe")]);
        assert_eq!(panel.voice.value, "Zoe");
        assert_eq!(panel.language.value, "fr-FR");
        assert_eq!(panel.pitch.value, 1.2);
        assert_eq!(panel.speed.value, 0.8);
    }

    #[test]
    fn slider_limits_match_the_documented_ranges() {
        let panel = build_panel(&Settings::default(), &[]);
        assert_eq!((panel.pitch.min, panel.pitch.max, panel.pitch.step), (0.1, 2.0, 0.1));
        assert_eq!((panel.speed.min, panel.speed.max, panel.speed.step), (0.1, 3.0, 0.1));
    }
}
