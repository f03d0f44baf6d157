pub mod system;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::state::Settings;

/// Sentinel meaning "let the platform pick" for both voice and language.
pub const DEFAULT_SENTINEL: &str = "default";

/// Serializable projection of a platform voice, as reported by enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceInfo {
    pub id: String,
    pub name: String,
    pub language: String,
}

/// One unit of text plus voice parameters, built per trigger invocation and
/// dropped once handed to the synthesizer. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    pub pitch: f32,
    pub rate: f32,
    pub voice: Option<VoiceInfo>,
    pub language: Option<String>,
}

/// Seam over the platform speech service. The real implementation wraps the
/// system synthesizer; tests substitute a recorder.
pub trait SpeechSynthesizer: Send {
    /// Enumerate the currently available platform voices, in platform order.
    fn voices(&mut self) -> Result<Vec<VoiceInfo>>;

    /// Submit a request for asynchronous playback. Fire-and-forget: the
    /// platform owns the utterance lifecycle from here on.
    fn speak(&mut self, request: &SpeechRequest) -> Result<()>;

    /// Stop any in-progress or queued playback.
    fn stop(&mut self) -> Result<()>;
}

/// Build a request from trigger text plus the current settings.
///
/// A stored voice other than "default" is resolved by exact name match
/// against `voices`; a miss leaves the request voiceless, which falls back to
/// the platform default and is not an error. The language tag is carried only
/// when it is not the sentinel.
pub fn build_request(text: &str, settings: &Settings, voices: &[VoiceInfo]) -> SpeechRequest {
    let voice = if settings.voice != DEFAULT_SENTINEL {
        voices.iter().find(|v| v.name == settings.voice).cloned()
    } else {
        None
    };
    let language = if settings.language != DEFAULT_SENTINEL {
        Some(settings.language.clone())
    } else {
        None
    };

    SpeechRequest {
        text: text.to_string(),
        pitch: settings.pitch,
        rate: settings.speed,
        voice,
        language,
    }
}

/// The read action: hand `text` to the synthesizer with the current settings
/// applied. An empty (whitespace-only) selection is a silent no-op, not an
/// error. Voice enumeration failure degrades to the platform default voice.
pub fn read_aloud(
    text: &str,
    settings: &Settings,
    synth: &mut dyn SpeechSynthesizer,
) -> Result<()> {
    if text.trim().is_empty() {
        tracing::debug!("Empty selection, nothing to read");
        return Ok(());
    }

    let voices = match synth.voices() {
        Ok(voices) => voices,
        Err(e) => {
            tracing::warn!("Voice enumeration failed: {}. Using platform default.", e);
            Vec::new()
        }
    };

    let request = build_request(text, settings, &voices);
    tracing::info!(
        "Reading {} chars (voice: {}, language: {})",
        request.text.len(),
        request.voice.as_ref().map_or(DEFAULT_SENTINEL, |v| v.name.as_str()),
        request.language.as_deref().unwrap_or(DEFAULT_SENTINEL),
    );
    synth.speak(&request)
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    /// Records every submitted request instead of speaking.
    #[derive(Default)]
    pub struct MockSynthesizer {
        pub available: Vec<VoiceInfo>,
        pub spoken: Vec<SpeechRequest>,
        pub stopped: usize,
    }

    impl MockSynthesizer {
        pub fn with_voices(names: &[&str]) -> Self {
            Self {
                available: names
                    .iter()
                    .map(|n| VoiceInfo {
                        id: format!("mock.{n}"),
                        name: n.to_string(),
                        language: "en-US".to_string(),
                    })
                    .collect(),
                ..Default::default()
            }
        }
    }

    impl SpeechSynthesizer for MockSynthesizer {
        fn voices(&mut self) -> Result<Vec<VoiceInfo>> {
            Ok(self.available.clone())
        }

        fn speak(&mut self, request: &SpeechRequest) -> Result<()> {
            self.spoken.push(request.clone());
            Ok(())
        }

        fn stop(&mut self) -> Result<()> {
            self.stopped += 1;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockSynthesizer;
    use super::*;

    fn settings(voice: &str, speed: f32, pitch: f32, language: &str) -> Settings {
        Settings {
            voice: voice.to_string(),
            speed,
            pitch,
            language: language.to_string(),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn empty_selection_submits_nothing() {
        let mut synth = MockSynthesizer::with_voices(&["Samantha"]);
        read_aloud("", &Settings::default(), &mut synth).unwrap();
        read_aloud("   \n\t", &Settings::default(), &mut synth).unwrap();
        assert!(synth.spoken.is_empty());
    }

    #[test]
    fn selection_with_default_voice_and_explicit_language() {
        let mut synth = MockSynthesizer::with_voices(&["Samantha", "Daniel"]);
        let settings = settings("default", 0.8, 1.2, "en-US");

        read_aloud("Hello world", &settings, &mut synth).unwrap();

        assert_eq!(synth.spoken.len(), 1);
        let request = &synth.spoken[0];
        assert_eq!(request.text, "Hello world");
        assert_eq!(request.pitch, 1.2);
        assert_eq!(request.rate, 0.8);
        assert_eq!(request.voice, None);
        assert_eq!(request.language.as_deref(), Some("en-US"));
    }

    #[test]
    fn stored_voice_is_resolved_by_exact_name() {
        let mut synth = MockSynthesizer::with_voices(&["Samantha", "Daniel"]);
        let settings = settings("Daniel", 1.0, 1.0, "default");

        read_aloud("text", &settings, &mut synth).unwrap();

        let request = &synth.spoken[0];
        assert_eq!(request.voice.as_ref().unwrap().name, "Daniel");
        assert_eq!(request.language, None);
    }

    #[test]
    fn unknown_voice_name_degrades_to_platform_default() {
        let mut synth = MockSynthesizer::with_voices(&["Samantha"]);
        let settings = settings("Nonexistent Voice", 1.0, 1.0, "default");

        read_aloud("text", &settings, &mut synth).unwrap();

        assert_eq!(synth.spoken.len(), 1);
        assert_eq!(synth.spoken[0].voice, None);
    }

    #[test]
    fn name_match_is_exact_not_fuzzy() {
        let voices = MockSynthesizer::with_voices(&["Samantha"]).available;
        let settings = settings("samantha", 1.0, 1.0, "default");
        let request = build_request("x", &settings, &voices);
        assert_eq!(request.voice, None);
    }

    #[test]
    fn overlapping_invocations_each_submit() {
        let mut synth = MockSynthesizer::with_voices(&[]);
        let settings = Settings::default();
        read_aloud("one", &settings, &mut synth).unwrap();
        read_aloud("two", &settings, &mut synth).unwrap();
        assert_eq!(synth.spoken.len(), 2);
    }
}
