use anyhow::{Context, Result};
use tts::Tts;

use super::{SpeechRequest, SpeechSynthesizer, VoiceInfo};
use crate::panel::{PITCH_RANGE, SPEED_RANGE};

/// The platform speech service (AVSpeechSynthesizer on macOS, SAPI on
/// Windows, speech-dispatcher on Linux), wrapped behind the synthesizer seam.
pub struct SystemSynthesizer {
    tts: Tts,
    /// Last enumeration, kept so a request's resolved voice can be mapped
    /// back to the backend's voice handle when speaking.
    platform_voices: Vec<tts::Voice>,
    /// The backend's voice at startup, restored when a request carries none.
    default_voice: Option<tts::Voice>,
}

impl SystemSynthesizer {
    pub fn new() -> Result<Self> {
        let tts = Tts::default().context("failed to initialize platform speech service")?;
        let default_voice = tts.voice().ok().flatten();
        Ok(Self {
            tts,
            platform_voices: Vec::new(),
            default_voice,
        })
    }

    fn apply_voice(&mut self, request: &SpeechRequest) -> Result<()> {
        if let Some(wanted) = &request.voice {
            if let Some(voice) = self.platform_voices.iter().find(|v| v.id() == wanted.id) {
                let voice = voice.clone();
                self.tts.set_voice(&voice)?;
                return Ok(());
            }
            // Enumeration changed since the request was built; fall through.
        }

        if request.voice.is_none() {
            if let Some(tag) = &request.language {
                // No explicit voice, but a language preference: pick the first
                // platform voice for that locale, mirroring an utterance-level
                // language tag.
                if let Some(voice) = self
                    .platform_voices
                    .iter()
                    .find(|v| v.language().as_str().eq_ignore_ascii_case(tag))
                {
                    let voice = voice.clone();
                    self.tts.set_voice(&voice)?;
                    return Ok(());
                }
                tracing::debug!("No platform voice for language '{}'", tag);
            }
        }

        if let Some(default) = self.default_voice.clone() {
            self.tts.set_voice(&default)?;
        }
        Ok(())
    }
}

impl SpeechSynthesizer for SystemSynthesizer {
    fn voices(&mut self) -> Result<Vec<VoiceInfo>> {
        self.platform_voices = self
            .tts
            .voices()
            .context("failed to enumerate platform voices")?;
        Ok(self
            .platform_voices
            .iter()
            .map(|v| VoiceInfo {
                id: v.id(),
                name: v.name(),
                language: v.language().as_str().to_string(),
            })
            .collect())
    }

    fn speak(&mut self, request: &SpeechRequest) -> Result<()> {
        let features = self.tts.supported_features();

        if features.pitch {
            let pitch = scale_to_backend(
                request.pitch,
                PITCH_RANGE,
                self.tts.min_pitch(),
                self.tts.normal_pitch(),
                self.tts.max_pitch(),
            );
            self.tts.set_pitch(pitch)?;
        }
        if features.rate {
            let rate = scale_to_backend(
                request.rate,
                SPEED_RANGE,
                self.tts.min_rate(),
                self.tts.normal_rate(),
                self.tts.max_rate(),
            );
            self.tts.set_rate(rate)?;
        }
        if features.voice {
            self.apply_voice(request)?;
        }

        // interrupt = false: overlapping requests queue at the platform level.
        self.tts
            .speak(&request.text, false)
            .context("speech submission failed")?;
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.tts.stop().context("failed to stop playback")?;
        Ok(())
    }
}

/// Map a 1.0-centered UI multiplier onto the backend's own scale: the UI
/// midpoint lands on the backend's normal value and the UI extremes land on
/// the backend's extremes, linearly in between.
fn scale_to_backend(value: f32, ui_range: (f32, f32), min: f32, normal: f32, max: f32) -> f32 {
    let (ui_min, ui_max) = ui_range;
    let value = value.clamp(ui_min, ui_max);
    if value <= 1.0 {
        let t = (value - ui_min) / (1.0 - ui_min);
        min + t * (normal - min)
    } else {
        let t = (value - 1.0) / (ui_max - 1.0);
        normal + t * (max - normal)
    }
}
