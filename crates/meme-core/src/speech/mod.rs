pub mod espeak;

use crate::consts::DEFAULT_VOICE_SUFFIX;
use crate::error::Result;

pub use espeak::EspeakSpeech;

/// A synthesis voice offered by the speech service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    pub lang: String,
    /// Whether the service marks this voice as its default.
    pub default: bool,
}

impl Voice {
    /// Label shown in voice pickers, e.g. `"English (en-US) -- DEFAULT"`.
    pub fn label(&self) -> String {
        let mut label = format!("{} ({})", self.name, self.lang);
        if self.default {
            label.push_str(DEFAULT_VOICE_SUFFIX);
        }
        label
    }
}

/// One unit of text submitted for playback.
#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub voice: Option<Voice>,
    pub pitch: f32,
    pub rate: f32,
    /// Playback volume in [0.0, 1.0].
    pub volume: f32,
}

/// Platform speech synthesis.
///
/// `speak` starts playback and returns immediately; callers poll
/// `is_speaking` to learn whether an utterance is still in flight.
pub trait SpeechService {
    fn voices(&mut self) -> Result<Vec<Voice>>;

    fn is_speaking(&mut self) -> bool;

    fn speak(&mut self, utterance: Utterance) -> Result<()>;

    fn cancel(&mut self);
}
