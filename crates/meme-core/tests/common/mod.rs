#![allow(dead_code)]

use meme_core::canvas::RecordingCanvas;
use meme_core::config::MemeConfig;
use meme_core::controller::MemeController;
use meme_core::error::{MemeError, Result};
use meme_core::speech::{SpeechService, Utterance, Voice};

/// In-memory speech service. `speaking` stays set until the test clears it.
#[derive(Default)]
pub struct FakeSpeech {
    pub available: Vec<Voice>,
    /// When set, voice enumeration fails as if the synthesizer were missing.
    pub broken: bool,
    pub speaking: bool,
    pub spoken: Vec<Utterance>,
    pub cancelled: usize,
}

impl FakeSpeech {
    pub fn with_voices(voices: Vec<Voice>) -> Self {
        Self {
            available: voices,
            ..Self::default()
        }
    }
}

impl SpeechService for FakeSpeech {
    fn voices(&mut self) -> Result<Vec<Voice>> {
        if self.broken {
            return Err(MemeError::Speech("synthesizer not installed".into()));
        }
        Ok(self.available.clone())
    }

    fn is_speaking(&mut self) -> bool {
        self.speaking
    }

    fn speak(&mut self, utterance: Utterance) -> Result<()> {
        self.spoken.push(utterance);
        self.speaking = true;
        Ok(())
    }

    fn cancel(&mut self) {
        self.cancelled += 1;
        self.speaking = false;
    }
}

pub fn voice(name: &str, lang: &str, default: bool) -> Voice {
    Voice {
        name: name.to_string(),
        lang: lang.to_string(),
        default,
    }
}

pub fn sample_voices() -> Vec<Voice> {
    vec![
        voice("Alex", "en-US", true),
        voice("Amelie", "fr-CA", false),
        voice("Anna", "de-DE", false),
    ]
}

/// Controller on a 400x300 recording canvas.
pub fn recording_controller(speech: FakeSpeech) -> MemeController<RecordingCanvas, FakeSpeech> {
    let mut config = MemeConfig::default();
    config.canvas.width = 400;
    config.canvas.height = 300;
    MemeController::new(RecordingCanvas::new(400, 300), speech, config)
}
