use tracing::{debug, info, warn};

use crate::canvas::{Bitmap, Canvas};
use crate::config::MemeConfig;
use crate::controls::{ControlKind, ControlSet};
use crate::error::{MemeError, Result};
use crate::geometry::{fit, FitRect, Rect};
use crate::speech::{SpeechService, Utterance, Voice};
use crate::volume::{Volume, VolumeTier};

/// Caption text as last drawn onto the canvas.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Captions {
    pub top: String,
    pub bottom: String,
}

impl Captions {
    /// Text spoken by read-aloud: both captions, top first.
    pub fn spoken_text(&self) -> String {
        format!("{} {}", self.top, self.bottom).trim().to_string()
    }
}

/// Outcome of a read-aloud request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadAloud {
    Started,
    /// An utterance was already playing; the request was discarded.
    Dropped,
}

/// Per-session state behind the caption editor.
///
/// The host event loop calls the `on_*` methods; each runs to completion
/// synchronously.
pub struct MemeController<C: Canvas, S: SpeechService> {
    canvas: C,
    speech: S,
    config: MemeConfig,
    controls: ControlSet,
    voices: Vec<Voice>,
    selected_voice: Option<usize>,
    volume: Volume,
    captions: Captions,
    placement: Option<FitRect>,
}

impl<C: Canvas, S: SpeechService> MemeController<C, S> {
    pub fn new(canvas: C, speech: S, config: MemeConfig) -> Self {
        let volume = config.speech.volume;
        Self {
            canvas,
            speech,
            config,
            controls: ControlSet::new(),
            voices: Vec::new(),
            selected_voice: None,
            volume,
            captions: Captions::default(),
            placement: None,
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn speech(&self) -> &S {
        &self.speech
    }

    pub fn speech_mut(&mut self) -> &mut S {
        &mut self.speech
    }

    pub fn config(&self) -> &MemeConfig {
        &self.config
    }

    pub fn controls(&self) -> &ControlSet {
        &self.controls
    }

    pub fn is_enabled(&self, kind: ControlKind) -> bool {
        self.controls.is_enabled(kind)
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    pub fn selected_voice(&self) -> Option<&Voice> {
        self.selected_voice.and_then(|i| self.voices.get(i))
    }

    pub fn selected_voice_index(&self) -> Option<usize> {
        self.selected_voice
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    pub fn captions(&self) -> &Captions {
        &self.captions
    }

    /// Placement of the current image, if one is on the canvas.
    pub fn placement(&self) -> Option<FitRect> {
        self.placement
    }

    /// Re-enumerate voices from the speech service.
    ///
    /// The previously selected index is kept (0 when nothing was selected).
    /// A failed enumeration leaves no voices selected. Returns the picker labels.
    pub fn on_voices_changed(&mut self) -> Result<Vec<String>> {
        self.voices = match self.speech.voices() {
            Ok(voices) => voices,
            Err(e) => {
                self.voices.clear();
                self.selected_voice = None;
                return Err(e);
            }
        };
        self.selected_voice = if self.voices.is_empty() {
            None
        } else {
            Some(self.selected_voice.unwrap_or(0).min(self.voices.len() - 1))
        };
        info!(count = self.voices.len(), "Voice list updated");
        Ok(self.voices.iter().map(Voice::label).collect())
    }

    pub fn select_voice(&mut self, index: usize) -> Result<()> {
        if index >= self.voices.len() {
            return Err(MemeError::VoiceIndexOutOfRange {
                index,
                total: self.voices.len(),
            });
        }
        self.selected_voice = Some(index);
        Ok(())
    }

    /// Paint a freshly decoded image letterboxed onto the canvas and reset the
    /// controls to their loaded baseline.
    pub fn on_image_loaded(&mut self, image: &C::Image) -> Result<FitRect> {
        let canvas_size = self.canvas.size();
        let placement = fit(canvas_size, image.size())?;

        self.canvas.clear();
        self.canvas
            .fill_rect(Rect::from_size(canvas_size), self.config.canvas.background);
        self.canvas.draw_image(image, &placement);

        self.placement = Some(placement);
        self.captions = Captions::default();
        self.controls.set_loaded_baseline();

        info!(
            width = placement.width,
            height = placement.height,
            x = placement.start_x,
            y = placement.start_y,
            "Image loaded"
        );
        Ok(placement)
    }

    /// Draw both captions and swap the enabled controls.
    pub fn on_generate(&mut self, top: &str, bottom: &str) -> Result<()> {
        self.require(ControlKind::Generate)?;

        let size = self.canvas.size();
        let caption = &self.config.caption;
        let style = caption.text_style(size.width);
        let center_x = size.width / 2.0;
        let top_y = caption.top_baseline as f64;
        let bottom_y = size.height - caption.bottom_baseline as f64;

        self.canvas.draw_text(top, center_x, top_y, &style);
        self.canvas.draw_text(bottom, center_x, bottom_y, &style);
        debug!(top, bottom, "Captions drawn");

        self.captions = Captions {
            top: top.to_string(),
            bottom: bottom.to_string(),
        };
        self.controls.toggle_all();
        Ok(())
    }

    /// Wipe the canvas, stop any speech, and swap the enabled controls.
    pub fn on_clear(&mut self) -> Result<()> {
        self.require(ControlKind::Clear)?;

        self.canvas.clear();
        if self.speech.is_speaking() {
            self.speech.cancel();
            debug!("Cancelled speech on clear");
        }
        self.placement = None;
        self.captions = Captions::default();
        self.controls.toggle_all();
        info!("Canvas cleared");
        Ok(())
    }

    /// Speak the current captions unless an utterance is already playing.
    pub fn on_read_aloud(&mut self) -> Result<ReadAloud> {
        self.require(ControlKind::ReadAloud)?;

        if self.speech.is_speaking() {
            warn!("Read-aloud requested while speaking, request dropped");
            return Ok(ReadAloud::Dropped);
        }

        let utterance = Utterance {
            text: self.captions.spoken_text(),
            voice: self.selected_voice().cloned(),
            pitch: self.config.speech.pitch,
            rate: self.config.speech.rate,
            volume: self.volume.fraction(),
        };
        self.speech.speak(utterance)?;
        Ok(ReadAloud::Started)
    }

    /// Record the slider position and return the icon tier to show.
    pub fn on_volume_changed(&mut self, value: u32) -> Result<VolumeTier> {
        self.volume = Volume::new(value)?;
        let tier = self.volume.tier();
        debug!(volume = value, %tier, "Volume changed");
        Ok(tier)
    }

    fn require(&self, kind: ControlKind) -> Result<()> {
        if self.controls.is_enabled(kind) {
            Ok(())
        } else {
            Err(MemeError::ControlDisabled(kind))
        }
    }
}
