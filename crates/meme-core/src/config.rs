use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::canvas::{Color, TextStyle};
use crate::consts::*;
use crate::error::{MemeError, Result};
use crate::volume::{Volume, VolumeTier};

/// Session configuration: drawing surface, caption style, speech, icons.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MemeConfig {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub caption: CaptionConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub icons: IconConfig,
}

impl MemeConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| MemeError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Letterbox color painted behind every loaded image.
    pub background: Color,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            background: Color::BLACK,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionConfig {
    /// Font family name or path to a .ttf/.otf file.
    pub font: String,
    pub font_size: f32,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: u32,
    /// Top caption baseline, from the top edge.
    pub top_baseline: f32,
    /// Bottom caption baseline, from the bottom edge.
    pub bottom_baseline: f32,
    /// Free space kept on the left and right of each caption.
    pub margin: f32,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            font: DEFAULT_CAPTION_FONT.to_string(),
            font_size: DEFAULT_CAPTION_FONT_SIZE,
            fill: Color::WHITE,
            stroke: Color::BLACK,
            stroke_width: DEFAULT_CAPTION_STROKE_WIDTH,
            top_baseline: DEFAULT_TOP_BASELINE,
            bottom_baseline: DEFAULT_BOTTOM_BASELINE,
            margin: DEFAULT_CAPTION_MARGIN,
        }
    }
}

impl CaptionConfig {
    pub fn text_style(&self, canvas_width: f64) -> TextStyle {
        let max_width = canvas_width as f32 - 2.0 * self.margin;
        TextStyle {
            font_size: self.font_size,
            fill: self.fill,
            stroke: self.stroke,
            stroke_width: self.stroke_width,
            max_width: (max_width > 0.0).then_some(max_width),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Synthesizer executable.
    pub command: String,
    pub pitch: f32,
    pub rate: f32,
    /// Volume slider position at startup.
    pub volume: Volume,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_SPEECH_COMMAND.to_string(),
            pitch: DEFAULT_SPEECH_PITCH,
            rate: DEFAULT_SPEECH_RATE,
            volume: Volume::default(),
        }
    }
}

/// Icon source for each volume tier, indexed by tier number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub volume_levels: [PathBuf; VOLUME_TIER_COUNT],
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            volume_levels: std::array::from_fn(|tier| {
                PathBuf::from(format!("icons/volume-level-{tier}.svg"))
            }),
        }
    }
}

impl IconConfig {
    pub fn for_tier(&self, tier: VolumeTier) -> &Path {
        &self.volume_levels[tier.index()]
    }
}
