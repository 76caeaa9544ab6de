/// Default drawing surface width in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 400;

/// Default drawing surface height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 400;

/// Caption font size in pixels.
pub const DEFAULT_CAPTION_FONT_SIZE: f32 = 40.0;

/// Caption font family looked up through the system font database.
pub const DEFAULT_CAPTION_FONT: &str = "Impact";

/// Outline thickness around caption glyphs, in pixels.
pub const DEFAULT_CAPTION_STROKE_WIDTH: u32 = 2;

/// Baseline of the top caption, measured from the top edge.
pub const DEFAULT_TOP_BASELINE: f32 = 50.0;

/// Baseline of the bottom caption, measured from the bottom edge.
pub const DEFAULT_BOTTOM_BASELINE: f32 = 20.0;

/// Horizontal margin kept free on both sides of a caption.
pub const DEFAULT_CAPTION_MARGIN: f32 = 10.0;

/// Speech pitch passed with every utterance (1.0 = voice default).
pub const DEFAULT_SPEECH_PITCH: f32 = 1.0;

/// Speech rate passed with every utterance (1.0 = voice default).
pub const DEFAULT_SPEECH_RATE: f32 = 1.0;

/// Volume slider position on startup.
pub const DEFAULT_VOLUME: u8 = 100;

/// Upper bound of the volume slider.
pub const MAX_VOLUME: u8 = 100;

/// Number of volume icon tiers.
pub const VOLUME_TIER_COUNT: usize = 4;

/// Speech synthesizer executable used by the espeak backend.
pub const DEFAULT_SPEECH_COMMAND: &str = "espeak-ng";

/// espeak words-per-minute corresponding to rate 1.0.
pub const ESPEAK_BASE_WPM: f32 = 175.0;

/// espeak pitch value (0-99) corresponding to pitch 1.0.
pub const ESPEAK_BASE_PITCH: f32 = 50.0;

/// espeak amplitude corresponding to full volume.
pub const ESPEAK_MAX_AMPLITUDE: f32 = 200.0;

/// Suffix appended to the label of the platform default voice.
pub const DEFAULT_VOICE_SUFFIX: &str = " -- DEFAULT";
