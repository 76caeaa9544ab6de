use std::path::PathBuf;

use meme_core::volume::{Volume, VolumeTier};

/// Form and log state of the editor window.
pub struct UIState {
    pub file_path: Option<PathBuf>,
    pub file_name: Option<String>,
    pub top_text: String,
    pub bottom_text: String,

    /// Voice picker labels, in service order.
    pub voice_labels: Vec<String>,
    pub selected_voice: usize,

    /// Volume slider position and the icon tier it maps to.
    pub volume: u32,
    pub volume_tier: VolumeTier,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn new(volume: Volume) -> Self {
        Self {
            file_path: None,
            file_name: None,
            top_text: String::new(),
            bottom_text: String::new(),
            voice_labels: Vec::new(),
            selected_voice: 0,
            volume: volume.value() as u32,
            volume_tier: volume.tier(),
            log_messages: Vec::new(),
        }
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    /// Empty the caption fields.
    pub fn reset_form(&mut self) {
        self.top_text.clear();
        self.bottom_text.clear();
    }
}
