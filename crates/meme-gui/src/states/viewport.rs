/// Viewport display state.
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Canvas pixels changed since the texture was uploaded.
    pub dirty: bool,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            texture: None,
            dirty: true,
        }
    }
}
