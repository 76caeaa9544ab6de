pub mod font;
pub mod raster;

use serde::{Deserialize, Serialize};

use crate::geometry::{FitRect, Rect, Size};

pub use raster::RasterCanvas;

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const BLACK: Color = Color([0, 0, 0, 255]);
    pub const WHITE: Color = Color([255, 255, 255, 255]);
    pub const TRANSPARENT: Color = Color([0, 0, 0, 0]);

    pub fn alpha(self) -> u8 {
        self.0[3]
    }
}

/// How caption text is painted: outlined in `stroke`, filled with `fill`,
/// centered on the anchor x coordinate with its baseline at the anchor y.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: u32,
    /// Text wider than this is scaled down to fit.
    pub max_width: Option<f32>,
}

/// Anything drawable whose pixel dimensions are known.
pub trait Bitmap {
    fn size(&self) -> Size;
}

impl Bitmap for image::RgbaImage {
    fn size(&self) -> Size {
        Size::from_pixels(self.width(), self.height())
    }
}

/// A bitmap known only by its dimensions.
impl Bitmap for Size {
    fn size(&self) -> Size {
        *self
    }
}

/// Fixed-size 2-D drawing surface.
pub trait Canvas {
    type Image: Bitmap;

    fn size(&self) -> Size;

    /// Reset a region to fully transparent.
    fn clear_rect(&mut self, rect: Rect);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw `image` scaled to the placement rectangle.
    fn draw_image(&mut self, image: &Self::Image, placement: &FitRect);

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle);

    fn clear(&mut self) {
        let size = self.size();
        self.clear_rect(Rect::from_size(size));
    }
}

/// One call made against a [`RecordingCanvas`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    ClearRect(Rect),
    FillRect { rect: Rect, color: Color },
    DrawImage { source: Size, placement: FitRect },
    DrawText { text: String, x: f64, y: f64, style: TextStyle },
}

/// Canvas that records draw calls instead of painting pixels.
#[derive(Clone, Debug)]
pub struct RecordingCanvas {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::from_pixels(width, height),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Canvas for RecordingCanvas {
    type Image = Size;

    fn size(&self) -> Size {
        self.size
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::ClearRect(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_image(&mut self, image: &Size, placement: &FitRect) {
        self.commands.push(DrawCommand::DrawImage {
            source: *image,
            placement: *placement,
        });
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        self.commands.push(DrawCommand::DrawText {
            text: text.to_string(),
            x,
            y,
            style: style.clone(),
        });
    }
}
