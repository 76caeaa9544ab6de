use serde::{Deserialize, Serialize};

use crate::error::{MemeError, Result};

/// Width and height of a surface or bitmap, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self {
            width: width as f64,
            height: height as f64,
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Axis-aligned rectangle in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering a whole surface of the given size.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Scaled size and top-left placement of an image letterboxed into a canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FitRect {
    pub width: f64,
    pub height: f64,
    pub start_x: f64,
    pub start_y: f64,
}

impl FitRect {
    pub fn right(&self) -> f64 {
        self.start_x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.start_y + self.height
    }

    /// Round to whole pixels for raster drawing.
    ///
    /// Width and height never round below one pixel.
    pub fn to_pixels(&self) -> PixelPlacement {
        PixelPlacement {
            x: self.start_x.round() as i64,
            y: self.start_y.round() as i64,
            width: (self.width.round() as u32).max(1),
            height: (self.height.round() as u32).max(1),
        }
    }
}

/// Integer placement of a bitmap on a raster surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelPlacement {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

/// Compute the largest aspect-preserving rectangle for an image inside a
/// canvas, centered along the axis that is not filled.
///
/// Images narrower than the canvas (relative to its own aspect ratio) fill the
/// canvas height and are centered horizontally; all others fill the width and
/// are centered vertically. On a square canvas the threshold is an aspect
/// ratio of exactly 1, and a ratio equal to the threshold fills the width.
pub fn fit(canvas: Size, image: Size) -> Result<FitRect> {
    if !canvas.is_valid() || !image.is_valid() {
        return Err(MemeError::InvalidDimensions {
            canvas_width: canvas.width,
            canvas_height: canvas.height,
            image_width: image.width,
            image_height: image.height,
        });
    }

    let aspect_ratio = image.aspect_ratio();

    let rect = if aspect_ratio < canvas.aspect_ratio() {
        let width = canvas.height * aspect_ratio;
        FitRect {
            width,
            height: canvas.height,
            start_x: (canvas.width - width) / 2.0,
            start_y: 0.0,
        }
    } else {
        let height = canvas.width / aspect_ratio;
        FitRect {
            width: canvas.width,
            height,
            start_x: 0.0,
            start_y: (canvas.height - height) / 2.0,
        }
    };

    tracing::debug!(
        canvas_w = canvas.width,
        canvas_h = canvas.height,
        image_w = image.width,
        image_h = image.height,
        ?rect,
        "Computed image fit"
    );

    Ok(rect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_canvas_uses_unit_threshold() {
        let canvas = Size::new(400.0, 400.0);
        let tall = fit(canvas, Size::new(99.0, 100.0)).unwrap();
        assert_eq!(tall.height, 400.0);
        assert_eq!(tall.start_y, 0.0);

        let square = fit(canvas, Size::new(100.0, 100.0)).unwrap();
        assert_eq!(square.width, 400.0);
        assert_eq!(square.height, 400.0);
        assert_eq!(square.start_x, 0.0);
        assert_eq!(square.start_y, 0.0);
    }

    #[test]
    fn pixel_placement_never_collapses() {
        let rect = FitRect {
            width: 0.2,
            height: 400.0,
            start_x: 199.9,
            start_y: 0.0,
        };
        let px = rect.to_pixels();
        assert_eq!(px.width, 1);
        assert_eq!(px.x, 200);
    }
}
