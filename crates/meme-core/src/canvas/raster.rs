use std::path::Path;

use ab_glyph::{point, Font, FontArc, GlyphId, PxScale, ScaleFont};
use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};

use super::{Canvas, Color, TextStyle};
use crate::error::Result;
use crate::geometry::{FitRect, Rect, Size};

/// Canvas backed by an in-memory RGBA buffer.
pub struct RasterCanvas {
    pixels: RgbaImage,
    font: Option<FontArc>,
}

impl RasterCanvas {
    /// Canvas without a font. Text draw calls are skipped with a warning.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
            font: None,
        }
    }

    pub fn with_font(width: u32, height: u32, font: FontArc) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
            font: Some(font),
        }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.pixels.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    /// Pixel bounds of `rect` clipped to the buffer, as (x0, y0, x1, y1).
    fn clip(&self, rect: Rect) -> (u32, u32, u32, u32) {
        let w = self.pixels.width() as f64;
        let h = self.pixels.height() as f64;
        let x0 = rect.x.round().clamp(0.0, w) as u32;
        let y0 = rect.y.round().clamp(0.0, h) as u32;
        let x1 = rect.right().round().clamp(0.0, w) as u32;
        let y1 = rect.bottom().round().clamp(0.0, h) as u32;
        (x0, y0, x1, y1)
    }

    fn paint_glyphs(
        &mut self,
        font: &FontArc,
        scale: PxScale,
        origin_x: f32,
        baseline_y: f32,
        text: &str,
        color: Color,
    ) {
        let scaled_font = font.as_scaled(scale);
        let mut caret = point(origin_x, baseline_y);
        let mut previous: Option<GlyphId> = None;
        for ch in text.chars() {
            let glyph_id = scaled_font.glyph_id(ch);
            if let Some(prev) = previous {
                caret.x += scaled_font.kern(prev, glyph_id);
            }
            let glyph = glyph_id.with_scale_and_position(scale, caret);
            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                let left = bounds.min.x.floor() as i64;
                let top = bounds.min.y.floor() as i64;
                outlined.draw(|gx, gy, coverage| {
                    blend_pixel(
                        &mut self.pixels,
                        left + gx as i64,
                        top + gy as i64,
                        color,
                        coverage,
                    );
                });
            }
            caret.x += scaled_font.h_advance(glyph_id);
            previous = Some(glyph_id);
        }
    }
}

impl Canvas for RasterCanvas {
    type Image = RgbaImage;

    fn size(&self) -> Size {
        Size::from_pixels(self.pixels.width(), self.pixels.height())
    }

    fn clear_rect(&mut self, rect: Rect) {
        let (x0, y0, x1, y1) = self.clip(rect);
        for y in y0..y1 {
            for x in x0..x1 {
                self.pixels.put_pixel(x, y, Rgba(Color::TRANSPARENT.0));
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (x0, y0, x1, y1) = self.clip(rect);
        for y in y0..y1 {
            for x in x0..x1 {
                blend_pixel(&mut self.pixels, x as i64, y as i64, color, 1.0);
            }
        }
    }

    fn draw_image(&mut self, image: &RgbaImage, placement: &FitRect) {
        let px = placement.to_pixels();
        let resized = imageops::resize(image, px.width, px.height, FilterType::Triangle);
        imageops::overlay(&mut self.pixels, &resized, px.x, px.y);
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        let Some(font) = self.font.clone() else {
            tracing::warn!(text, "No caption font loaded, skipping text");
            return;
        };
        if text.is_empty() {
            return;
        }

        let mut scale = PxScale::from(style.font_size);
        let mut width = text_width(&font, scale, text);
        if let Some(max) = style.max_width {
            if width > max && width > 0.0 {
                scale = PxScale::from(style.font_size * max / width);
                width = text_width(&font, scale, text);
            }
        }

        let origin_x = x as f32 - width / 2.0;
        let baseline_y = y as f32;

        let sw = style.stroke_width as i32;
        if sw > 0 && style.stroke.alpha() > 0 {
            for dy in -sw..=sw {
                for dx in -sw..=sw {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    self.paint_glyphs(
                        &font,
                        scale,
                        origin_x + dx as f32,
                        baseline_y + dy as f32,
                        text,
                        style.stroke,
                    );
                }
            }
        }
        self.paint_glyphs(&font, scale, origin_x, baseline_y, text, style.fill);
    }
}

/// Horizontal advance of `text` at `scale`, including kerning.
pub fn text_width(font: &FontArc, scale: PxScale, text: &str) -> f32 {
    let scaled_font = font.as_scaled(scale);
    let mut width = 0.0;
    let mut previous: Option<GlyphId> = None;
    for ch in text.chars() {
        let glyph_id = scaled_font.glyph_id(ch);
        if let Some(prev) = previous {
            width += scaled_font.kern(prev, glyph_id);
        }
        width += scaled_font.h_advance(glyph_id);
        previous = Some(glyph_id);
    }
    width
}

/// Source-over blend of `color` at `coverage` onto one pixel. Out-of-bounds
/// coordinates are ignored.
fn blend_pixel(img: &mut RgbaImage, x: i64, y: i64, color: Color, coverage: f32) {
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    let src_a = coverage.clamp(0.0, 1.0) * color.alpha() as f32 / 255.0;
    if src_a <= 0.0 {
        return;
    }
    let dst = img.get_pixel_mut(x as u32, y as u32);
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    for c in 0..3 {
        let s = color.0[c] as f32;
        let d = dst[c] as f32;
        let v = (s * src_a + d * dst_a * (1.0 - src_a)) / out_a;
        dst[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round() as u8;
}
