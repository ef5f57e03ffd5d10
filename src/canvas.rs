//! CPU raster surface the draw pass paints into.
//!
//! The canvas is a tightly packed RGBA8 buffer, top row first. Shapes with
//! alpha below 255 are blended source-over onto what is already there. The
//! presenter uploads [`Canvas::as_bytes`] once per frame.

use glam::Vec2;

use crate::font;
use crate::ui::Rect;

/// RGBA color, 8 bits per channel.
pub type Rgba = [u8; 4];

/// Opaque color from RGB.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
    [r, g, b, 255]
}

/// RGBA8 pixel buffer.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Canvas {
    /// Black, opaque canvas. Zero dimensions are bumped to 1.
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            pixels: vec![rgb(0, 0, 0); (width * height) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Canvas size as a vector.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Resize, discarding contents.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    /// Pixel data, row-major.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixel data as raw bytes for texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Fill the whole canvas.
    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Fill an axis-aligned rectangle (clipped to the canvas).
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let x0 = rect.x.round() as i32;
        let y0 = rect.y.round() as i32;
        let x1 = (rect.x + rect.w).round() as i32;
        let y1 = (rect.y + rect.h).round() as i32;

        for y in y0.max(0)..y1.min(self.height as i32) {
            for x in x0.max(0)..x1.min(self.width as i32) {
                self.blend(x, y, color);
            }
        }
    }

    /// Horizontal line of one pixel height.
    pub fn hline(&mut self, y: i32, x0: i32, x1: i32, color: Rgba) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        for x in x0.max(0)..x1.min(self.width as i32) {
            self.blend(x, y, color);
        }
    }

    /// Vertical line of one pixel width.
    pub fn vline(&mut self, x: i32, y0: i32, y1: i32, color: Rgba) {
        if x < 0 || x >= self.width as i32 {
            return;
        }
        for y in y0.max(0)..y1.min(self.height as i32) {
            self.blend(x, y, color);
        }
    }

    /// Filled disc. Pixels whose centers fall inside the radius are painted.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if radius <= 0.0 || color[3] == 0 {
            return;
        }
        let r2 = radius * radius;
        let x0 = (center.x - radius).floor() as i32;
        let x1 = (center.x + radius).ceil() as i32;
        let y0 = (center.y - radius).floor() as i32;
        let y1 = (center.y + radius).ceil() as i32;

        for y in y0.max(0)..=y1.min(self.height as i32 - 1) {
            let dy = y as f32 + 0.5 - center.y;
            for x in x0.max(0)..=x1.min(self.width as i32 - 1) {
                let dx = x as f32 + 0.5 - center.x;
                if dx * dx + dy * dy <= r2 {
                    self.blend(x, y, color);
                }
            }
        }
    }

    /// Draw text with the 5x7 bitmap font. `pos` is the top-left corner.
    pub fn text(&mut self, pos: Vec2, text: &str, scale: i32, color: Rgba) {
        let scale = scale.max(1);
        let mut x = pos.x.round() as i32;
        let y = pos.y.round() as i32;

        for ch in text.chars() {
            let rows = font::glyph(ch);
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..font::GLYPH_W {
                    if (bits >> (font::GLYPH_W - 1 - col)) & 1 == 0 {
                        continue;
                    }
                    for sy in 0..scale {
                        for sx in 0..scale {
                            self.blend(x + col * scale + sx, y + row as i32 * scale + sy, color);
                        }
                    }
                }
            }
            x += font::ADVANCE * scale;
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            None
        } else {
            Some(y as usize * self.width as usize + x as usize)
        }
    }

    fn blend(&mut self, x: i32, y: i32, src: Rgba) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        let a = src[3] as u32;
        if a == 255 {
            self.pixels[i] = src;
            return;
        }
        if a == 0 {
            return;
        }
        let dst = &mut self.pixels[i];
        for c in 0..3 {
            dst[c] = ((src[c] as u32 * a + dst[c] as u32 * (255 - a) + 127) / 255) as u8;
        }
        dst[3] = 255;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_opaque_black() {
        let canvas = Canvas::new(4, 3);
        assert_eq!(canvas.pixels().len(), 12);
        assert_eq!(canvas.as_bytes().len(), 48);
        assert_eq!(canvas.pixel(0, 0), Some(rgb(0, 0, 0)));
    }

    #[test]
    fn test_bytes_are_rgba_row_major() {
        let mut canvas = Canvas::new(2, 2);
        canvas.fill_rect(Rect::new(1.0, 1.0, 1.0, 1.0), rgb(10, 20, 30));
        let bytes = canvas.as_bytes();
        assert_eq!(&bytes[12..16], &[10, 20, 30, 255]);
        assert_eq!(&bytes[..4], &[0, 0, 0, 255]);
    }

    #[test]
    fn test_zero_size_is_bumped() {
        let canvas = Canvas::new(0, 0);
        assert_eq!((canvas.width(), canvas.height()), (1, 1));
    }

    #[test]
    fn test_fill_rect_is_clipped() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill_rect(Rect::new(-5.0, 8.0, 8.0, 10.0), rgb(255, 0, 0));
        assert_eq!(canvas.pixel(0, 9), Some(rgb(255, 0, 0)));
        assert_eq!(canvas.pixel(2, 9), Some(rgb(255, 0, 0)));
        assert_eq!(canvas.pixel(3, 9), Some(rgb(0, 0, 0)));
        assert_eq!(canvas.pixel(0, 7), Some(rgb(0, 0, 0)));
    }

    #[test]
    fn test_half_alpha_blends() {
        let mut canvas = Canvas::new(2, 2);
        canvas.clear(rgb(0, 0, 0));
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), [255, 255, 255, 128]);
        let p = canvas.pixel(0, 0).unwrap();
        assert_eq!(p[0], 128);
        assert_eq!(p[3], 255);
    }

    #[test]
    fn test_transparent_circle_is_skipped() {
        let mut canvas = Canvas::new(8, 8);
        canvas.fill_circle(Vec2::new(4.0, 4.0), 3.0, [255, 255, 255, 0]);
        assert!(canvas.pixels().iter().all(|p| *p == rgb(0, 0, 0)));
    }

    #[test]
    fn test_circle_covers_center_not_corners() {
        let mut canvas = Canvas::new(9, 9);
        canvas.fill_circle(Vec2::new(4.5, 4.5), 3.0, rgb(0, 200, 255));
        assert_eq!(canvas.pixel(4, 4), Some(rgb(0, 200, 255)));
        assert_eq!(canvas.pixel(0, 0), Some(rgb(0, 0, 0)));
    }

    #[test]
    fn test_text_paints_pixels() {
        let mut canvas = Canvas::new(20, 10);
        canvas.text(Vec2::new(1.0, 1.0), "I", 1, rgb(255, 255, 255));
        // Top bar of 'I' spans the full glyph width.
        for x in 1..6 {
            assert_eq!(canvas.pixel(x, 1), Some(rgb(255, 255, 255)));
        }
        assert_eq!(canvas.pixel(1, 2), Some(rgb(0, 0, 0)));
    }
}
