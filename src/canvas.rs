// The persistent pixel surface that strokes accumulate on.
// Visual: this is the white drawing area; every brush mark lives here until "Clear".

use crate::error::Error;
use crate::types::{Color, Point};
use image::{ImageBuffer, Rgb, RgbImage};
use std::path::Path;

/// Fixed-size RGB pixel buffer. Pixels are packed 0x00RRGGBB so the same
/// buffer layout can be pushed to the window without conversion.
#[derive(Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    background: Color,
    pixels: Vec<u32>,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            pixels: vec![background.to_u32(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The color "clear" and the eraser paint with.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Raw 0x00RRGGBB pixels, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Color at (x,y), or None when outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| Color::from_u32(self.pixels[idx]))
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Put a pixel if (x,y) is inside bounds; anything outside is dropped.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color.to_u32();
        }
    }

    /// Overwrite every pixel.
    pub fn fill(&mut self, color: Color) {
        let px = color.to_u32();
        for p in &mut self.pixels {
            *p = px;
        }
    }

    /// Clip the square [c-r, c+r] on both axes to the canvas.
    /// Returns None when the box misses the canvas entirely.
    fn clip_box(&self, center: Point, radius: i32) -> Option<(i32, i32, i32, i32)> {
        let x0 = (center.x - radius).max(0);
        let y0 = (center.y - radius).max(0);
        let x1 = (center.x + radius).min(self.width as i32 - 1);
        let y1 = (center.y + radius).min(self.height as i32 - 1);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some((x0, y0, x1, y1))
    }

    /// Filled disk: every pixel with dx²+dy² <= radius². Radius 0 is a single pixel.
    pub fn stamp_disk(&mut self, center: Point, radius: u32, color: Color) {
        let r = radius as i32;
        let Some((x0, y0, x1, y1)) = self.clip_box(center, r) else {
            return;
        };
        let r2 = r * r;
        let px = color.to_u32();
        for y in y0..=y1 {
            let dy = y - center.y;
            let row = y as usize * self.width;
            for x in x0..=x1 {
                let dx = x - center.x;
                if dx * dx + dy * dy <= r2 {
                    self.pixels[row + x as usize] = px;
                }
            }
        }
    }

    /// Filled rectangle with its top-left corner at `top_left`.
    /// Zero extents are widened to one pixel so a mark is always left.
    pub fn stamp_rect(&mut self, top_left: Point, width: u32, height: u32, color: Color) {
        let w = width.max(1) as i32;
        let h = height.max(1) as i32;
        let x0 = top_left.x.max(0);
        let y0 = top_left.y.max(0);
        let x1 = (top_left.x + w).min(self.width as i32);
        let y1 = (top_left.y + h).min(self.height as i32);
        let px = color.to_u32();
        for y in y0..y1 {
            let row = y as usize * self.width;
            for x in x0..x1 {
                self.pixels[row + x as usize] = px;
            }
        }
    }

    /// Source-over composite of a disk with constant `alpha` (0..=255):
    /// result = src*alpha + dst*(1-alpha), per channel.
    /// Visual: a see-through dot; stacking several darkens the area step by step.
    pub fn blend_disk(&mut self, center: Point, radius: u32, color: Color, alpha: u8) {
        if alpha == 0 {
            return;
        }
        let r = radius as i32;
        let Some((x0, y0, x1, y1)) = self.clip_box(center, r) else {
            return;
        };
        let r2 = r * r;
        for y in y0..=y1 {
            let dy = y - center.y;
            let row = y as usize * self.width;
            for x in x0..=x1 {
                let dx = x - center.x;
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                let idx = row + x as usize;
                let dst = Color::from_u32(self.pixels[idx]);
                self.pixels[idx] = blend_over(color, dst, alpha).to_u32();
            }
        }
    }

    /// Copy `src` onto this surface with its top-left at `origin` (clipped).
    /// Used to place the painting inside the window frame.
    pub fn blit(&mut self, src: &Canvas, origin: Point) {
        for sy in 0..src.height {
            let dy = origin.y + sy as i32;
            if dy < 0 || dy >= self.height as i32 {
                continue;
            }
            for sx in 0..src.width {
                let dx = origin.x + sx as i32;
                if dx < 0 || dx >= self.width as i32 {
                    continue;
                }
                self.pixels[dy as usize * self.width + dx as usize] = src.pixels[sy * src.width + sx];
            }
        }
    }

    /// Convert to an `image` RGB buffer (no alpha is persisted).
    pub fn to_rgb_image(&self) -> RgbImage {
        ImageBuffer::from_fn(self.width as u32, self.height as u32, |x, y| {
            let c = Color::from_u32(self.pixels[y as usize * self.width + x as usize]);
            Rgb([c.r, c.g, c.b])
        })
    }

    /// Encode the canvas to `path`; the format follows the file extension (PNG for saves).
    pub fn export(&self, path: &Path) -> Result<(), Error> {
        self.to_rgb_image().save(path).map_err(|source| Error::Export {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read an exported image back into a canvas with the given background.
    pub fn import(path: &Path, background: Color) -> Result<Self, Error> {
        let img = image::open(path)
            .map_err(|source| Error::Import {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgb8();
        let (w, h) = img.dimensions();
        let pixels = img
            .pixels()
            .map(|p| Color::rgb(p[0], p[1], p[2]).to_u32())
            .collect();
        Ok(Self {
            width: w as usize,
            height: h as usize,
            background,
            pixels,
        })
    }
}

/// One channel of source-over: (src*a + dst*(255-a)) / 255, rounded.
#[inline]
fn mix_channel(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((src as u32 * a + dst as u32 * (255 - a) + 127) / 255) as u8
}

#[inline]
fn blend_over(src: Color, dst: Color, alpha: u8) -> Color {
    Color::rgb(
        mix_channel(src.r, dst.r, alpha),
        mix_channel(src.g, dst.g, alpha),
        mix_channel(src.b, dst.b, alpha),
    )
}

#[cfg(test)]
mod tests {
    use super::Canvas;
    use crate::types::{Color, Point};

    fn painted(canvas: &Canvas) -> Vec<(i32, i32)> {
        let bg = canvas.background().to_u32();
        let w = canvas.width();
        canvas
            .pixels()
            .iter()
            .enumerate()
            .filter(|(_, p)| **p != bg)
            .map(|(i, _)| ((i % w) as i32, (i / w) as i32))
            .collect()
    }

    #[test]
    fn fill_overwrites_every_pixel() {
        let mut canvas = Canvas::new(8, 4, Color::WHITE);
        canvas.stamp_disk(Point::new(3, 2), 2, Color::BLACK);
        canvas.fill(Color::rgb(1, 2, 3));
        assert!(canvas.pixels().iter().all(|p| *p == 0x0001_0203));
    }

    #[test]
    fn zero_radius_disk_is_single_pixel() {
        let mut canvas = Canvas::new(10, 10, Color::WHITE);
        canvas.stamp_disk(Point::new(4, 5), 0, Color::BLACK);
        assert_eq!(painted(&canvas), vec![(4, 5)]);
    }

    #[test]
    fn disk_stays_within_radius() {
        let mut canvas = Canvas::new(40, 40, Color::WHITE);
        let c = Point::new(20, 20);
        canvas.stamp_disk(c, 5, Color::BLACK);
        let marks = painted(&canvas);
        assert!(!marks.is_empty());
        for (x, y) in marks {
            assert!(Point::new(x, y).distance(c) <= 5.0);
        }
        // Axis extremes are included.
        assert_eq!(canvas.pixel(25, 20), Some(Color::BLACK));
        assert_eq!(canvas.pixel(20, 15), Some(Color::BLACK));
    }

    #[test]
    fn stamps_near_edges_are_clipped() {
        let mut canvas = Canvas::new(10, 10, Color::WHITE);
        canvas.stamp_disk(Point::new(-3, -3), 5, Color::BLACK);
        canvas.stamp_disk(Point::new(500, 500), 5, Color::BLACK);
        canvas.stamp_rect(Point::new(8, 8), 10, 10, Color::BLACK);
        canvas.blend_disk(Point::new(10, 0), 4, Color::BLACK, 100);
        assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(canvas.pixel(9, 9), Some(Color::BLACK));
        assert_eq!(canvas.pixel(10, 10), None);
    }

    #[test]
    fn rect_covers_exact_extent() {
        let mut canvas = Canvas::new(10, 10, Color::WHITE);
        canvas.stamp_rect(Point::new(2, 3), 3, 2, Color::BLACK);
        let marks = painted(&canvas);
        assert_eq!(marks.len(), 6);
        assert!(marks.iter().all(|&(x, y)| (2..5).contains(&x) && (3..5).contains(&y)));
    }

    #[test]
    fn blend_is_source_over_and_accumulates() {
        let mut canvas = Canvas::new(5, 5, Color::WHITE);
        canvas.blend_disk(Point::new(2, 2), 0, Color::BLACK, 100);
        assert_eq!(canvas.pixel(2, 2), Some(Color::rgb(155, 155, 155)));
        canvas.blend_disk(Point::new(2, 2), 0, Color::BLACK, 100);
        assert_eq!(canvas.pixel(2, 2), Some(Color::rgb(94, 94, 94)));
        // Neighbours untouched.
        assert_eq!(canvas.pixel(1, 2), Some(Color::WHITE));
    }

    #[test]
    fn blit_places_source_at_origin() {
        let mut screen = Canvas::new(6, 6, Color::BLACK);
        let src = Canvas::new(2, 2, Color::WHITE);
        screen.blit(&src, Point::new(5, 5));
        assert_eq!(screen.pixel(5, 5), Some(Color::WHITE));
        assert_eq!(screen.pixel(4, 5), Some(Color::BLACK));
    }

    #[test]
    fn export_then_import_round_trips_pixels() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("canvas.png");
        let mut canvas = Canvas::new(12, 7, Color::WHITE);
        canvas.stamp_rect(Point::new(1, 1), 3, 3, Color::rgb(196, 43, 28));
        canvas.export(&path).expect("export");

        let back = Canvas::import(&path, Color::WHITE).expect("import");
        assert_eq!(back.width(), 12);
        assert_eq!(back.height(), 7);
        assert_eq!(back.pixels(), canvas.pixels());
    }

    #[test]
    fn export_into_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope").join("canvas.png");
        let canvas = Canvas::new(2, 2, Color::WHITE);
        assert!(canvas.export(&path).is_err());
    }
}
