use std::collections::HashMap;
use std::sync::Arc;

use image::{Rgba, RgbaImage};
use parking_lot::Mutex;

use crate::cursor::CursorImage;
use crate::error::{ToolError, ToolResult};

pub const MIN_BRUSH_SIZE: u32 = 1;
pub const MAX_BRUSH_SIZE: u32 = 40;
pub const DEFAULT_BRUSH_SIZE: u32 = 1;

/// Extra pixels around the brush footprint so both outlines fit
const PADDING: u32 = 4;

const DARK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const LIGHT: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Outline drawn around the brush footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrushShape {
    Round,
    Square,
    Slanted,
}

/// Brush footprint in pixels, always within `MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BrushSize(u32);

impl BrushSize {
    pub fn new(size: u32) -> ToolResult<Self> {
        if (MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).contains(&size) {
            Ok(Self(size))
        } else {
            Err(ToolError::BrushSizeOutOfRange {
                size,
                min: MIN_BRUSH_SIZE,
                max: MAX_BRUSH_SIZE,
            })
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self(DEFAULT_BRUSH_SIZE)
    }
}

impl TryFrom<u32> for BrushSize {
    type Error = ToolError;

    fn try_from(size: u32) -> ToolResult<Self> {
        Self::new(size)
    }
}

/// Rasterize the cursor for a brush of `size` pixels.
///
/// The result is `size + 4` pixels square with the hotspot at its centre.
/// A dark outline sits one pixel inside a light one so the cursor stays
/// visible on any background.
pub fn render_brush_cursor(shape: BrushShape, size: BrushSize) -> CursorImage {
    let size = size.get();
    let side = size + PADDING;
    let mut pixels = RgbaImage::new(side, side);
    let extent = side as f32;

    match shape {
        BrushShape::Round => {
            outline_circle(&mut pixels, 1.0, extent - 3.0, DARK);
            outline_circle(&mut pixels, 0.0, extent - 1.0, LIGHT);
        }
        BrushShape::Square => {
            outline_polygon(&mut pixels, &square(1.0, extent - 3.0), DARK);
            outline_polygon(&mut pixels, &square(0.0, extent - 1.0), LIGHT);
        }
        BrushShape::Slanted => {
            let s = size as f32;
            let inner = [
                (1.0, 1.0),
                (s / 2.0 + 1.0, 1.0),
                (s - 1.0, s - 1.0),
                (s / 2.0 + 1.0, s - 1.0),
            ];
            let outer = [(0.0, 0.0), (s / 2.0, 0.0), (s, s), (s / 2.0, s)];
            outline_polygon(&mut pixels, &inner, DARK);
            outline_polygon(&mut pixels, &outer, LIGHT);
        }
    }

    CursorImage::new(pixels, [side / 2, side / 2])
}

fn square(origin: f32, extent: f32) -> [(f32, f32); 4] {
    [
        (origin, origin),
        (origin + extent, origin),
        (origin + extent, origin + extent),
        (origin, origin + extent),
    ]
}

fn plot(pixels: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < pixels.width() && (y as u32) < pixels.height() {
        pixels.put_pixel(x as u32, y as u32, color);
    }
}

fn line(pixels: &mut RgbaImage, from: (f32, f32), to: (f32, f32), color: Rgba<u8>) {
    let (mut x0, mut y0) = (from.0.round() as i64, from.1.round() as i64);
    let (x1, y1) = (to.0.round() as i64, to.1.round() as i64);

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        plot(pixels, x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

fn outline_polygon(pixels: &mut RgbaImage, vertices: &[(f32, f32)], color: Rgba<u8>) {
    for (i, &from) in vertices.iter().enumerate() {
        let to = vertices[(i + 1) % vertices.len()];
        line(pixels, from, to, color);
    }
}

/// Circle inscribed in the square at (`origin`, `origin`) with side `diameter`
fn outline_circle(pixels: &mut RgbaImage, origin: f32, diameter: f32, color: Rgba<u8>) {
    let radius = diameter / 2.0;
    let centre = origin + radius;
    // Dense enough that consecutive samples never skip a pixel
    let steps = ((std::f32::consts::TAU * radius * 4.0).ceil() as usize).max(8);

    for step in 0..steps {
        let t = step as f32 / steps as f32 * std::f32::consts::TAU;
        let x = (centre + radius * t.cos()).round() as i64;
        let y = (centre + radius * t.sin()).round() as i64;
        plot(pixels, x, y, color);
    }
}

/// Per-size cache of generated brush cursors.
pub struct BrushCursor {
    shape: BrushShape,
    images: Mutex<HashMap<u32, Arc<CursorImage>>>,
}

impl BrushCursor {
    pub fn new(shape: BrushShape) -> Self {
        Self {
            shape,
            images: Mutex::new(HashMap::new()),
        }
    }

    pub fn shape(&self) -> BrushShape {
        self.shape
    }

    pub fn get(&self, size: BrushSize) -> Arc<CursorImage> {
        self.images
            .lock()
            .entry(size.get())
            .or_insert_with(|| {
                log::debug!("Rendering {:?} brush cursor for size {}", self.shape, size.get());
                Arc::new(render_brush_cursor(self.shape, size))
            })
            .clone()
    }

    pub fn cached_sizes(&self) -> usize {
        self.images.lock().len()
    }
}

impl Clone for BrushCursor {
    fn clone(&self) -> Self {
        // Clones regenerate their images on demand
        Self::new(self.shape)
    }
}

impl std::fmt::Debug for BrushCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrushCursor")
            .field("shape", &self.shape)
            .field("images", &format!("<{} cached>", self.cached_sizes()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque(image: &CursorImage, x: u32, y: u32) -> bool {
        image.pixels().get_pixel(x, y)[3] == 255
    }

    fn size(px: u32) -> BrushSize {
        BrushSize::new(px).unwrap()
    }

    #[test]
    fn test_raster_is_padded_and_centred() {
        for shape in [BrushShape::Round, BrushShape::Square, BrushShape::Slanted] {
            let image = render_brush_cursor(shape, size(10));
            assert_eq!(image.size(), [14, 14]);
            assert_eq!(image.hotspot(), [7, 7]);
        }
    }

    #[test]
    fn test_square_outlines() {
        let image = render_brush_cursor(BrushShape::Square, size(6));
        // Light outer border along the edge of the raster
        assert_eq!(*image.pixels().get_pixel(0, 0), LIGHT);
        assert_eq!(*image.pixels().get_pixel(9, 9), LIGHT);
        // Dark border one pixel in
        assert_eq!(*image.pixels().get_pixel(1, 1), DARK);
        assert_eq!(*image.pixels().get_pixel(8, 5), DARK);
        // Interior is left transparent
        assert!(!opaque(&image, 5, 5));
    }

    #[test]
    fn test_round_corners_are_transparent() {
        let image = render_brush_cursor(BrushShape::Round, size(20));
        let [w, h] = image.size();
        assert!(!opaque(&image, 0, 0));
        assert!(!opaque(&image, w - 1, h - 1));
        assert!(!opaque(&image, w / 2, h / 2));
        assert!((0..w).any(|x| opaque(&image, x, 0)));
    }

    #[test]
    fn test_slanted_outline_is_drawn() {
        let image = render_brush_cursor(BrushShape::Slanted, size(12));
        assert_eq!(*image.pixels().get_pixel(0, 0), LIGHT);
        assert_eq!(*image.pixels().get_pixel(12, 12), LIGHT);
        assert!(!opaque(&image, 0, 12));
    }

    #[test]
    fn test_smallest_brush_renders() {
        let image = render_brush_cursor(BrushShape::Round, BrushSize::default());
        assert_eq!(image.size(), [5, 5]);
        assert!(image.pixels().pixels().any(|p| p[3] == 255));
    }

    #[test]
    fn test_size_validation() {
        assert_eq!(BrushSize::new(1).map(BrushSize::get), Ok(1));
        assert_eq!(BrushSize::new(40).map(BrushSize::get), Ok(40));
        assert_eq!(
            BrushSize::new(0),
            Err(ToolError::BrushSizeOutOfRange { size: 0, min: 1, max: 40 })
        );
        assert!(BrushSize::try_from(41).is_err());
    }

    #[test]
    fn test_huge_sizes_never_reach_the_rasterizer() {
        for px in [MAX_BRUSH_SIZE + 1, 100_000, u32::MAX] {
            assert_eq!(
                BrushSize::new(px),
                Err(ToolError::BrushSizeOutOfRange { size: px, min: MIN_BRUSH_SIZE, max: MAX_BRUSH_SIZE })
            );
        }

        let cursor = BrushCursor::new(BrushShape::Square);
        let largest = cursor.get(size(MAX_BRUSH_SIZE));
        assert_eq!(largest.size(), [MAX_BRUSH_SIZE + 4, MAX_BRUSH_SIZE + 4]);
    }

    #[test]
    fn test_cache_reuses_images() {
        let cursor = BrushCursor::new(BrushShape::Round);
        let first = cursor.get(size(8));
        let second = cursor.get(size(8));
        assert!(Arc::ptr_eq(&first, &second));

        cursor.get(size(9));
        assert_eq!(cursor.cached_sizes(), 2);
    }
}
