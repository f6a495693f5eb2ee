use std::sync::Arc;

use egui::{ColorImage, CursorIcon};
use image::RgbaImage;

/// Built-in cursors every host toolkit is expected to provide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CursorKind {
    #[default]
    Arrow,
    Cross,
    Hand,
    Move,
    Text,
    Wait,
}

impl CursorKind {
    pub fn to_egui(self) -> CursorIcon {
        match self {
            Self::Arrow => CursorIcon::Default,
            Self::Cross => CursorIcon::Crosshair,
            Self::Hand => CursorIcon::Grab,
            Self::Move => CursorIcon::Move,
            Self::Text => CursorIcon::Text,
            Self::Wait => CursorIcon::Wait,
        }
    }
}

/// A custom cursor glyph: an RGBA raster and the pixel that tracks the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorImage {
    pixels: RgbaImage,
    hotspot: [u32; 2],
}

impl CursorImage {
    /// The hotspot is clamped into the raster.
    pub fn new(pixels: RgbaImage, hotspot: [u32; 2]) -> Self {
        let max_x = pixels.width().saturating_sub(1);
        let max_y = pixels.height().saturating_sub(1);
        Self {
            hotspot: [hotspot[0].min(max_x), hotspot[1].min(max_y)],
            pixels,
        }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn size(&self) -> [u32; 2] {
        [self.pixels.width(), self.pixels.height()]
    }

    pub fn hotspot(&self) -> [u32; 2] {
        self.hotspot
    }

    /// Convert to an egui image for uploading as a texture
    pub fn to_color_image(&self) -> ColorImage {
        let [w, h] = self.size();
        ColorImage::from_rgba_unmultiplied([w as usize, h as usize], self.pixels.as_raw())
    }
}

/// What the pointer looks like while over the drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Cursor {
    System(CursorKind),
    Image(Arc<CursorImage>),
}

impl Default for Cursor {
    fn default() -> Self {
        Self::System(CursorKind::Arrow)
    }
}

impl From<CursorKind> for Cursor {
    fn from(kind: CursorKind) -> Self {
        Self::System(kind)
    }
}

/// The one thing a tool is allowed to do to a surface: change its cursor.
pub trait CursorSink {
    fn set_cursor(&mut self, cursor: Cursor);
}

/// Ambient cursor state owned by a drawing surface.
///
/// Hosts keep one of these per surface, let tools write into it, and
/// present it to the toolkit once per frame.
#[derive(Debug, Clone, Default)]
pub struct CursorState {
    current: Cursor,
    writes: u64,
}

impl CursorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Cursor {
        &self.current
    }

    /// Number of times a cursor has been written since creation
    pub fn writes(&self) -> u64 {
        self.writes
    }

    pub fn is_system(&self, kind: CursorKind) -> bool {
        self.current == Cursor::System(kind)
    }
}

impl CursorSink for CursorState {
    fn set_cursor(&mut self, cursor: Cursor) {
        self.writes += 1;
        self.current = cursor;
    }
}
