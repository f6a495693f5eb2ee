use std::sync::Arc;

use crate::cursor::{Cursor, CursorImage, CursorSink};
use crate::error::ToolResult;
use super::super::brush_cursor::{BrushCursor, BrushShape, BrushSize};
use super::super::trait_def::{Brush, Tool};

/// Defines a sized tool whose cursor outlines its footprint.
/// Only the name and the outline shape differ between brushes.
macro_rules! brush_tool {
    ($(#[$meta:meta])* $tool:ident, $name:literal, $shape:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $tool {
            size: BrushSize,
            cursor: BrushCursor,
        }

        impl Default for $tool {
            fn default() -> Self {
                Self {
                    size: BrushSize::default(),
                    cursor: BrushCursor::new($shape),
                }
            }
        }

        impl $tool {
            pub const NAME: &'static str = $name;

            pub fn with_size(size: u32) -> ToolResult<Self> {
                let mut tool = Self::default();
                tool.set_size(size)?;
                Ok(tool)
            }

            pub fn shape(&self) -> BrushShape {
                self.cursor.shape()
            }
        }

        impl Tool for $tool {
            fn name(&self) -> &str {
                Self::NAME
            }

            fn apply_cursor(&self, sink: &mut dyn CursorSink) {
                sink.set_cursor(Cursor::Image(self.cursor_image()));
            }
        }

        impl Brush for $tool {
            fn size(&self) -> u32 {
                self.size.get()
            }

            fn set_size(&mut self, size: u32) -> ToolResult<()> {
                self.size = BrushSize::new(size)?;
                Ok(())
            }

            fn cursor_image(&self) -> Arc<CursorImage> {
                self.cursor.get(self.size)
            }
        }

        impl PartialEq for $tool {
            fn eq(&self, other: &Self) -> bool {
                // The cursor cache is derived state
                self.size == other.size
            }
        }
    };
}

brush_tool!(
    /// Round brush for freehand drawing
    BrushTool,
    "Brush",
    BrushShape::Round
);

brush_tool!(
    /// Paints with the background colour; square footprint
    EraserTool,
    "Eraser",
    BrushShape::Square
);

brush_tool!(
    /// Calligraphy-style marker with a slanted nib
    MarkerTool,
    "Marker",
    BrushShape::Slanted
);
