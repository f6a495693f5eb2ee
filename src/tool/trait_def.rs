use std::sync::Arc;

use crate::cursor::{CursorImage, CursorSink};
use crate::error::ToolResult;

/// A selectable drawing mode.
///
/// The host shows tools by [`name`](Tool::name) and calls
/// [`apply_cursor`](Tool::apply_cursor) whenever the tool becomes active or
/// the pointer enters the canvas again.
pub trait Tool: Send + Sync {
    /// Display name, non-empty and fixed for the lifetime of the tool
    fn name(&self) -> &str;

    /// Set this tool's cursor on the surface. Must not touch anything else,
    /// and applying twice must look the same as applying once.
    fn apply_cursor(&self, sink: &mut dyn CursorSink);
}

/// Tools whose cursor follows an adjustable footprint size
pub trait Brush: Tool {
    fn size(&self) -> u32;

    fn set_size(&mut self, size: u32) -> ToolResult<()>;

    /// Cursor image for the current size
    fn cursor_image(&self) -> Arc<CursorImage>;
}
