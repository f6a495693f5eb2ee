use crate::cursor::{CursorKind, CursorSink};
use super::super::trait_def::Tool;

/// Hard-edged freehand tool, shown with a crosshair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PencilTool;

impl PencilTool {
    pub const NAME: &'static str = "Pencil";
    pub const CURSOR: CursorKind = CursorKind::Cross;
}

impl Tool for PencilTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn apply_cursor(&self, sink: &mut dyn CursorSink) {
        sink.set_cursor(Self::CURSOR.into());
    }
}
