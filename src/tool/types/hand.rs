use crate::cursor::{CursorKind, CursorSink};
use super::super::trait_def::Tool;

/// Pans the canvas
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandTool;

impl HandTool {
    pub const NAME: &'static str = "Hand";
    pub const CURSOR: CursorKind = CursorKind::Hand;
}

impl Tool for HandTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn apply_cursor(&self, sink: &mut dyn CursorSink) {
        sink.set_cursor(Self::CURSOR.into());
    }
}
