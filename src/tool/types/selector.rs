use crate::cursor::{CursorKind, CursorSink};
use super::super::trait_def::Tool;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorTool;

impl SelectorTool {
    pub const NAME: &'static str = "Selector";
    pub const CURSOR: CursorKind = CursorKind::Move;
}

impl Tool for SelectorTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn apply_cursor(&self, sink: &mut dyn CursorSink) {
        sink.set_cursor(Self::CURSOR.into());
    }
}
