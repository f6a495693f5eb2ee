pub mod brush;
pub mod hand;
pub mod pencil;
pub mod selector;

pub use brush::{BrushTool, EraserTool, MarkerTool};
pub use hand::HandTool;
pub use pencil::PencilTool;
pub use selector::SelectorTool;

use crate::cursor::CursorSink;
use super::trait_def::{Brush, Tool};

/// Every tool the application knows about.
/// Dispatching through an enum keeps the toolbox free of `Box<dyn Tool>`.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolType {
    Pencil(PencilTool),
    Brush(BrushTool),
    Eraser(EraserTool),
    Marker(MarkerTool),
    Selector(SelectorTool),
    Hand(HandTool),
}

impl Default for ToolType {
    fn default() -> Self {
        Self::Pencil(PencilTool)
    }
}

impl Tool for ToolType {
    fn name(&self) -> &str {
        match self {
            Self::Pencil(tool) => tool.name(),
            Self::Brush(tool) => tool.name(),
            Self::Eraser(tool) => tool.name(),
            Self::Marker(tool) => tool.name(),
            Self::Selector(tool) => tool.name(),
            Self::Hand(tool) => tool.name(),
        }
    }

    fn apply_cursor(&self, sink: &mut dyn CursorSink) {
        match self {
            Self::Pencil(tool) => tool.apply_cursor(sink),
            Self::Brush(tool) => tool.apply_cursor(sink),
            Self::Eraser(tool) => tool.apply_cursor(sink),
            Self::Marker(tool) => tool.apply_cursor(sink),
            Self::Selector(tool) => tool.apply_cursor(sink),
            Self::Hand(tool) => tool.apply_cursor(sink),
        }
    }
}

impl ToolType {
    /// The standard tool set, in toolbar order
    pub fn all() -> Vec<ToolType> {
        vec![
            Self::Pencil(PencilTool),
            Self::Brush(BrushTool::default()),
            Self::Eraser(EraserTool::default()),
            Self::Marker(MarkerTool::default()),
            Self::Selector(SelectorTool),
            Self::Hand(HandTool),
        ]
    }

    pub fn as_brush(&self) -> Option<&dyn Brush> {
        match self {
            Self::Brush(tool) => Some(tool),
            Self::Eraser(tool) => Some(tool),
            Self::Marker(tool) => Some(tool),
            _ => None,
        }
    }

    pub fn as_brush_mut(&mut self) -> Option<&mut dyn Brush> {
        match self {
            Self::Brush(tool) => Some(tool),
            Self::Eraser(tool) => Some(tool),
            Self::Marker(tool) => Some(tool),
            _ => None,
        }
    }

    pub fn is_brush(&self) -> bool {
        self.as_brush().is_some()
    }
}
