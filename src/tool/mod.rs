pub mod brush_cursor;
pub mod types;
mod trait_def;

pub use brush_cursor::{BrushShape, BrushSize, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, DEFAULT_BRUSH_SIZE};
pub use trait_def::{Brush, Tool};
pub use types::ToolType;

// Re-export specific tool implementations
pub use types::brush::{BrushTool, EraserTool, MarkerTool};
pub use types::hand::HandTool;
pub use types::pencil::PencilTool;
pub use types::selector::SelectorTool;

/// Factory function to create a tool from its display name
pub fn new_tool(name: &str) -> Option<ToolType> {
    match name {
        PencilTool::NAME => Some(ToolType::Pencil(PencilTool)),
        BrushTool::NAME => Some(ToolType::Brush(BrushTool::default())),
        EraserTool::NAME => Some(ToolType::Eraser(EraserTool::default())),
        MarkerTool::NAME => Some(ToolType::Marker(MarkerTool::default())),
        SelectorTool::NAME => Some(ToolType::Selector(SelectorTool)),
        HandTool::NAME => Some(ToolType::Hand(HandTool)),
        _ => None,
    }
}
