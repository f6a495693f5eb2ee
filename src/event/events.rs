/// Notifications emitted by the toolbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolEvent {
    /// The active tool changed
    ToolChanged {
        old: String,
        new: String,
    },
    /// A tool wrote its cursor to the surface
    CursorApplied {
        tool: String,
    },
    /// The pointer left the canvas and the cursor went back to the default
    CursorReset,
    BrushResized {
        tool: String,
        size: u32,
    },
}
