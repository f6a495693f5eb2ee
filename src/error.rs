use thiserror::Error;

/// Errors raised by the toolbox and by brush configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("A toolbox needs at least one tool")]
    Empty,

    #[error("Tool name {0:?} is registered twice")]
    DuplicateName(String),

    #[error("No tool named {0:?}")]
    UnknownTool(String),

    #[error("Tool index {index} is out of range for {len} tools")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Tool {0:?} has no brush size")]
    NotABrush(String),

    #[error("Brush size {size} is outside {min}..={max}")]
    BrushSizeOutOfRange { size: u32, min: u32, max: u32 },
}

pub type ToolResult<T> = Result<T, ToolError>;
