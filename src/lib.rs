#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod cursor;
pub mod cursor_textures;
pub mod egui_host;
pub mod error;
pub mod event;
pub mod settings;
pub mod tool;
pub mod toolbox;

pub use app::LeinwandApp;
pub use cursor::{Cursor, CursorImage, CursorKind, CursorSink, CursorState};
pub use error::{ToolError, ToolResult};
pub use event::{EventBus, EventHandler, ToolEvent};
pub use settings::ToolboxSettings;
pub use tool::{Brush, Tool, ToolType, new_tool};
pub use toolbox::Toolbox;
