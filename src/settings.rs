use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cursor::CursorSink;
use crate::tool::Tool;
use crate::toolbox::Toolbox;

/// Key under which the demo app stores settings in eframe storage
pub const STORAGE_KEY: &str = "leinwand";

/// Errors that can occur while saving or restoring tool settings
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to serialize settings: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// The parts of a toolbox worth keeping between sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old settings
pub struct ToolboxSettings {
    /// Name of the tool that was active
    pub active_tool: String,
    /// Brush tool name to footprint size
    pub brush_sizes: BTreeMap<String, u32>,
}

impl ToolboxSettings {
    pub fn capture(toolbox: &Toolbox) -> Self {
        let brush_sizes = toolbox
            .tools()
            .iter()
            .filter_map(|tool| tool.as_brush().map(|brush| (tool.name().to_string(), brush.size())))
            .collect();

        Self {
            active_tool: toolbox.active_tool().name().to_string(),
            brush_sizes,
        }
    }

    /// Restore sizes and the active tool. Entries that no longer match the
    /// toolbox are skipped with a warning.
    pub fn apply(&self, toolbox: &mut Toolbox, sink: &mut dyn CursorSink) {
        for (name, &size) in &self.brush_sizes {
            if let Err(e) = toolbox.set_brush_size(name, size) {
                log::warn!("Skipping stored size for {}: {}", name, e);
            }
        }

        if self.active_tool.is_empty() {
            return;
        }
        if let Err(e) = toolbox.select_by_name(&self.active_tool, sink) {
            log::warn!("Keeping current tool: {}", e);
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> PersistenceResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> PersistenceResult<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{CursorKind, CursorState};

    #[test]
    fn test_capture_default_toolbox() {
        let settings = ToolboxSettings::capture(&Toolbox::default());
        assert_eq!(settings.active_tool, "Pencil");
        assert_eq!(settings.brush_sizes.len(), 3);
        assert_eq!(settings.brush_sizes["Eraser"], 1);
    }

    #[test]
    fn test_apply_restores_state() {
        let mut source = Toolbox::default();
        let mut state = CursorState::new();
        source.set_brush_size("Brush", 17).unwrap();
        source.select_by_name("Hand", &mut state).unwrap();
        let settings = ToolboxSettings::capture(&source);

        let mut restored = Toolbox::default();
        let mut restored_state = CursorState::new();
        settings.apply(&mut restored, &mut restored_state);

        assert_eq!(restored.active_tool().name(), "Hand");
        assert!(restored_state.is_system(CursorKind::Hand));
        assert_eq!(ToolboxSettings::capture(&restored), settings);
    }

    #[test]
    fn test_apply_skips_stale_entries() {
        let mut settings = ToolboxSettings {
            active_tool: "Lasso".into(),
            ..Default::default()
        };
        settings.brush_sizes.insert("Hand".into(), 4);
        settings.brush_sizes.insert("Brush".into(), 500);
        settings.brush_sizes.insert("Marker".into(), 6);

        let mut toolbox = Toolbox::default();
        settings.apply(&mut toolbox, &mut CursorState::new());

        assert_eq!(toolbox.active_tool().name(), "Pencil");
        let captured = ToolboxSettings::capture(&toolbox);
        assert_eq!(captured.brush_sizes["Brush"], 1);
        assert_eq!(captured.brush_sizes["Marker"], 6);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: ToolboxSettings = serde_json::from_str(r#"{"active_tool":"Eraser"}"#).unwrap();
        assert_eq!(settings.active_tool, "Eraser");
        assert!(settings.brush_sizes.is_empty());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = std::env::temp_dir().join(format!("leinwand-settings-{}", std::process::id()));
        let path = dir.join("tools.json");

        let settings = ToolboxSettings::capture(&Toolbox::default());
        settings.save(&path).unwrap();
        let loaded = ToolboxSettings::load(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ToolboxSettings::load("/nonexistent/leinwand/tools.json");
        assert!(matches!(result, Err(PersistenceError::Io(_))));
    }
}
