use std::collections::HashSet;

use crate::cursor::{CursorKind, CursorSink};
use crate::error::{ToolError, ToolResult};
use crate::event::{EventBus, ToolEvent};
use crate::tool::{Tool, ToolType};

/// Owns the selectable tools and tracks which one is active.
///
/// The active tool is the only writer of the canvas cursor: it applies its
/// cursor when selected and whenever the pointer hovers the canvas. Leaving
/// the canvas resets the cursor to [`CursorKind::Arrow`].
#[derive(Debug)]
pub struct Toolbox {
    tools: Vec<ToolType>,
    active: usize,
    event_bus: EventBus,
}

impl Default for Toolbox {
    fn default() -> Self {
        Self {
            tools: ToolType::all(),
            active: 0,
            event_bus: EventBus::new(),
        }
    }
}

impl Toolbox {
    pub fn new(tools: Vec<ToolType>) -> ToolResult<Self> {
        if tools.is_empty() {
            return Err(ToolError::Empty);
        }

        let mut seen = HashSet::new();
        for tool in &tools {
            if !seen.insert(tool.name()) {
                return Err(ToolError::DuplicateName(tool.name().to_string()));
            }
        }

        Ok(Self {
            tools,
            active: 0,
            event_bus: EventBus::new(),
        })
    }

    pub fn tools(&self) -> &[ToolType] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_tool(&self) -> &ToolType {
        &self.tools[self.active]
    }

    pub fn active_tool_mut(&mut self) -> &mut ToolType {
        &mut self.tools[self.active]
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.tools.iter().position(|tool| tool.name() == name)
    }

    pub fn tool_by_name(&self, name: &str) -> Option<&ToolType> {
        self.tools.iter().find(|tool| tool.name() == name)
    }

    pub fn tool_by_name_mut(&mut self, name: &str) -> Option<&mut ToolType> {
        self.tools.iter_mut().find(|tool| tool.name() == name)
    }

    /// Make the tool at `index` active and apply its cursor
    pub fn select(&mut self, index: usize, sink: &mut dyn CursorSink) -> ToolResult<()> {
        if index >= self.tools.len() {
            return Err(ToolError::IndexOutOfRange {
                index,
                len: self.tools.len(),
            });
        }

        let old = self.active;
        self.active = index;

        if old != index {
            let old_name = self.tools[old].name().to_string();
            let new_name = self.tools[index].name().to_string();
            log::info!("Tool changed: {} -> {}", old_name, new_name);
            self.event_bus.emit(ToolEvent::ToolChanged {
                old: old_name,
                new: new_name,
            });
        }

        self.apply_active_cursor(sink);
        Ok(())
    }

    pub fn select_by_name(&mut self, name: &str, sink: &mut dyn CursorSink) -> ToolResult<()> {
        let index = self
            .index_of(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        self.select(index, sink)
    }

    /// Pointer is over the canvas
    pub fn on_hover(&self, sink: &mut dyn CursorSink) {
        self.apply_active_cursor(sink);
    }

    /// Pointer left the canvas
    pub fn on_leave(&self, sink: &mut dyn CursorSink) {
        log::debug!("Pointer left canvas, resetting cursor");
        sink.set_cursor(CursorKind::Arrow.into());
        self.event_bus.emit(ToolEvent::CursorReset);
    }

    /// Resize a brush tool. The active cursor is not touched; it picks up the
    /// new size the next time it is applied.
    pub fn set_brush_size(&mut self, name: &str, size: u32) -> ToolResult<()> {
        let tool = self
            .tool_by_name_mut(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        let brush = tool
            .as_brush_mut()
            .ok_or_else(|| ToolError::NotABrush(name.to_string()))?;

        brush.set_size(size)?;
        log::info!("{} size set to {}px", name, size);
        self.event_bus.emit(ToolEvent::BrushResized {
            tool: name.to_string(),
            size,
        });
        Ok(())
    }

    fn apply_active_cursor(&self, sink: &mut dyn CursorSink) {
        let tool = self.active_tool();
        log::debug!("Applying cursor for {}", tool.name());
        tool.apply_cursor(sink);
        self.event_bus.emit(ToolEvent::CursorApplied {
            tool: tool.name().to_string(),
        });
    }
}
