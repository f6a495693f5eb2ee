use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::cursor::CursorState;
use crate::cursor_textures::CursorTextures;
use crate::egui_host::show_cursor;
use crate::event::{EventHandler, ToolEvent};
use crate::settings::{STORAGE_KEY, ToolboxSettings};
use crate::tool::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, Tool};
use crate::toolbox::Toolbox;

const CANVAS_SIZE: egui::Vec2 = egui::vec2(600.0, 600.0);
const MAX_STATUS_MESSAGES: usize = 32;

/// Shared queue of status-bar messages, newest last
pub type StatusQueue = Rc<RefCell<VecDeque<String>>>;

/// Turns toolbox events into status-bar messages
pub struct StatusLog {
    queue: StatusQueue,
}

impl StatusLog {
    pub fn new(queue: StatusQueue) -> Self {
        Self { queue }
    }
}

impl EventHandler for StatusLog {
    fn handle_event(&mut self, event: &ToolEvent) {
        let message = match event {
            ToolEvent::ToolChanged { new, .. } => format!("Switched to {}", new),
            ToolEvent::BrushResized { tool, size } => format!("{} size: {}px", tool, size),
            // Fired on every canvas entry; too noisy for the status bar
            ToolEvent::CursorApplied { .. } | ToolEvent::CursorReset => return,
        };

        let mut queue = self.queue.borrow_mut();
        queue.push_back(message);
        while queue.len() > MAX_STATUS_MESSAGES {
            queue.pop_front();
        }
    }
}

/// Demo host: a tool selector, a settings side bar and an empty canvas that
/// takes the active tool's cursor while hovered.
pub struct LeinwandApp {
    toolbox: Toolbox,
    /// Cursor state of the canvas surface
    cursor: CursorState,
    textures: CursorTextures,
    canvas_hovered: bool,
    status: StatusQueue,
}

impl Default for LeinwandApp {
    fn default() -> Self {
        let toolbox = Toolbox::default();
        let status = StatusQueue::default();
        toolbox.event_bus().subscribe(Box::new(StatusLog::new(status.clone())));

        Self {
            toolbox,
            cursor: CursorState::new(),
            textures: CursorTextures::default(),
            canvas_hovered: false,
            status,
        }
    }
}

impl LeinwandApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::default();

        if let Some(storage) = cc.storage {
            if let Some(settings) = eframe::get_value::<ToolboxSettings>(storage, STORAGE_KEY) {
                log::info!("Restoring tool settings: {:?}", settings);
                settings.apply(&mut app.toolbox, &mut app.cursor);
            }
        }

        app
    }

    pub fn toolbox(&self) -> &Toolbox {
        &self.toolbox
    }

    pub fn status_text(&self) -> String {
        self.status.borrow().back().cloned().unwrap_or_default()
    }

    fn tool_selector(&mut self, ui: &mut egui::Ui) {
        let active = self.toolbox.active_index();
        // Collect tool names first to avoid borrowing issues
        let names: Vec<String> = self.toolbox.tools().iter().map(|t| t.name().to_string()).collect();

        ui.horizontal(|ui| {
            for (index, name) in names.iter().enumerate() {
                if ui.selectable_label(index == active, name.as_str()).clicked() {
                    if let Err(e) = self.toolbox.select(index, &mut self.cursor) {
                        log::error!("Failed to select {}: {}", name, e);
                    }
                }
            }
        });
    }

    fn tool_settings(&mut self, ui: &mut egui::Ui) {
        ui.heading("Tools");
        ui.add_space(8.0);

        let tool = self.toolbox.active_tool();
        let name = tool.name().to_string();
        ui.label(egui::RichText::new(&name).size(20.0));
        ui.add_space(8.0);

        let Some(brush) = tool.as_brush() else {
            return;
        };
        let mut size = brush.size();
        let preview = brush.cursor_image();

        ui.label("Size");
        ui.horizontal(|ui| {
            let texture = self.textures.get_or_load(ui.ctx(), &preview);
            let [w, h] = preview.size();
            let pixels_per_point = ui.ctx().pixels_per_point();
            ui.add_sized(
                [80.0, 80.0],
                egui::Image::new((texture, egui::vec2(w as f32, h as f32) / pixels_per_point))
                    .fit_to_original_size(1.0),
            );

            ui.vertical(|ui| {
                ui.label(format!("Brush Size: {}px", size));
                let slider = egui::Slider::new(&mut size, MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).show_value(false);
                if ui.add(slider).changed() {
                    if let Err(e) = self.toolbox.set_brush_size(&name, size) {
                        log::error!("Failed to resize {}: {}", name, e);
                    }
                }
            });
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(CANVAS_SIZE, egui::Sense::hover());
        painter.rect_filled(response.rect, 0.0, egui::Color32::WHITE);

        let hovered = response.hovered();
        if hovered {
            // The active tool writes its cursor once per entry; egui still
            // needs the icon every frame.
            if !self.canvas_hovered {
                self.toolbox.on_hover(&mut self.cursor);
            }
            show_cursor(ui.ctx(), self.cursor.current(), &mut self.textures);
        } else if self.canvas_hovered {
            self.toolbox.on_leave(&mut self.cursor);
        }
        self.canvas_hovered = hovered;
    }
}

impl eframe::App for LeinwandApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, STORAGE_KEY, &ToolboxSettings::capture(&self.toolbox));
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.textures.begin_frame();

        egui::TopBottomPanel::top("tool_selector").show(ctx, |ui| {
            self.tool_selector(ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(egui::RichText::new(self.status_text()).small());
        });

        egui::SidePanel::left("tool_settings")
            .resizable(false)
            .default_width(300.0)
            .show(ctx, |ui| {
                self.tool_settings(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas(ui);
        });
    }
}
