use std::cell::RefCell;
use std::rc::Rc;

use leinwand::tool::{HandTool, PencilTool};
use leinwand::{Cursor, CursorKind, CursorState, EventHandler, Tool, ToolEvent, ToolType, Toolbox};

struct Recorder(Rc<RefCell<Vec<ToolEvent>>>);

impl EventHandler for Recorder {
    fn handle_event(&mut self, event: &ToolEvent) {
        self.0.borrow_mut().push(event.clone());
    }
}

fn recorded_toolbox(tools: Vec<ToolType>) -> (Toolbox, Rc<RefCell<Vec<ToolEvent>>>) {
    let toolbox = Toolbox::new(tools).unwrap();
    let events = Rc::new(RefCell::new(Vec::new()));
    toolbox.event_bus().subscribe(Box::new(Recorder(events.clone())));
    (toolbox, events)
}

#[test]
fn test_pencil_to_hand_transition() {
    let (mut toolbox, events) = recorded_toolbox(vec![
        ToolType::Pencil(PencilTool),
        ToolType::Hand(HandTool),
    ]);
    let mut surface = CursorState::new();

    toolbox.select_by_name("Pencil", &mut surface).unwrap();
    assert_eq!(*surface.current(), Cursor::System(CursorKind::Cross));
    events.borrow_mut().clear();

    toolbox.select_by_name("Hand", &mut surface).unwrap();

    assert_eq!(*surface.current(), Cursor::System(CursorKind::Hand));
    assert_eq!(toolbox.active_tool().name(), "Hand");
    assert_eq!(
        *events.borrow(),
        [
            ToolEvent::ToolChanged {
                old: "Pencil".into(),
                new: "Hand".into(),
            },
            ToolEvent::CursorApplied { tool: "Hand".into() },
        ]
    );
}

#[test]
fn test_only_active_tool_writes_cursor() {
    let (mut toolbox, events) = recorded_toolbox(ToolType::all());
    let mut surface = CursorState::new();

    toolbox.select_by_name("Eraser", &mut surface).unwrap();
    toolbox.on_hover(&mut surface);
    toolbox.on_hover(&mut surface);

    let applied: Vec<String> = events
        .borrow()
        .iter()
        .filter_map(|event| match event {
            ToolEvent::CursorApplied { tool } => Some(tool.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(applied, ["Eraser", "Eraser", "Eraser"]);
    assert_eq!(surface.writes(), 3);
}

#[test]
fn test_leave_and_reenter_restores_cursor() {
    let mut toolbox = Toolbox::default();
    let mut surface = CursorState::new();
    toolbox.select_by_name("Selector", &mut surface).unwrap();

    toolbox.on_leave(&mut surface);
    assert!(surface.is_system(CursorKind::Arrow));

    toolbox.on_hover(&mut surface);
    assert!(surface.is_system(CursorKind::Move));
}

#[test]
fn test_reselecting_active_tool_reapplies_without_change_event() {
    let (mut toolbox, events) = recorded_toolbox(ToolType::all());
    let mut surface = CursorState::new();

    toolbox.select(0, &mut surface).unwrap();

    assert!(surface.is_system(CursorKind::Cross));
    assert_eq!(*events.borrow(), [ToolEvent::CursorApplied { tool: "Pencil".into() }]);
}

#[test]
fn test_resized_brush_cursor_applies_on_next_hover() {
    let mut toolbox = Toolbox::default();
    let mut surface = CursorState::new();
    toolbox.select_by_name("Brush", &mut surface).unwrap();
    let before = surface.current().clone();

    toolbox.set_brush_size("Brush", 30).unwrap();
    assert_eq!(*surface.current(), before);

    toolbox.on_hover(&mut surface);
    match surface.current() {
        Cursor::Image(image) => assert_eq!(image.size(), [34, 34]),
        other => panic!("expected brush image, got {:?}", other),
    }
}
