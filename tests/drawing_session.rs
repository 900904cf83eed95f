use drawing_pad::{
    BrushSettings, Canvas, Command, DrawMode, History, Restore, Rgba, Scene, ToolState,
};
use egui::pos2;
use futures::executor::block_on;

const RED: Rgba = Rgba::new(255, 0, 0, 255);

/// Minimal driver wiring the pieces the way the app does
struct Session {
    canvas: Canvas,
    history: History,
    tool: ToolState,
    brush: BrushSettings,
}

impl Session {
    fn new(width: usize, height: usize) -> Self {
        let canvas = Canvas::new(width, height);
        let history = History::new(canvas.snapshot().unwrap());
        Self {
            canvas,
            history,
            tool: ToolState::new(),
            brush: BrushSettings::default(),
        }
    }

    fn run(&mut self, command: Option<Command>) {
        if let Some(command) = command {
            if command.execute(&mut self.canvas) {
                self.history.capture(self.canvas.snapshot().unwrap());
            }
        }
    }

    fn drag(&mut self, from: (f32, f32), to: (f32, f32)) {
        let command = self.tool.pointer_down(pos2(from.0, from.1), &self.brush);
        self.run(command);
        self.tool.pointer_move(pos2((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0));
        let command = self.tool.pointer_up(pos2(to.0, to.1));
        self.run(command);
    }

    fn click(&mut self, at: (f32, f32)) {
        self.drag(at, at);
    }

    fn undo(&mut self) -> Restore {
        block_on(self.history.undo(&mut self.canvas)).unwrap()
    }

    fn redo(&mut self) -> Restore {
        block_on(self.history.redo(&mut self.canvas)).unwrap()
    }
}

#[test]
fn test_draw_fill_undo_redo() {
    let mut session = Session::new(60, 60);

    // Closed rectangle, then fill its inside.
    session.brush.use_thin();
    session.brush.use_shape(DrawMode::Rectangle);
    session.drag((10.0, 10.0), (50.0, 50.0));
    assert_eq!(session.canvas.document().elements().len(), 1);
    assert_eq!(session.canvas.pixels().get(10, 30), Some(Rgba::BLACK));
    assert_eq!(session.canvas.pixels().get(30, 30), Some(Rgba::TRANSPARENT));

    session.brush.use_fill();
    session.brush.change_color("#FF0000");
    session.click((30.0, 30.0));
    assert_eq!(session.canvas.pixels().get(30, 30), Some(RED));
    assert_eq!(session.canvas.pixels().get(1, 1), Some(Rgba::TRANSPARENT));
    assert_eq!(session.canvas.pixels().get(10, 30), Some(Rgba::BLACK));
    assert_eq!(session.canvas.document().elements()[0].element_type(), "bitmap");
    assert_eq!(session.history.undo_len(), 3);

    assert_eq!(session.undo(), Restore::Applied);
    assert_eq!(session.canvas.pixels().get(30, 30), Some(Rgba::TRANSPARENT));
    assert_eq!(session.canvas.document().elements()[0].element_type(), "rectangle");

    assert_eq!(session.redo(), Restore::Applied);
    assert_eq!(session.canvas.pixels().get(30, 30), Some(RED));
    assert_eq!(session.redo(), Restore::Nothing);
}

#[test]
fn test_fill_on_filled_region_is_not_recorded() {
    let mut session = Session::new(10, 10);
    session.brush.use_fill();
    session.brush.change_color("#FF0000");

    session.click((2.0, 2.0));
    session.click((7.0, 7.0));
    assert_eq!(session.history.undo_len(), 2);
}

#[test]
fn test_new_edit_after_undo_discards_redo() {
    let mut session = Session::new(20, 20);
    session.drag((2.0, 2.0), (18.0, 2.0));
    session.drag((2.0, 10.0), (18.0, 10.0));

    assert_eq!(session.undo(), Restore::Applied);
    assert!(session.history.can_redo());

    session.brush.use_eraser();
    session.drag((0.0, 2.0), (20.0, 2.0));
    assert!(!session.history.can_redo());
    assert_eq!(session.canvas.pixels().get(10, 2), Some(Rgba::TRANSPARENT));
    assert_eq!(session.canvas.document().elements().len(), 2);
}

#[test]
fn test_undo_back_to_blank() {
    let mut session = Session::new(16, 16);
    session.drag((1.0, 1.0), (15.0, 15.0));
    session.drag((15.0, 1.0), (1.0, 15.0));

    assert_eq!(session.undo(), Restore::Applied);
    assert_eq!(session.undo(), Restore::Applied);
    assert_eq!(session.undo(), Restore::Nothing);
    assert!(session.canvas.document().is_empty());
    assert!(!session.history.can_undo());
    assert_eq!(session.history.redo_len(), 2);
}
