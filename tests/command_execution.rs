mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{Editor, MemorySink};
use eframe_sketchpad::command::{Command, CommandError, CommandOutcome};
use eframe_sketchpad::error::ExportError;
use eframe_sketchpad::export::ExportFormat;
use eframe_sketchpad::{AppConfig, InputEvent, PaintApp, ToolKind};
use egui::{Color32, pos2, vec2};

#[test]
fn test_select_tool() {
    let mut editor = Editor::new();

    let outcome = editor.execute(Command::SelectTool(ToolKind::Triangle)).unwrap();
    assert_eq!(outcome, CommandOutcome::Applied);
    assert_eq!(editor.settings.tool, ToolKind::Triangle);

    let outcome = editor.execute(Command::SelectTool(ToolKind::Triangle)).unwrap();
    assert_eq!(outcome, CommandOutcome::NoOp);
}

#[test]
fn test_brush_width_is_clamped() {
    let mut editor = Editor::new();

    editor.execute(Command::SetBrushWidth(500.0)).unwrap();
    assert_eq!(editor.settings.brush_width, 50.0);
    editor.execute(Command::SetBrushWidth(0.0)).unwrap();
    assert_eq!(editor.settings.brush_width, 1.0);
}

#[test]
fn test_save_jpeg() {
    let mut editor = Editor::new();
    editor.drag(ToolKind::Brush, &[pos2(10.0, 10.0), pos2(90.0, 90.0)]);

    let outcome = editor.execute(Command::Save).unwrap();
    assert_eq!(outcome, CommandOutcome::Saved("memory://canvasImg.jpg".to_owned()));

    let saved = editor.sink.saved.borrow();
    let (name, format, bytes) = &saved[0];
    assert_eq!(name, "canvasImg.jpg");
    assert_eq!(*format, ExportFormat::Jpeg);
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);

    let decoded = image::load_from_memory(bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (100, 100));
}

#[test]
fn test_save_png_keeps_pixels() {
    let mut editor = Editor::new();
    editor.export_file_name = "drawing.PNG".to_owned();
    editor.settings.color = Color32::RED;
    editor.settings.fill_shapes = true;
    editor.drag(ToolKind::Rectangle, &[pos2(20.0, 20.0), pos2(80.0, 80.0)]);

    editor.execute(Command::Save).unwrap();

    let saved = editor.sink.saved.borrow();
    let (_, format, bytes) = &saved[0];
    assert_eq!(*format, ExportFormat::Png);
    assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);

    let decoded = image::load_from_memory(bytes).unwrap().to_rgba8();
    assert_eq!(decoded.get_pixel(50, 50).0, [255, 0, 0, 255]);
    assert_eq!(decoded.get_pixel(5, 5).0, [255, 255, 255, 255]);
}

#[test]
fn test_save_does_not_touch_history() {
    let mut editor = Editor::new();
    editor.drag(ToolKind::Line, &[pos2(10.0, 10.0), pos2(90.0, 10.0)]);

    editor.execute(Command::Save).unwrap();
    assert_eq!(editor.history.undo_len(), 1);
    assert_eq!(editor.history.redo_len(), 0);
}

#[test]
fn test_save_unsupported_format() {
    let mut editor = Editor::new();
    editor.export_file_name = "drawing.bmp".to_owned();

    let result = editor.execute(Command::Save);
    assert!(matches!(
        result,
        Err(CommandError::Export(ExportError::UnsupportedFormat(_)))
    ));
    assert!(editor.sink.saved.borrow().is_empty());
}

#[test]
fn test_app_runs_gestures_and_shortcuts() {
    let saved = Rc::new(RefCell::new(Vec::new()));
    let config = AppConfig {
        history_limit: 2,
        ..Default::default()
    };
    let mut app = PaintApp::with_config(config).with_sink(Box::new(MemorySink {
        saved: saved.clone(),
    }));

    // Nothing to draw on yet
    app.apply_input(&[InputEvent::PointerDown { pos: pos2(5.0, 5.0) }]);
    assert!(app.canvas().is_none());

    app.ensure_canvas(vec2(50.0, 40.0), 2.0);
    let canvas = app.canvas().unwrap();
    assert_eq!((canvas.width(), canvas.height()), (100, 80));
    let blank = canvas.snapshot();

    for y in [10.0, 20.0, 30.0] {
        app.apply_input(&[
            InputEvent::PointerDown { pos: pos2(5.0, y) },
            InputEvent::PointerMove { pos: pos2(45.0, y) },
            InputEvent::PointerUp { pos: pos2(45.0, y) },
        ]);
    }
    // Limit keeps only the two newest undo points
    assert_eq!(app.history().undo_len(), 2);

    app.apply_input(&[
        InputEvent::Shortcut(Command::Undo),
        InputEvent::Shortcut(Command::Undo),
        InputEvent::Shortcut(Command::Undo),
    ]);
    assert_eq!(app.history().undo_len(), 0);
    assert_eq!(app.history().redo_len(), 2);
    assert!(!app.canvas().unwrap().matches(&blank));
    assert_eq!(app.canvas().unwrap().pixel_at(pos2(20.0, 10.0)), Some(Color32::BLACK));
    assert_eq!(app.canvas().unwrap().pixel_at(pos2(20.0, 20.0)), Some(Color32::WHITE));

    app.execute_command(Command::Save);
    assert_eq!(saved.borrow().len(), 1);
    assert!(app.status_text().is_some());
}
