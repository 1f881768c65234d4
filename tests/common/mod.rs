#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use eframe_sketchpad::command::{Command, CommandContext, CommandResult, SnapshotHistory};
use eframe_sketchpad::error::ExportError;
use eframe_sketchpad::export::{ExportFormat, ImageSink};
use eframe_sketchpad::input::{InputEvent, route_event};
use eframe_sketchpad::{Canvas, EditorState, ToolKind, ToolSettings};
use egui::{Color32, Pos2};

pub type SavedImages = Rc<RefCell<Vec<(String, ExportFormat, Vec<u8>)>>>;

/// Keeps delivered images in memory
#[derive(Default, Clone)]
pub struct MemorySink {
    pub saved: SavedImages,
}

impl ImageSink for MemorySink {
    fn deliver(&mut self, file_name: &str, format: ExportFormat, bytes: Vec<u8>) -> Result<String, ExportError> {
        self.saved.borrow_mut().push((file_name.to_owned(), format, bytes));
        Ok(format!("memory://{file_name}"))
    }
}

/// Headless editor: a 100x100 white canvas plus everything a command needs
pub struct Editor {
    pub canvas: Canvas,
    pub history: SnapshotHistory,
    pub settings: ToolSettings,
    pub state: EditorState,
    pub sink: MemorySink,
    pub export_file_name: String,
}

impl Editor {
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(100, 100, 1.0, Color32::WHITE).unwrap(),
            history: SnapshotHistory::new(0),
            settings: ToolSettings::default(),
            state: EditorState::Idle,
            sink: MemorySink::default(),
            export_file_name: "canvasImg.jpg".to_owned(),
        }
    }

    pub fn execute(&mut self, command: Command) -> CommandResult {
        let mut ctx = CommandContext {
            canvas: &mut self.canvas,
            history: &mut self.history,
            settings: &mut self.settings,
            state: &mut self.state,
            sink: &mut self.sink,
            export_file_name: &self.export_file_name,
        };
        command.execute(&mut ctx)
    }

    pub fn send(&mut self, event: InputEvent) {
        route_event(
            &event,
            &mut self.state,
            &mut self.canvas,
            &mut self.history,
            &self.settings,
        );
    }

    /// Press at `points[0]`, move through the rest, release at the last one
    pub fn drag(&mut self, tool: ToolKind, points: &[Pos2]) {
        self.settings.tool = tool;
        let (first, rest) = points.split_first().unwrap();
        self.send(InputEvent::PointerDown { pos: *first });
        for pos in rest {
            self.send(InputEvent::PointerMove { pos: *pos });
        }
        self.send(InputEvent::PointerUp {
            pos: *points.last().unwrap(),
        });
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color32 {
        self.canvas.pixel(x, y).unwrap()
    }
}
