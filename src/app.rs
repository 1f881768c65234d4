use eframe::egui;

use crate::canvas::Canvas;
use crate::command::{Command, CommandContext, CommandOutcome, SnapshotHistory};
use crate::config::AppConfig;
use crate::export::ImageSink;
use crate::input::{self, InputHandler};
use crate::panels;
use crate::renderer::CanvasTexture;
use crate::state::EditorState;
use crate::tools::ToolSettings;

/// How long a status line stays visible, in seconds
const STATUS_DURATION: f64 = 4.0;

struct StatusMessage {
    text: String,
    is_error: bool,
    expires_at: Option<f64>,
}

/// The drawing application.
///
/// Only the tool settings survive a restart; pixels and history live for
/// the current session.
pub struct PaintApp {
    config: AppConfig,
    settings: ToolSettings,
    canvas: Option<Canvas>,
    history: SnapshotHistory,
    state: EditorState,
    input: InputHandler,
    texture: CanvasTexture,
    sink: Box<dyn ImageSink>,
    status: Option<StatusMessage>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_config(AppConfig::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::with_config(AppConfig::load());

        if let Some(settings) = cc
            .storage
            .and_then(|storage| eframe::get_value::<ToolSettings>(storage, eframe::APP_KEY))
        {
            log::debug!("Restored tool settings: {settings:?}");
            app.settings = settings;
        }

        app
    }

    /// Builds the app without a window; the canvas is created lazily
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            settings: config.default_settings.clone(),
            history: SnapshotHistory::new(config.history_limit),
            sink: default_sink(&config),
            config,
            canvas: None,
            state: EditorState::Idle,
            input: InputHandler::new(),
            texture: CanvasTexture::new(),
            status: None,
        }
    }

    /// Replaces where saved images go
    pub fn with_sink(mut self, sink: Box<dyn ImageSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn status_text(&self) -> Option<(&str, bool)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.is_error))
    }

    /// Creates the canvas on first use, sized to `logical_size` at the
    /// display's pixel density.
    pub fn ensure_canvas(&mut self, logical_size: egui::Vec2, pixels_per_point: f32) {
        if self.canvas.is_some() {
            return;
        }

        match Canvas::with_logical_size(logical_size, pixels_per_point, self.config.background) {
            Ok(canvas) => {
                log::info!(
                    "Created {}x{} canvas (scale {})",
                    canvas.width(),
                    canvas.height(),
                    canvas.scale()
                );
                self.texture.reset();
                self.canvas = Some(canvas);
            }
            Err(err) => log::error!("Failed to create canvas: {err}"),
        }
    }

    /// Runs a toolbar or shortcut action
    pub fn execute_command(&mut self, command: Command) {
        let Some(canvas) = self.canvas.as_mut() else {
            log::warn!("Ignoring {command:?}: no canvas yet");
            return;
        };

        let mut ctx = CommandContext {
            canvas,
            history: &mut self.history,
            settings: &mut self.settings,
            state: &mut self.state,
            sink: self.sink.as_mut(),
            export_file_name: &self.config.export_file_name,
        };

        match command.execute(&mut ctx) {
            Ok(CommandOutcome::Saved(location)) => {
                self.status = Some(StatusMessage {
                    text: format!("Saved {location}"),
                    is_error: false,
                    expires_at: None,
                });
            }
            Ok(_) => {}
            Err(err) => {
                log::error!("{command:?} failed: {err}");
                self.status = Some(StatusMessage {
                    text: err.to_string(),
                    is_error: true,
                    expires_at: None,
                });
            }
        }
    }

    pub fn undo(&mut self) {
        self.execute_command(Command::Undo);
    }

    pub fn redo(&mut self) {
        self.execute_command(Command::Redo);
    }

    /// Feeds this frame's pointer, touch and keyboard input to the canvas
    ///
    /// `canvas_covered` is true when another layer lies over the canvas under
    /// the pointer, e.g. an open color picker; presses then go to that layer.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect, canvas_covered: bool) {
        self.input.set_canvas_rect(canvas_rect);
        self.input.set_canvas_covered(canvas_covered);
        let events = self.input.process_input(ctx);
        self.apply_input(&events);
    }

    /// Applies already normalized input events
    pub fn apply_input(&mut self, events: &[input::InputEvent]) {
        let mut shortcuts = Vec::new();
        if let Some(canvas) = self.canvas.as_mut() {
            for event in events {
                if let Some(command) =
                    input::route_event(event, &mut self.state, canvas, &mut self.history, &self.settings)
                {
                    shortcuts.push(command);
                }
            }
        }

        for command in shortcuts {
            self.execute_command(command);
        }
    }

    pub(crate) fn paint_canvas(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: egui::Rect) {
        if let Some(canvas) = &self.canvas {
            self.texture.paint(ctx, painter, rect, canvas);
        }
    }

    /// Starts the expiry clock of a fresh status line and drops stale ones
    pub(crate) fn tick_status(&mut self, now: f64) {
        let expired = match self.status.as_mut() {
            Some(status) => match status.expires_at {
                None => {
                    status.expires_at = Some(now + STATUS_DURATION);
                    false
                }
                Some(expires_at) => now >= expires_at,
            },
            None => false,
        };
        if expired {
            self.status = None;
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick_status(ctx.input(|i| i.time));
        if self.status.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs_f64(STATUS_DURATION));
        }

        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_sink(config: &AppConfig) -> Box<dyn ImageSink> {
    Box::new(crate::export::FileSink::new(&config.export_dir))
}

#[cfg(target_arch = "wasm32")]
fn default_sink(_config: &AppConfig) -> Box<dyn ImageSink> {
    Box::new(crate::export::DownloadSink)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_expires_after_duration() {
        let config = AppConfig {
            export_file_name: "drawing.bmp".to_owned(),
            ..Default::default()
        };
        let mut app = PaintApp::with_config(config);
        app.ensure_canvas(egui::vec2(10.0, 10.0), 1.0);

        app.execute_command(Command::Save);
        assert_eq!(app.status_text().map(|(_, is_error)| is_error), Some(true));

        // The first tick starts the clock
        app.tick_status(100.0);
        app.tick_status(100.0 + STATUS_DURATION - 0.5);
        assert!(app.status_text().is_some());

        app.tick_status(100.0 + STATUS_DURATION);
        assert!(app.status_text().is_none());
    }
}
