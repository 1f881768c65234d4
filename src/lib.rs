#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod snapshot;
pub mod state;
pub mod tools;

pub use app::PaintApp;
pub use canvas::Canvas;
pub use command::{Command, CommandContext, CommandOutcome, SnapshotHistory};
pub use config::AppConfig;
pub use error::{CanvasError, ConfigError, ExportError};
pub use input::{InputEvent, InputHandler};
pub use renderer::CanvasTexture;
pub use snapshot::Snapshot;
pub use state::EditorState;
pub use tools::{ToolKind, ToolSettings};
