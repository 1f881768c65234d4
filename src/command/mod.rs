mod commands;
mod context;
mod history;

use thiserror::Error;

use crate::error::{CanvasError, ExportError};

pub use commands::Command;
pub use context::CommandContext;
pub use history::SnapshotHistory;

/// What a successfully executed command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command changed editor state
    Applied,
    /// Nothing to do, e.g. undo with an empty history
    NoOp,
    /// The canvas was saved; carries where it went
    Saved(String),
}

/// Result type for command operations
pub type CommandResult = Result<CommandOutcome, CommandError>;

/// Errors that can occur during command execution
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Canvas(#[from] CanvasError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
