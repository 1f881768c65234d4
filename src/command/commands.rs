use egui::Color32;

use super::{CommandContext, CommandOutcome, CommandResult};
use crate::export;
use crate::tools::ToolKind;

/// User actions coming from the toolbar or keyboard shortcuts
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Change the active tool
    SelectTool(ToolKind),
    /// Change the paint color
    SetColor(Color32),
    /// Change the stroke width, clamped to the supported range
    SetBrushWidth(f32),
    /// Toggle filled shapes
    SetFillShapes(bool),
    /// Restore the canvas to its state before the last draw action
    Undo,
    /// Re-apply the last undone draw action
    Redo,
    /// Blank the canvas and drop all history
    Clear,
    /// Encode the canvas and hand it to the image sink
    Save,
}

impl Command {
    /// Execute the command with the given context
    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        match self {
            Command::SelectTool(tool) => {
                if ctx.settings.tool == *tool {
                    return Ok(CommandOutcome::NoOp);
                }
                log::debug!("Tool changed: {} -> {}", ctx.settings.tool, tool);
                ctx.settings.tool = *tool;
                Ok(CommandOutcome::Applied)
            }

            Command::SetColor(color) => {
                ctx.settings.color = *color;
                Ok(CommandOutcome::Applied)
            }

            Command::SetBrushWidth(width) => {
                ctx.settings.set_brush_width(*width);
                Ok(CommandOutcome::Applied)
            }

            Command::SetFillShapes(fill) => {
                ctx.settings.fill_shapes = *fill;
                Ok(CommandOutcome::Applied)
            }

            Command::Undo => {
                ctx.state.finish_drawing();
                if !ctx.history.can_undo() {
                    log::debug!("Nothing to undo");
                    return Ok(CommandOutcome::NoOp);
                }
                let current = ctx.canvas.snapshot();
                match ctx.history.undo(current) {
                    Some(previous) => {
                        ctx.canvas.restore(&previous)?;
                        log::debug!(
                            "Undo: {} left, {} redoable",
                            ctx.history.undo_len(),
                            ctx.history.redo_len()
                        );
                        Ok(CommandOutcome::Applied)
                    }
                    None => Ok(CommandOutcome::NoOp),
                }
            }

            Command::Redo => {
                ctx.state.finish_drawing();
                if !ctx.history.can_redo() {
                    log::debug!("Nothing to redo");
                    return Ok(CommandOutcome::NoOp);
                }
                let current = ctx.canvas.snapshot();
                match ctx.history.redo(current) {
                    Some(next) => {
                        ctx.canvas.restore(&next)?;
                        log::debug!(
                            "Redo: {} undoable, {} left",
                            ctx.history.undo_len(),
                            ctx.history.redo_len()
                        );
                        Ok(CommandOutcome::Applied)
                    }
                    None => Ok(CommandOutcome::NoOp),
                }
            }

            Command::Clear => {
                ctx.state.finish_drawing();
                ctx.canvas.clear();
                ctx.history.clear();
                clear_local_storage();
                log::debug!("Canvas cleared");
                Ok(CommandOutcome::Applied)
            }

            Command::Save => {
                let location = export::save(ctx.canvas, ctx.export_file_name, ctx.sink)?;
                log::info!("Saved canvas to {location}");
                Ok(CommandOutcome::Saved(location))
            }
        }
    }
}

/// Browser local storage is wiped along with the canvas
#[cfg(target_arch = "wasm32")]
fn clear_local_storage() {
    match web_sys::window().map(|window| window.local_storage()) {
        Some(Ok(Some(storage))) => {
            if let Err(err) = storage.clear() {
                log::warn!("Failed to clear local storage: {err:?}");
            }
        }
        _ => log::debug!("Local storage unavailable"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn clear_local_storage() {}
