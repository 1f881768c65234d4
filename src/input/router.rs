use crate::canvas::Canvas;
use crate::command::{Command, SnapshotHistory};
use crate::state::EditorState;
use crate::tools::ToolSettings;

use super::InputEvent;

/// Applies one input event to the drawing state.
///
/// Pointer events drive the gesture directly; shortcuts are handed back so
/// the caller can run them like any toolbar command.
pub fn route_event(
    event: &InputEvent,
    state: &mut EditorState,
    canvas: &mut Canvas,
    history: &mut SnapshotHistory,
    settings: &ToolSettings,
) -> Option<Command> {
    match event {
        InputEvent::PointerDown { pos } => {
            state.begin_drawing(*pos, canvas, history, settings);
            None
        }
        InputEvent::PointerMove { pos } => {
            state.continue_drawing(*pos, canvas);
            None
        }
        InputEvent::PointerUp { .. } => {
            state.finish_drawing();
            None
        }
        InputEvent::Shortcut(command) => Some(command.clone()),
    }
}
