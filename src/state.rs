use egui::Pos2;

use crate::canvas::Canvas;
use crate::command::SnapshotHistory;
use crate::snapshot::Snapshot;
use crate::tools::{self, ShapeStyle, StrokePath, ToolKind, ToolSettings};

/// A press-drag-release gesture in progress
#[derive(Debug, Clone)]
pub struct DrawingSession {
    pub tool: ToolKind,
    /// Pointer position at press time
    pub anchor: Pos2,
    pub style: ShapeStyle,
    /// Canvas as it was before the gesture; restored before every preview
    before: Snapshot,
    path: StrokePath,
}

impl DrawingSession {
    pub fn before(&self) -> &Snapshot {
        &self.before
    }

    pub fn path(&self) -> &StrokePath {
        &self.path
    }
}

#[derive(Debug, Default)]
pub enum EditorState {
    #[default]
    Idle,
    Drawing(DrawingSession),
}

impl EditorState {
    /// Starts a gesture at `pos`.
    ///
    /// The current canvas is captured once and recorded as the undo point
    /// for this action.
    pub fn begin_drawing(
        &mut self,
        pos: Pos2,
        canvas: &Canvas,
        history: &mut SnapshotHistory,
        settings: &ToolSettings,
    ) {
        if self.is_drawing() {
            log::debug!("Pointer pressed while already drawing; keeping current gesture");
            return;
        }

        let before = canvas.snapshot();
        history.record(before.clone());

        let session = DrawingSession {
            tool: settings.tool,
            anchor: pos,
            style: settings.style(canvas.background()),
            before,
            path: StrokePath::new(pos),
        };
        log::debug!("Started {} gesture at {:?}", session.tool, pos);
        *self = Self::Drawing(session);
    }

    /// Redraws the gesture for the new pointer position on top of the
    /// pre-gesture canvas, so earlier previews leave no trail.
    pub fn continue_drawing(&mut self, pos: Pos2, canvas: &mut Canvas) {
        let Self::Drawing(session) = self else {
            return;
        };

        if session.tool.is_freehand() {
            session.path.add_point(pos);
        }

        if let Err(err) = canvas.restore(&session.before) {
            log::error!("Failed to restore pre-gesture canvas: {err}");
            return;
        }
        tools::render_gesture(canvas, session.tool, session.anchor, pos, &session.path, &session.style);
    }

    /// Ends the gesture; whatever is on the canvas is now committed.
    /// Returns true if a gesture was active.
    pub fn finish_drawing(&mut self) -> bool {
        match std::mem::take(self) {
            Self::Drawing(session) => {
                log::debug!("Finished {} gesture", session.tool);
                true
            }
            Self::Idle => false,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing(_))
    }

    pub fn session(&self) -> Option<&DrawingSession> {
        match self {
            Self::Drawing(session) => Some(session),
            Self::Idle => None,
        }
    }
}
