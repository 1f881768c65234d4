use super::SnapshotHistory;
use crate::canvas::Canvas;
use crate::export::ImageSink;
use crate::state::EditorState;
use crate::tools::ToolSettings;

/// Everything a command may touch, borrowed from the app for one call
pub struct CommandContext<'a> {
    pub canvas: &'a mut Canvas,
    pub history: &'a mut SnapshotHistory,
    pub settings: &'a mut ToolSettings,
    pub state: &'a mut EditorState,
    /// Where the save action delivers the encoded image
    pub sink: &'a mut dyn ImageSink,
    pub export_file_name: &'a str,
}
