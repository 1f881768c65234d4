use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;

mod freehand;
pub mod shapes;

pub use freehand::StrokePath;

pub const MIN_BRUSH_WIDTH: f32 = 1.0;
pub const MAX_BRUSH_WIDTH: f32 = 50.0;

/// All available drawing modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Brush,
    Eraser,
    Rectangle,
    Circle,
    Line,
    Triangle,
}

impl ToolKind {
    /// Toolbar order
    pub const ALL: [ToolKind; 6] = [
        ToolKind::Brush,
        ToolKind::Eraser,
        ToolKind::Rectangle,
        ToolKind::Circle,
        ToolKind::Line,
        ToolKind::Triangle,
    ];

    /// Stable tag, also used as the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            Self::Brush => "brush",
            Self::Eraser => "eraser",
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Line => "line",
            Self::Triangle => "triangle",
        }
    }

    /// Looks a tool up by its tag
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Brush => "Brush",
            Self::Eraser => "Eraser",
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Line => "Line",
            Self::Triangle => "Triangle",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Brush => "🖌",
            Self::Eraser => "⌫",
            Self::Rectangle => "⬜",
            Self::Circle => "⭕",
            Self::Line => "📏",
            Self::Triangle => "🔺",
        }
    }

    /// Brush and eraser follow the pointer; the rest are anchored shapes
    pub fn is_freehand(&self) -> bool {
        matches!(self, Self::Brush | Self::Eraser)
    }

    /// Whether the "fill color" option applies
    pub fn supports_fill(&self) -> bool {
        matches!(self, Self::Rectangle | Self::Circle | Self::Triangle)
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How a gesture gets painted, fixed at press time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub color: Color32,
    pub width: f32,
    pub fill: bool,
}

/// Current tool selection. Changes here are never part of the undo history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub tool: ToolKind,
    pub color: Color32,
    pub brush_width: f32,
    /// Fill rectangles, circles and triangles instead of outlining them
    pub fill_shapes: bool,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: ToolKind::Brush,
            color: Color32::BLACK,
            brush_width: 5.0,
            fill_shapes: false,
        }
    }
}

impl ToolSettings {
    pub fn set_brush_width(&mut self, width: f32) {
        self.brush_width = clamp_brush_width(width);
    }

    /// Style for a gesture that starts now. The eraser paints with the
    /// canvas background.
    pub fn style(&self, background: Color32) -> ShapeStyle {
        let color = if self.tool == ToolKind::Eraser {
            background
        } else {
            self.color
        };

        ShapeStyle {
            color,
            width: clamp_brush_width(self.brush_width),
            fill: self.fill_shapes && self.tool.supports_fill(),
        }
    }
}

pub fn clamp_brush_width(width: f32) -> f32 {
    if width.is_finite() {
        width.clamp(MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH)
    } else {
        MIN_BRUSH_WIDTH
    }
}

/// Paints the current state of a gesture.
///
/// Freehand tools draw the accumulated path; shape tools draw the shape
/// spanned by `anchor` and `pos`.
pub fn render_gesture(
    canvas: &mut Canvas,
    tool: ToolKind,
    anchor: Pos2,
    pos: Pos2,
    path: &StrokePath,
    style: &ShapeStyle,
) {
    if tool.is_freehand() {
        path.draw(canvas, style);
    } else {
        shapes::draw_shape(canvas, tool, anchor, pos, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_names_round_trip() {
        for tool in ToolKind::ALL {
            assert_eq!(ToolKind::from_name(tool.name()), Some(tool));
        }
        assert_eq!(ToolKind::from_name("selection"), None);
    }

    #[test]
    fn test_eraser_uses_background() {
        let settings = ToolSettings {
            tool: ToolKind::Eraser,
            color: Color32::RED,
            ..Default::default()
        };
        assert_eq!(settings.style(Color32::WHITE).color, Color32::WHITE);
    }

    #[test]
    fn test_fill_only_applies_to_closed_shapes() {
        let mut settings = ToolSettings {
            fill_shapes: true,
            ..Default::default()
        };
        settings.tool = ToolKind::Line;
        assert!(!settings.style(Color32::WHITE).fill);
        settings.tool = ToolKind::Circle;
        assert!(settings.style(Color32::WHITE).fill);
    }

    #[test]
    fn test_brush_width_is_clamped() {
        let mut settings = ToolSettings::default();
        settings.set_brush_width(500.0);
        assert_eq!(settings.brush_width, MAX_BRUSH_WIDTH);
        settings.set_brush_width(f32::NAN);
        assert_eq!(settings.brush_width, MIN_BRUSH_WIDTH);
    }
}
