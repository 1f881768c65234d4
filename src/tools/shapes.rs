//! Geometry for the anchored shape tools.
//!
//! Every shape is derived from the press position (`anchor`) and the live
//! pointer position, so a preview can be redrawn from scratch on each move.

use egui::{Pos2, Rect, pos2};

use super::{ShapeStyle, ToolKind};
use crate::canvas::Canvas;

/// Axis-aligned rectangle spanned by the drag, regardless of direction
pub fn rect_from_drag(anchor: Pos2, pos: Pos2) -> Rect {
    Rect::from_two_pos(anchor, pos)
}

/// Circle centred on the anchor, passing through the pointer
pub fn circle_radius(anchor: Pos2, pos: Pos2) -> f32 {
    anchor.distance(pos)
}

/// Apex at the anchor; the base runs from the pointer to its mirror image
/// across the anchor's vertical axis.
pub fn triangle_vertices(anchor: Pos2, pos: Pos2) -> [Pos2; 3] {
    [anchor, pos, pos2(2.0 * anchor.x - pos.x, pos.y)]
}

pub fn draw_shape(canvas: &mut Canvas, tool: ToolKind, anchor: Pos2, pos: Pos2, style: &ShapeStyle) {
    match tool {
        ToolKind::Rectangle => {
            let rect = rect_from_drag(anchor, pos);
            if style.fill {
                canvas.fill_rect(rect, style.color);
            } else {
                canvas.stroke_rect(rect, style.color, style.width);
            }
        }
        ToolKind::Circle => {
            let radius = circle_radius(anchor, pos);
            if style.fill {
                canvas.fill_circle(anchor, radius, style.color);
            } else {
                canvas.stroke_circle(anchor, radius, style.color, style.width);
            }
        }
        ToolKind::Line => canvas.stroke_line(anchor, pos, style.color, style.width),
        ToolKind::Triangle => {
            let vertices = triangle_vertices(anchor, pos);
            if style.fill {
                canvas.fill_polygon(&vertices, style.color);
            } else {
                canvas.stroke_polygon(&vertices, style.color, style.width);
            }
        }
        ToolKind::Brush | ToolKind::Eraser => {
            log::debug!("{tool} is not a shape tool");
        }
    }
}
