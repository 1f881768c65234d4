use egui::Pos2;

use super::ShapeStyle;
use crate::canvas::Canvas;

/// Points gathered while a brush or eraser gesture is in progress
#[derive(Debug, Clone, Default)]
pub struct StrokePath {
    points: Vec<Pos2>,
}

impl StrokePath {
    /// Starts a path at the press position
    pub fn new(start: Pos2) -> Self {
        Self {
            points: vec![start],
        }
    }

    /// Appends a point, skipping repeats of the last one
    pub fn add_point(&mut self, point: Pos2) {
        if self.points.last() != Some(&point) {
            self.points.push(point);
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn draw(&self, canvas: &mut Canvas, style: &ShapeStyle) {
        canvas.stroke_polyline(&self.points, style.color, style.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_repeated_points_are_dropped() {
        let mut path = StrokePath::new(pos2(1.0, 1.0));
        path.add_point(pos2(1.0, 1.0));
        path.add_point(pos2(2.0, 2.0));
        path.add_point(pos2(2.0, 2.0));
        path.add_point(pos2(1.0, 1.0));
        assert_eq!(path.points(), &[pos2(1.0, 1.0), pos2(2.0, 2.0), pos2(1.0, 1.0)]);
    }
}
