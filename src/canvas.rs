use egui::{Color32, Pos2, Rect, Vec2};
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

use crate::error::CanvasError;
use crate::snapshot::Snapshot;

/// Raster drawing surface.
///
/// Pixels are stored at physical resolution. Every draw primitive takes
/// logical coordinates and widths, which are multiplied by `scale` (the
/// device pixel ratio) before rasterizing, so the picture stays sharp on
/// high-density displays.
pub struct Canvas {
    pixmap: Pixmap,
    scale: f32,
    background: Color32,
    version: u64,
}

impl Canvas {
    /// Creates a `width` x `height` pixel surface filled with `background`
    pub fn new(width: u32, height: u32, scale: f32, background: Color32) -> Result<Self, CanvasError> {
        let pixmap = Pixmap::new(width, height)
            .ok_or(CanvasError::InvalidDimensions { width, height })?;
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };

        let mut canvas = Self {
            pixmap,
            scale,
            background,
            version: 0,
        };
        canvas.clear();
        Ok(canvas)
    }

    /// Creates a surface covering `logical_size` points at the given scale
    pub fn with_logical_size(logical_size: Vec2, scale: f32, background: Color32) -> Result<Self, CanvasError> {
        let width = (logical_size.x * scale).round().max(0.0) as u32;
        let height = (logical_size.y * scale).round().max(0.0) as u32;
        Self::new(width, height, scale, background)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Size of the surface in logical units
    pub fn logical_size(&self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32) / self.scale
    }

    /// Bumped on every pixel mutation
    pub fn version(&self) -> u64 {
        self.version
    }

    fn mark_modified(&mut self) {
        self.version += 1;
    }

    fn transform(&self) -> Transform {
        Transform::from_scale(self.scale, self.scale)
    }

    fn paint(color: Color32) -> Paint<'static> {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;
        paint
    }

    fn fill(&mut self, path: &Path, color: Color32) {
        let transform = self.transform();
        self.pixmap
            .fill_path(path, &Self::paint(color), FillRule::Winding, transform, None);
        self.mark_modified();
    }

    fn stroke(&mut self, path: &Path, color: Color32, stroke: &Stroke) {
        let transform = self.transform();
        self.pixmap
            .stroke_path(path, &Self::paint(color), stroke, transform, None);
        self.mark_modified();
    }

    /// Fills the whole surface with the background color
    pub fn clear(&mut self) {
        let [r, g, b, a] = self.background.to_srgba_unmultiplied();
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
        self.mark_modified();
    }

    /// Strokes a freehand path with round caps and joins
    pub fn stroke_polyline(&mut self, points: &[Pos2], color: Color32, width: f32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        if rest.is_empty() || width <= 0.0 {
            return;
        }

        let mut pb = PathBuilder::new();
        pb.move_to(first.x, first.y);
        for point in rest {
            pb.line_to(point.x, point.y);
        }

        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width,
                line_cap: LineCap::Round,
                line_join: LineJoin::Round,
                ..Default::default()
            };
            self.stroke(&path, color, &stroke);
        }
    }

    pub fn stroke_line(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32) {
        if from == to || width <= 0.0 {
            return;
        }

        let mut pb = PathBuilder::new();
        pb.move_to(from.x, from.y);
        pb.line_to(to.x, to.y);

        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width,
                ..Default::default()
            };
            self.stroke(&path, color, &stroke);
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color32) {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        if let Some(path) = rect_path(rect) {
            self.fill(&path, color);
        }
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: Color32, width: f32) {
        if (rect.width() <= 0.0 && rect.height() <= 0.0) || width <= 0.0 {
            return;
        }
        if let Some(path) = rect_path(rect) {
            let stroke = Stroke {
                width,
                ..Default::default()
            };
            self.stroke(&path, color, &stroke);
        }
    }

    pub fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        if radius <= 0.0 {
            return;
        }
        if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
            self.fill(&path, color);
        }
    }

    pub fn stroke_circle(&mut self, center: Pos2, radius: f32, color: Color32, width: f32) {
        if radius <= 0.0 || width <= 0.0 {
            return;
        }
        if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
            let stroke = Stroke {
                width,
                ..Default::default()
            };
            self.stroke(&path, color, &stroke);
        }
    }

    pub fn fill_polygon(&mut self, points: &[Pos2], color: Color32) {
        if let Some(path) = polygon_path(points) {
            self.fill(&path, color);
        }
    }

    pub fn stroke_polygon(&mut self, points: &[Pos2], color: Color32, width: f32) {
        if width <= 0.0 {
            return;
        }
        if let Some(path) = polygon_path(points) {
            let stroke = Stroke {
                width,
                ..Default::default()
            };
            self.stroke(&path, color, &stroke);
        }
    }

    /// Captures the full raster
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.pixmap.clone())
    }

    /// Writes a captured raster back onto the surface
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), CanvasError> {
        if snapshot.size() != (self.width(), self.height()) {
            return Err(CanvasError::SnapshotSizeMismatch {
                snapshot: snapshot.size(),
                canvas: (self.width(), self.height()),
            });
        }
        self.pixmap.data_mut().copy_from_slice(snapshot.data());
        self.mark_modified();
        Ok(())
    }

    /// Returns true if the surface holds exactly the captured pixels
    pub fn matches(&self, snapshot: &Snapshot) -> bool {
        snapshot.size() == (self.width(), self.height()) && snapshot.data() == self.pixmap.data()
    }

    /// Reads one physical pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Color32::from_rgba_unmultiplied(c.red(), c.green(), c.blue(), c.alpha())
        })
    }

    /// Reads the pixel under a logical position
    pub fn pixel_at(&self, pos: Pos2) -> Option<Color32> {
        if pos.x < 0.0 || pos.y < 0.0 {
            return None;
        }
        self.pixel((pos.x * self.scale) as u32, (pos.y * self.scale) as u32)
    }

    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_premultiplied(
            [self.width() as usize, self.height() as usize],
            self.pixmap.data(),
        )
    }

    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let width = self.width();
        let pixels = self.pixmap.pixels();
        image::RgbaImage::from_fn(width, self.height(), |x, y| {
            let c = pixels[(y * width + x) as usize].demultiply();
            image::Rgba([c.red(), c.green(), c.blue(), c.alpha()])
        })
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("scale", &self.scale)
            .field("version", &self.version)
            .finish()
    }
}

fn rect_path(rect: Rect) -> Option<Path> {
    tiny_skia::Rect::from_ltrb(rect.min.x, rect.min.y, rect.max.x, rect.max.y).map(PathBuilder::from_rect)
}

fn polygon_path(points: &[Pos2]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    if rest.len() < 2 {
        return None;
    }

    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for point in rest {
        pb.line_to(point.x, point.y);
    }
    pb.close();
    pb.finish()
}
