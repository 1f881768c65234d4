use eframe::egui::{self, Color32, TextureHandle, TextureOptions};

use crate::canvas::Canvas;

/// Keeps a GPU texture in step with the raster canvas
#[derive(Default)]
pub struct CanvasTexture {
    handle: Option<TextureHandle>,
    synced_version: Option<u64>,
}

impl CanvasTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the next `sync` would upload pixels
    pub fn is_stale(&self, canvas: &Canvas) -> bool {
        self.handle.is_none() || self.synced_version != Some(canvas.version())
    }

    /// Uploads the canvas if it changed since the last call
    pub fn sync(&mut self, ctx: &egui::Context, canvas: &Canvas) -> egui::TextureId {
        let stale = self.is_stale(canvas);
        let mut uploaded = false;
        let handle = self.handle.get_or_insert_with(|| {
            uploaded = true;
            ctx.load_texture("sketch_canvas", canvas.to_color_image(), TextureOptions::LINEAR)
        });
        if stale && !uploaded {
            handle.set(canvas.to_color_image(), TextureOptions::LINEAR);
        }
        self.synced_version = Some(canvas.version());
        handle.id()
    }

    /// Paints the canvas at its logical size with its top-left at `rect.min`
    pub fn paint(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: egui::Rect, canvas: &Canvas) {
        let texture_id = self.sync(ctx, canvas);
        let target = egui::Rect::from_min_size(rect.min, canvas.logical_size());
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter.image(texture_id, target, uv, Color32::WHITE);
    }

    /// Drops the texture, e.g. after the canvas was recreated
    pub fn reset(&mut self) {
        self.handle = None;
        self.synced_version = None;
    }
}

impl std::fmt::Debug for CanvasTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasTexture")
            .field("loaded", &self.handle.is_some())
            .field("synced_version", &self.synced_version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_only_reuploads_after_change() {
        let ctx = egui::Context::default();
        let mut canvas = Canvas::new(8, 8, 1.0, Color32::WHITE).unwrap();
        let mut texture = CanvasTexture::new();

        assert!(texture.is_stale(&canvas));
        texture.sync(&ctx, &canvas);
        assert!(!texture.is_stale(&canvas));

        canvas.clear();
        assert!(texture.is_stale(&canvas));
    }
}
