use eframe::egui;

use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        app.ensure_canvas(ui.available_size(), ctx.pixels_per_point());

        let Some(size) = app.canvas().map(|canvas| canvas.logical_size()) else {
            ui.label("The canvas could not be created.");
            return;
        };

        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::drag());

        let covered = ctx
            .pointer_hover_pos()
            .is_some_and(|pos| rect.contains(pos) && !response.contains_pointer());
        app.handle_input(ctx, rect, covered);
        app.paint_canvas(ctx, ui.painter(), rect);

        if response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
        }
    });
}
