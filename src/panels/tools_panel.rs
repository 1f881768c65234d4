use eframe::egui;

use crate::PaintApp;
use crate::command::Command;
use crate::components::tool_button::ToolButton;
use crate::tools::{MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH, ToolKind};

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    let mut commands = Vec::new();

    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            let settings = app.settings().clone();

            ui.heading("Shapes");
            ui.horizontal_wrapped(|ui| {
                for tool in ToolKind::ALL.into_iter().filter(|tool| !tool.is_freehand()) {
                    if ToolButton::new(tool, settings.tool == tool).show(ui).clicked() {
                        commands.push(Command::SelectTool(tool));
                    }
                }
            });

            let mut fill = settings.fill_shapes;
            if ui.checkbox(&mut fill, "Fill color").changed() {
                commands.push(Command::SetFillShapes(fill));
            }

            ui.separator();
            ui.heading("Options");
            ui.horizontal(|ui| {
                for tool in ToolKind::ALL.into_iter().filter(ToolKind::is_freehand) {
                    if ToolButton::new(tool, settings.tool == tool).show(ui).clicked() {
                        commands.push(Command::SelectTool(tool));
                    }
                }
            });

            let mut width = settings.brush_width;
            ui.horizontal(|ui| {
                ui.label("Size:");
                if ui
                    .add(egui::Slider::new(&mut width, MIN_BRUSH_WIDTH..=MAX_BRUSH_WIDTH))
                    .changed()
                {
                    commands.push(Command::SetBrushWidth(width));
                }
            });

            ui.separator();
            ui.heading("Colors");
            ui.horizontal_wrapped(|ui| {
                for swatch in SWATCHES {
                    let selected = settings.color == swatch;
                    if color_swatch(ui, swatch, selected).clicked() && !selected {
                        commands.push(Command::SetColor(swatch));
                    }
                }

                let mut color = settings.color;
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    commands.push(Command::SetColor(color));
                }
            });

            ui.separator();
            ui.horizontal(|ui| {
                let history = app.history();
                if ui
                    .add_enabled(history.can_undo(), egui::Button::new("Undo"))
                    .clicked()
                {
                    commands.push(Command::Undo);
                }
                if ui
                    .add_enabled(history.can_redo(), egui::Button::new("Redo"))
                    .clicked()
                {
                    commands.push(Command::Redo);
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Clear Canvas").clicked() {
                    commands.push(Command::Clear);
                }
                if ui.button("Save As Image").clicked() {
                    commands.push(Command::Save);
                }
            });

            ui.separator();
            let history = app.history();
            ui.label(format!("Undo stack size: {}", history.undo_len()));
            ui.label(format!("Redo stack size: {}", history.redo_len()));
            if let Some(canvas) = app.canvas() {
                ui.label(format!("Canvas: {}x{} px", canvas.width(), canvas.height()));
            }

            if let Some((text, is_error)) = app.status_text() {
                let color = if is_error {
                    ui.visuals().error_fg_color
                } else {
                    ui.visuals().weak_text_color()
                };
                ui.colored_label(color, text);
            }
        });

    for command in commands {
        app.execute_command(command);
    }
}

const SWATCHES: [egui::Color32; 5] = [
    egui::Color32::WHITE,
    egui::Color32::BLACK,
    egui::Color32::from_rgb(0xe0, 0x2d, 0x2d),
    egui::Color32::from_rgb(0x6d, 0xd4, 0x00),
    egui::Color32::from_rgb(0x4a, 0x98, 0xf7),
];

fn color_swatch(ui: &mut egui::Ui, color: egui::Color32, selected: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(20.0, 20.0), egui::Sense::click());
    if ui.is_rect_visible(rect) {
        let center = rect.center();
        ui.painter().circle_filled(center, 9.0, color);
        let stroke = if selected {
            egui::Stroke::new(2.0, ui.visuals().selection.stroke.color)
        } else {
            egui::Stroke::new(1.0, egui::Color32::from_gray(140))
        };
        ui.painter().circle_stroke(center, 9.0, stroke);
    }
    response
}
