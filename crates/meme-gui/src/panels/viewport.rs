use meme_core::geometry::{fit, Size};

use crate::app::MemeApp;

pub fn show(ctx: &egui::Context, app: &mut MemeApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        if app.ui_state.file_path.is_none() {
            show_placeholder(ui);
            return;
        }

        let Some(texture) = app.viewport.texture.as_ref() else {
            return;
        };
        let [w, h] = texture.size();
        if let Some(img_rect) = canvas_rect(rect, w, h) {
            ui.painter().image(
                texture.id(),
                img_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
    });
}

/// Largest rect for the canvas texture inside the panel, centered.
fn canvas_rect(panel: egui::Rect, tex_w: usize, tex_h: usize) -> Option<egui::Rect> {
    let available = Size::new(panel.width() as f64, panel.height() as f64);
    let placed = fit(available, Size::from_pixels(tex_w as u32, tex_h as u32)).ok()?;
    let min = panel.min + egui::vec2(placed.start_x as f32, placed.start_y as f32);
    Some(egui::Rect::from_min_size(
        min,
        egui::vec2(placed.width as f32, placed.height as f32),
    ))
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
