use crate::app::MemeApp;

pub fn show(ctx: &egui::Context, app: &mut MemeApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area — fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            let size = app.controller.config().canvas.clone();
            ui.label(format!("Canvas: {}x{}", size.width, size.height));
            ui.separator();
            if let Some(placement) = app.controller.placement() {
                ui.label(format!(
                    "Image: {:.0}x{:.0} at ({:.0}, {:.0})",
                    placement.width, placement.height, placement.start_x, placement.start_y
                ));
                ui.separator();
            }
            ui.label(format!("Volume: {}%", app.ui_state.volume));
        });

        ui.add_space(2.0);
    });
}
