use crate::app::MemeApp;
use crate::panels::menu_bar::open_file;

pub(super) fn file_section(ui: &mut egui::Ui, app: &mut MemeApp) {
    super::section_header(ui, "Image", None);
    ui.add_space(4.0);

    if ui.button("Open...").clicked() {
        open_file(app);
    }

    if let Some(ref name) = app.ui_state.file_name {
        ui.label(name);
    }

    if let Some(placement) = app.controller.placement() {
        ui.small(format!(
            "Drawn at {:.0}x{:.0}",
            placement.width, placement.height
        ));
    }
}
