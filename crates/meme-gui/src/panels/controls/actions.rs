use meme_core::controls::ControlKind;

use crate::app::MemeApp;

pub(super) fn actions_section(ui: &mut egui::Ui, app: &mut MemeApp) {
    super::section_header(ui, "Actions", None);
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        for kind in ControlKind::ALL {
            let enabled = app.controller.is_enabled(kind);
            if ui
                .add_enabled(enabled, egui::Button::new(kind.to_string()))
                .clicked()
            {
                match kind {
                    ControlKind::Generate => app.generate(),
                    ControlKind::Clear => app.clear(),
                    ControlKind::ReadAloud => app.read_aloud(),
                }
            }
        }
    });
}
