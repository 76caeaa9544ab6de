use crate::app::MemeApp;

pub(super) fn captions_section(ui: &mut egui::Ui, app: &mut MemeApp) {
    super::section_header(ui, "Captions", None);
    ui.add_space(4.0);

    ui.label("Top text");
    ui.add(egui::TextEdit::singleline(&mut app.ui_state.top_text).hint_text("TOP TEXT"));
    ui.add_space(4.0);
    ui.label("Bottom text");
    ui.add(egui::TextEdit::singleline(&mut app.ui_state.bottom_text).hint_text("BOTTOM TEXT"));
}
