use crate::app::MemeApp;
use crate::messages::WorkerCommand;

const OPEN_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
const SAVE_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
const QUIT_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

pub fn show(ctx: &egui::Context, app: &mut MemeApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let button = egui::Button::new("Open Image...")
                    .shortcut_text(ctx.format_shortcut(&OPEN_SHORTCUT));
                if ui.add(button).clicked() {
                    ui.close();
                    open_file(app);
                }

                let button = egui::Button::new("Save As...")
                    .shortcut_text(ctx.format_shortcut(&SAVE_SHORTCUT));
                if ui.add(button).clicked() {
                    ui.close();
                    save_file(app);
                }

                ui.separator();

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                let button = egui::Button::new("Quit")
                    .shortcut_text(ctx.format_shortcut(&QUIT_SHORTCUT));
                if ui.add(button).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Speech", |ui| {
                if ui.button("Refresh Voices").clicked() {
                    ui.close();
                    app.refresh_voices();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&OPEN_SHORTCUT)) {
            open_file(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&SAVE_SHORTCUT)) {
            save_file(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&QUIT_SHORTCUT)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

pub(crate) fn open_file(app: &mut MemeApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "webp"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadImage { path });
        }
    });
}

fn save_file(app: &mut MemeApp) {
    let cmd_tx = app.cmd_tx.clone();
    let image = app.controller.canvas().pixels().clone();
    let file_name = app
        .ui_state
        .file_path
        .as_ref()
        .and_then(|p| p.file_stem())
        .map(|s| format!("{}_meme.png", s.to_string_lossy()))
        .unwrap_or_else(|| "meme.png".to_string());
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name(file_name)
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::SaveImage { path, image });
        }
    });
}

fn export_config(app: &mut MemeApp) {
    let config = app.controller.config().clone();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("meme.toml")
            .save_file()
        {
            match toml::to_string_pretty(&config) {
                Ok(content) => {
                    if let Err(e) = std::fs::write(&path, content) {
                        tracing::warn!("Failed to write {}: {e}", path.display());
                    }
                }
                Err(e) => tracing::warn!("Failed to serialize config: {e}"),
            }
        }
    });
}
