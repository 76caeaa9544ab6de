use std::path::Path;
use std::sync::mpsc;

use meme_core::canvas::font::load_font;
use meme_core::canvas::RasterCanvas;
use meme_core::config::MemeConfig;
use meme_core::controller::{MemeController, ReadAloud};
use meme_core::io::image_io::display_name;
use meme_core::speech::EspeakSpeech;

use crate::convert::rgba_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{UIState, ViewportState};
use crate::worker;

/// Config file picked up from the working directory when present.
const CONFIG_FILE: &str = "meme.toml";

pub type Controller = MemeController<RasterCanvas, EspeakSpeech>;

pub struct MemeApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub controller: Controller,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub show_about: bool,
}

impl MemeApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone());

        let mut startup_log = Vec::new();
        let config = load_startup_config(&mut startup_log);
        let canvas = match load_font(&config.caption.font) {
            Ok(font) => RasterCanvas::with_font(config.canvas.width, config.canvas.height, font),
            Err(e) => {
                startup_log.push(format!("ERROR: {e}; captions will not be drawn"));
                RasterCanvas::new(config.canvas.width, config.canvas.height)
            }
        };
        let speech = EspeakSpeech::new(&config.speech.command);
        let controller = MemeController::new(canvas, speech, config);

        let mut ui_state = UIState::new(controller.volume());
        for msg in startup_log {
            ui_state.add_log(msg);
        }

        let mut app = Self {
            cmd_tx,
            result_rx,
            controller,
            ui_state,
            viewport: ViewportState::default(),
            show_about: false,
        };
        app.refresh_voices();
        app
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded { path, image } => {
                    match self.controller.on_image_loaded(&image) {
                        Ok(placement) => {
                            let name = display_name(&path);
                            self.ui_state.add_log(format!(
                                "Opened: {name} ({}x{}, drawn at {:.0}x{:.0})",
                                image.width(),
                                image.height(),
                                placement.width,
                                placement.height
                            ));
                            self.ui_state.file_name = Some(name);
                            self.ui_state.file_path = Some(path);
                            self.ui_state.reset_form();
                            self.viewport.dirty = true;
                        }
                        Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
                    }
                }
                WorkerResult::ImageSaved { path } => {
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    fn update_viewport_texture(&mut self, ctx: &egui::Context) {
        if !self.viewport.dirty {
            return;
        }
        let image = rgba_to_color_image(self.controller.canvas().pixels());
        let texture = ctx.load_texture("canvas", image, egui::TextureOptions::LINEAR);
        self.viewport.texture = Some(texture);
        self.viewport.dirty = false;
    }

    /// Re-enumerate synthesis voices, keeping the current selection.
    pub fn refresh_voices(&mut self) {
        match self.controller.on_voices_changed() {
            Ok(labels) => {
                self.ui_state.add_log(format!("{} voices available", labels.len()));
                self.ui_state.voice_labels = labels;
                self.ui_state.selected_voice =
                    self.controller.selected_voice_index().unwrap_or(0);
            }
            Err(e) => {
                self.ui_state.voice_labels.clear();
                self.ui_state.selected_voice = 0;
                self.ui_state.add_log(format!("Speech unavailable: {e}"));
            }
        }
    }

    pub fn generate(&mut self) {
        let top = self.ui_state.top_text.clone();
        let bottom = self.ui_state.bottom_text.clone();
        match self.controller.on_generate(&top, &bottom) {
            Ok(()) => self.viewport.dirty = true,
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    pub fn clear(&mut self) {
        match self.controller.on_clear() {
            Ok(()) => {
                self.ui_state.reset_form();
                self.viewport.dirty = true;
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    pub fn read_aloud(&mut self) {
        match self.controller.on_read_aloud() {
            Ok(ReadAloud::Started) => {}
            Ok(ReadAloud::Dropped) => {
                self.ui_state.add_log("Still speaking, request ignored".into());
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    pub fn set_volume(&mut self, value: u32) {
        match self.controller.on_volume_changed(value) {
            Ok(tier) => self.ui_state.volume_tier = tier,
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    pub fn select_voice(&mut self, index: usize) {
        if let Err(e) = self.controller.select_voice(index) {
            self.ui_state.add_log(format!("ERROR: {e}"));
        }
    }
}

impl eframe::App for MemeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();
        self.update_viewport_texture(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About Meme Maker")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Meme Maker");
                        ui.label("Caption images and read them aloud");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

fn load_startup_config(log: &mut Vec<String>) -> MemeConfig {
    let path = Path::new(CONFIG_FILE);
    if !path.exists() {
        return MemeConfig::default();
    }
    match MemeConfig::load(path) {
        Ok(config) => {
            log.push(format!("Loaded config from {CONFIG_FILE}"));
            config
        }
        Err(e) => {
            log.push(format!("ERROR: {CONFIG_FILE}: {e}; using defaults"));
            MemeConfig::default()
        }
    }
}
