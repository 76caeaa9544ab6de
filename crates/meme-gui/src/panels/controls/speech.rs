use meme_core::volume::VolumeTier;

use crate::app::MemeApp;

pub(super) fn speech_section(ui: &mut egui::Ui, app: &mut MemeApp) {
    let status = if app.ui_state.voice_labels.is_empty() {
        Some("unavailable")
    } else {
        None
    };
    super::section_header(ui, "Speech", status);
    ui.add_space(4.0);

    let labels = &app.ui_state.voice_labels;
    let mut selected = app.ui_state.selected_voice;
    let selected_text = labels.get(selected).cloned().unwrap_or_default();
    let changed = ui
        .add_enabled_ui(!labels.is_empty(), |ui| {
            egui::ComboBox::from_label("Voice")
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    let mut changed = false;
                    for (i, label) in labels.iter().enumerate() {
                        if ui.selectable_value(&mut selected, i, label).changed() {
                            changed = true;
                        }
                    }
                    changed
                })
                .inner
                == Some(true)
        })
        .inner;
    if changed {
        app.ui_state.selected_voice = selected;
        app.select_voice(selected);
    }

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(volume_icon(app.ui_state.volume_tier))
            .on_hover_text(
                app.controller
                    .config()
                    .icons
                    .for_tier(app.ui_state.volume_tier)
                    .display()
                    .to_string(),
            );
        let mut volume = app.ui_state.volume;
        let response = ui.add(
            egui::Slider::new(&mut volume, 0..=100)
                .text("Volume")
                .clamping(egui::SliderClamping::Always),
        );
        if response.changed() {
            app.ui_state.volume = volume;
            app.set_volume(volume);
        }
    });
}

fn volume_icon(tier: VolumeTier) -> &'static str {
    match tier {
        VolumeTier::Muted => "🔇",
        VolumeTier::Low => "🔈",
        VolumeTier::Medium => "🔉",
        VolumeTier::High => "🔊",
    }
}
