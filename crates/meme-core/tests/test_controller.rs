mod common;

use approx::assert_relative_eq;

use common::{recording_controller, sample_voices, FakeSpeech};
use meme_core::canvas::{Color, DrawCommand};
use meme_core::controller::ReadAloud;
use meme_core::controls::ControlKind;
use meme_core::error::MemeError;
use meme_core::geometry::{Rect, Size};
use meme_core::volume::VolumeTier;

fn loaded() -> meme_core::controller::MemeController<meme_core::canvas::RecordingCanvas, FakeSpeech>
{
    let mut c = recording_controller(FakeSpeech::with_voices(sample_voices()));
    c.on_image_loaded(&Size::new(800.0, 400.0)).unwrap();
    c
}

#[test]
fn test_actions_disabled_before_image() {
    let mut c = recording_controller(FakeSpeech::default());
    assert!(matches!(
        c.on_generate("a", "b"),
        Err(MemeError::ControlDisabled(ControlKind::Generate))
    ));
    assert!(matches!(
        c.on_clear(),
        Err(MemeError::ControlDisabled(ControlKind::Clear))
    ));
    assert!(matches!(
        c.on_read_aloud(),
        Err(MemeError::ControlDisabled(ControlKind::ReadAloud))
    ));
    assert!(c.canvas().commands().is_empty());
}

#[test]
fn test_image_load_draw_sequence() {
    let c = loaded();
    let cmds = c.canvas().commands();
    assert_eq!(cmds.len(), 3);
    assert_eq!(cmds[0], DrawCommand::ClearRect(Rect::new(0.0, 0.0, 400.0, 300.0)));
    assert_eq!(
        cmds[1],
        DrawCommand::FillRect {
            rect: Rect::new(0.0, 0.0, 400.0, 300.0),
            color: Color::BLACK,
        }
    );
    match &cmds[2] {
        DrawCommand::DrawImage { source, placement } => {
            assert_eq!(*source, Size::new(800.0, 400.0));
            assert_relative_eq!(placement.width, 400.0);
            assert_relative_eq!(placement.height, 200.0);
            assert_relative_eq!(placement.start_y, 50.0);
        }
        other => panic!("expected DrawImage, got {other:?}"),
    }
    assert_eq!(c.controls().flags(), [true, false, false]);
}

#[test]
fn test_generate_draws_centered_captions_and_toggles() {
    let mut c = loaded();
    c.on_generate("TOP TEXT", "BOTTOM TEXT").unwrap();

    let texts: Vec<_> = c
        .canvas()
        .commands()
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::DrawText { text, x, y, style } => {
                Some((text.clone(), *x, *y, style.clone()))
            }
            _ => None,
        })
        .collect();
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0].0, "TOP TEXT");
    assert_eq!(texts[1].0, "BOTTOM TEXT");
    assert_relative_eq!(texts[0].1, 200.0);
    assert_relative_eq!(texts[1].1, 200.0);
    assert!(texts[0].2 < texts[1].2);
    assert_relative_eq!(texts[1].2, 300.0 - c.config().caption.bottom_baseline as f64);
    assert_eq!(texts[0].3.max_width, Some(380.0));

    assert_eq!(c.controls().flags(), [false, true, true]);
    assert_eq!(c.captions().spoken_text(), "TOP TEXT BOTTOM TEXT");
}

#[test]
fn test_generate_then_clear_cycle() {
    let mut c = loaded();
    c.on_generate("a", "b").unwrap();
    c.on_clear().unwrap();

    assert_eq!(c.controls().flags(), [true, false, false]);
    assert_eq!(
        c.canvas().commands().last(),
        Some(&DrawCommand::ClearRect(Rect::new(0.0, 0.0, 400.0, 300.0)))
    );
    assert!(c.captions().spoken_text().is_empty());
    assert!(c.placement().is_none());

    assert!(matches!(
        c.on_clear(),
        Err(MemeError::ControlDisabled(ControlKind::Clear))
    ));
}

#[test]
fn test_new_image_resets_baseline_after_generate() {
    let mut c = loaded();
    c.on_generate("a", "b").unwrap();
    c.on_image_loaded(&Size::new(300.0, 600.0)).unwrap();
    assert_eq!(c.controls().flags(), [true, false, false]);
    assert_eq!(c.captions().spoken_text(), "");
}

#[test]
fn test_read_aloud_uses_voice_and_volume() {
    let mut c = loaded();
    c.on_voices_changed().unwrap();
    c.select_voice(1).unwrap();
    c.on_volume_changed(40).unwrap();
    c.on_generate("hello", "world").unwrap();

    assert_eq!(c.on_read_aloud().unwrap(), ReadAloud::Started);

    let spoken = &c.speech().spoken;
    assert_eq!(spoken.len(), 1);
    assert_eq!(spoken[0].text, "hello world");
    assert_eq!(spoken[0].voice.as_ref().map(|v| v.name.as_str()), Some("Amelie"));
    assert_relative_eq!(spoken[0].volume, 0.4);
    assert_relative_eq!(spoken[0].pitch, 1.0);
    assert_relative_eq!(spoken[0].rate, 1.0);
}

#[test]
fn test_read_aloud_dropped_while_speaking() {
    let mut c = loaded();
    c.on_generate("one", "two").unwrap();

    assert_eq!(c.on_read_aloud().unwrap(), ReadAloud::Started);
    assert_eq!(c.on_read_aloud().unwrap(), ReadAloud::Dropped);
    assert_eq!(c.speech().spoken.len(), 1);
    assert_eq!(c.speech().cancelled, 0);

    c.speech_mut().speaking = false;
    assert_eq!(c.on_read_aloud().unwrap(), ReadAloud::Started);
    assert_eq!(c.speech().spoken.len(), 2);
}

#[test]
fn test_clear_cancels_speech_in_flight() {
    let mut c = loaded();
    c.on_generate("one", "two").unwrap();
    c.on_read_aloud().unwrap();
    c.on_clear().unwrap();
    assert_eq!(c.speech().cancelled, 1);
    assert!(!c.speech().speaking);
}

#[test]
fn test_voice_labels_and_selection_preserved() {
    let mut c = recording_controller(FakeSpeech::with_voices(sample_voices()));
    assert!(c.selected_voice().is_none());

    let labels = c.on_voices_changed().unwrap();
    assert_eq!(
        labels,
        vec![
            "Alex (en-US) -- DEFAULT".to_string(),
            "Amelie (fr-CA)".to_string(),
            "Anna (de-DE)".to_string(),
        ]
    );
    assert_eq!(c.selected_voice_index(), Some(0));

    c.select_voice(2).unwrap();
    c.on_voices_changed().unwrap();
    assert_eq!(c.selected_voice_index(), Some(2));

    c.speech_mut().available.truncate(1);
    c.on_voices_changed().unwrap();
    assert_eq!(c.selected_voice_index(), Some(0));

    c.speech_mut().available.clear();
    assert!(c.on_voices_changed().unwrap().is_empty());
    assert!(c.selected_voice().is_none());
}

#[test]
fn test_failed_voice_refresh_drops_selection() {
    let mut c = recording_controller(FakeSpeech::with_voices(sample_voices()));
    c.on_voices_changed().unwrap();
    c.select_voice(2).unwrap();

    c.speech_mut().broken = true;
    assert!(matches!(c.on_voices_changed(), Err(MemeError::Speech(_))));
    assert!(c.voices().is_empty());
    assert_eq!(c.selected_voice_index(), None);

    c.speech_mut().broken = false;
    c.on_voices_changed().unwrap();
    assert_eq!(c.selected_voice_index(), Some(0));
}

#[test]
fn test_select_voice_out_of_range() {
    let mut c = recording_controller(FakeSpeech::with_voices(sample_voices()));
    c.on_voices_changed().unwrap();
    assert!(matches!(
        c.select_voice(3),
        Err(MemeError::VoiceIndexOutOfRange { index: 3, total: 3 })
    ));
}

#[test]
fn test_volume_changes_tier() {
    let mut c = recording_controller(FakeSpeech::default());
    assert_eq!(c.on_volume_changed(0).unwrap(), VolumeTier::Muted);
    assert_eq!(c.on_volume_changed(34).unwrap(), VolumeTier::Medium);
    assert_eq!(c.volume().value(), 34);
    assert!(matches!(
        c.on_volume_changed(250),
        Err(MemeError::VolumeOutOfRange(250))
    ));
    assert_eq!(c.volume().value(), 34);
}
