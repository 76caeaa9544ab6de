use meme_core::speech::espeak::parse_voice_list;

const VOICES: &str = "\
Pty Language       Age/Gender VoiceName          File                 Other Languages
 5  af              --/M      Afrikaans          gmw/af
 5  de              --/M      German             gmw/de
 2  en              --/M      English_(Great_Britain) gmw/en            (en 2)
 5  en-us           --/M      English_(America)  gmw/en-US            (en 3)
";

#[test]
fn test_parse_voice_list() {
    let voices = parse_voice_list(VOICES);
    assert_eq!(voices.len(), 4);
    assert_eq!(voices[0].name, "Afrikaans");
    assert_eq!(voices[0].lang, "af");
    assert_eq!(voices[2].name, "English (Great Britain)");
    assert_eq!(voices[3].lang, "en-us");
}

#[test]
fn test_default_voice_is_plain_english() {
    let voices = parse_voice_list(VOICES);
    let defaults: Vec<_> = voices.iter().filter(|v| v.default).collect();
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0].lang, "en");
    assert_eq!(defaults[0].label(), "English (Great Britain) (en) -- DEFAULT");
}

#[test]
fn test_default_falls_back_to_first_voice() {
    let text = "\
Pty Language Age/Gender VoiceName File
 5  fr  --/M  French  roa/fr
 5  it  --/M  Italian  roa/it
";
    let voices = parse_voice_list(text);
    assert!(voices[0].default);
    assert!(!voices[1].default);
}

#[test]
fn test_parse_empty_output() {
    assert!(parse_voice_list("").is_empty());
    assert!(parse_voice_list("Pty Language Age/Gender VoiceName File\n").is_empty());
}

#[cfg(unix)]
#[test]
fn test_speak_reaps_child_that_ignores_stdin() {
    use meme_core::error::MemeError;
    use meme_core::speech::{EspeakSpeech, SpeechService, Utterance};

    // `true` exits without reading, so a large caption hits a closed pipe.
    let mut speech = EspeakSpeech::new("true");
    let utterance = Utterance {
        text: "meme ".repeat(256 * 1024),
        voice: None,
        pitch: 1.0,
        rate: 1.0,
        volume: 1.0,
    };

    let result = speech.speak(utterance);
    assert!(matches!(result, Err(MemeError::Speech(_))));
    assert!(!speech.is_speaking());
    speech.cancel();
}
