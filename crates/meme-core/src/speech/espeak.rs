use std::io::Write;
use std::process::{Child, Command, Stdio};

use tracing::{debug, info, warn};

use super::{SpeechService, Utterance, Voice};
use crate::consts::{ESPEAK_BASE_PITCH, ESPEAK_BASE_WPM, ESPEAK_MAX_AMPLITUDE};
use crate::error::{MemeError, Result};

/// Language espeak-ng speaks when no voice is given.
const ESPEAK_DEFAULT_LANG: &str = "en";

/// Speech service driving the `espeak-ng` command-line synthesizer.
///
/// Each utterance runs in its own child process; at most one is tracked.
pub struct EspeakSpeech {
    command: String,
    child: Option<Child>,
}

impl EspeakSpeech {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            child: None,
        }
    }

    /// Block until the current utterance finishes.
    pub fn wait(&mut self) -> Result<()> {
        if let Some(mut child) = self.child.take() {
            let status = child.wait()?;
            if !status.success() {
                return Err(MemeError::Speech(format!(
                    "{} exited with {status}",
                    self.command
                )));
            }
        }
        Ok(())
    }

    fn args_for(utterance: &Utterance) -> Vec<String> {
        let pitch = (utterance.pitch * ESPEAK_BASE_PITCH).clamp(0.0, 99.0).round();
        let wpm = (utterance.rate * ESPEAK_BASE_WPM).clamp(80.0, 450.0).round();
        let amplitude = (utterance.volume * ESPEAK_MAX_AMPLITUDE)
            .clamp(0.0, ESPEAK_MAX_AMPLITUDE)
            .round();

        let mut args = Vec::new();
        if let Some(ref voice) = utterance.voice {
            args.push("-v".to_string());
            args.push(voice.lang.clone());
        }
        args.extend([
            "-p".to_string(),
            format!("{pitch}"),
            "-s".to_string(),
            format!("{wpm}"),
            "-a".to_string(),
            format!("{amplitude}"),
            "--stdin".to_string(),
        ]);
        args
    }
}

impl SpeechService for EspeakSpeech {
    fn voices(&mut self) -> Result<Vec<Voice>> {
        let output = Command::new(&self.command)
            .arg("--voices")
            .output()
            .map_err(|e| MemeError::Speech(format!("failed to run {}: {e}", self.command)))?;
        if !output.status.success() {
            return Err(MemeError::Speech(format!(
                "{} --voices exited with {}",
                self.command, output.status
            )));
        }
        let voices = parse_voice_list(&String::from_utf8_lossy(&output.stdout));
        debug!(count = voices.len(), "Enumerated espeak voices");
        Ok(voices)
    }

    fn is_speaking(&mut self) -> bool {
        let Some(child) = self.child.as_mut() else {
            return false;
        };
        match child.try_wait() {
            Ok(None) => true,
            Ok(Some(_)) => {
                self.child = None;
                false
            }
            Err(e) => {
                warn!("Failed to poll speech process: {e}");
                self.child = None;
                false
            }
        }
    }

    fn speak(&mut self, utterance: Utterance) -> Result<()> {
        let args = Self::args_for(&utterance);
        let mut child = Command::new(&self.command)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| MemeError::Speech(format!("failed to run {}: {e}", self.command)))?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(utterance.text.as_bytes()) {
                // The child is not tracked yet, so reap it here.
                drop(stdin);
                if let Err(kill_err) = child.kill() {
                    debug!("Speech process already finished: {kill_err}");
                }
                let _ = child.wait();
                return Err(MemeError::Speech(format!(
                    "failed to send text to {}: {e}",
                    self.command
                )));
            }
        }

        info!(
            voice = utterance.voice.as_ref().map(|v| v.name.as_str()),
            volume = utterance.volume,
            "Speaking captions"
        );
        self.child = Some(child);
        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.kill() {
                debug!("Speech process already finished: {e}");
            }
            let _ = child.wait();
        }
    }
}

impl Drop for EspeakSpeech {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Parse the table printed by `espeak-ng --voices`.
///
/// Columns are `Pty Language Age/Gender VoiceName File [Other Languages]`.
/// Underscores in voice names stand for spaces. The voice for espeak's
/// built-in default language is flagged as default, or the first voice when
/// that language is not installed.
pub fn parse_voice_list(output: &str) -> Vec<Voice> {
    let mut voices: Vec<Voice> = output
        .lines()
        .skip_while(|line| !line.trim_start().starts_with("Pty"))
        .skip(1)
        .filter_map(|line| {
            let mut cols = line.split_whitespace();
            let _priority = cols.next()?;
            let lang = cols.next()?;
            let _age_gender = cols.next()?;
            let name = cols.next()?;
            Some(Voice {
                name: name.replace('_', " "),
                lang: lang.to_string(),
                default: false,
            })
        })
        .collect();

    let default_index = voices
        .iter()
        .position(|v| v.lang == ESPEAK_DEFAULT_LANG)
        .unwrap_or(0);
    if let Some(voice) = voices.get_mut(default_index) {
        voice.default = true;
    }
    voices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_map_utterance_ranges() {
        let utterance = Utterance {
            text: "hi".into(),
            voice: Some(Voice {
                name: "English".into(),
                lang: "en".into(),
                default: true,
            }),
            pitch: 1.0,
            rate: 1.0,
            volume: 0.5,
        };
        let args = EspeakSpeech::args_for(&utterance);
        assert_eq!(
            args,
            ["-v", "en", "-p", "50", "-s", "175", "-a", "100", "--stdin"]
        );
    }
}
