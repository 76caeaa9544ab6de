use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use meme_core::controller::Captions;
use meme_core::speech::{EspeakSpeech, SpeechService, Utterance};
use meme_core::volume::Volume;

use crate::summary::print_utterance;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Args)]
pub struct SayArgs {
    /// Top caption
    #[arg(short, long, default_value = "")]
    pub top: String,

    /// Bottom caption
    #[arg(short, long, default_value = "")]
    pub bottom: String,

    /// Voice index as listed by `meme voices` (default voice if omitted)
    #[arg(long)]
    pub voice: Option<usize>,

    /// Volume 0-100 (overrides config)
    #[arg(long)]
    pub volume: Option<u32>,

    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &SayArgs) -> Result<()> {
    let config = super::load_config(args.config.as_ref())?;
    let mut speech = EspeakSpeech::new(&config.speech.command);

    let voices = speech.voices()?;
    let voice = match args.voice {
        Some(i) => match voices.get(i) {
            Some(v) => Some(v.clone()),
            None => bail!("Voice index {i} out of range ({} voices)", voices.len()),
        },
        None => voices.iter().find(|v| v.default).cloned(),
    };

    let volume = match args.volume {
        Some(v) => Volume::new(v)?,
        None => config.speech.volume,
    };

    let captions = Captions {
        top: args.top.clone(),
        bottom: args.bottom.clone(),
    };
    let text = captions.spoken_text();
    if text.is_empty() {
        bail!("Nothing to say: both captions are empty");
    }

    let utterance = Utterance {
        text,
        voice,
        pitch: config.speech.pitch,
        rate: config.speech.rate,
        volume: volume.fraction(),
    };
    print_utterance(&utterance, volume);
    speech.speak(utterance)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    spinner.set_message("Speaking...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    while speech.is_speaking() {
        thread::sleep(POLL_INTERVAL);
    }
    speech.wait()?;
    spinner.finish_with_message("Done");

    Ok(())
}
