use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use meme_core::speech::{EspeakSpeech, SpeechService};

#[derive(Args)]
pub struct VoicesArgs {
    /// TOML config file (for the synthesizer command)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &VoicesArgs) -> Result<()> {
    let config = super::load_config(args.config.as_ref())?;
    let mut speech = EspeakSpeech::new(&config.speech.command);
    let voices = speech.voices()?;

    if voices.is_empty() {
        println!("No voices available");
        return Ok(());
    }
    for (i, voice) in voices.iter().enumerate() {
        println!("{i:>4}  {}", voice.label());
    }
    Ok(())
}
