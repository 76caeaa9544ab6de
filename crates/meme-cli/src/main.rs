mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "meme", about = "Caption images and read the captions aloud")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Letterbox an image onto the canvas and draw captions
    Render(commands::render::RenderArgs),
    /// Show where an image of the given size lands on the canvas
    Fit(commands::fit::FitArgs),
    /// Print or save the default configuration
    Config(commands::config::ConfigArgs),
    /// List available speech voices
    Voices(commands::voices::VoicesArgs),
    /// Read captions aloud
    Say(commands::say::SayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Fit(args) => commands::fit::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Voices(args) => commands::voices::run(args),
        Commands::Say(args) => commands::say::run(args),
    }
}
