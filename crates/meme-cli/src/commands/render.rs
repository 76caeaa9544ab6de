use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use meme_core::canvas::font::load_font;
use meme_core::canvas::{Bitmap, RasterCanvas, RecordingCanvas};
use meme_core::controller::MemeController;
use meme_core::io::image_io::{display_name, load_image};
use meme_core::speech::EspeakSpeech;

use crate::summary::{print_controls, print_draw_commands, print_render_summary};

#[derive(Args)]
pub struct RenderArgs {
    /// Input image
    pub image: PathBuf,

    /// Caption drawn at the top
    #[arg(short, long, default_value = "")]
    pub top: String,

    /// Caption drawn at the bottom
    #[arg(short, long, default_value = "")]
    pub bottom: String,

    /// Output PNG (auto-generated if not provided)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the draw commands instead of rendering
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let config = super::load_config(args.config.as_ref())?;
    let image = load_image(&args.image)
        .with_context(|| format!("Failed to load image {}", args.image.display()))?;
    let speech = EspeakSpeech::new(&config.speech.command);
    let (width, height) = (config.canvas.width, config.canvas.height);

    if args.dry_run {
        let mut controller =
            MemeController::new(RecordingCanvas::new(width, height), speech, config);
        controller.on_image_loaded(&image.size())?;
        controller.on_generate(&args.top, &args.bottom)?;
        print_draw_commands(controller.canvas().commands());
        println!();
        print_controls(controller.controls());
        return Ok(());
    }

    let font = load_font(&config.caption.font)
        .with_context(|| format!("Failed to load caption font {:?}", config.caption.font))?;
    let mut controller =
        MemeController::new(RasterCanvas::with_font(width, height, font), speech, config);
    let placement = controller.on_image_loaded(&image)?;
    controller.on_generate(&args.top, &args.bottom)?;

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| meme_output_path(&args.image));
    controller
        .canvas()
        .save_png(&output_path)
        .with_context(|| format!("Failed to save {}", output_path.display()))?;

    print_render_summary(
        &display_name(&args.image),
        image.size(),
        &placement,
        &output_path,
    );
    print_controls(controller.controls());
    Ok(())
}

fn meme_output_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let parent = source.parent().unwrap_or(Path::new("."));
    parent.join(format!("{stem}_meme.png"))
}
