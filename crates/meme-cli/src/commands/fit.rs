use anyhow::Result;
use clap::Args;
use meme_core::geometry::{fit, Size};

use crate::summary::print_fit;

#[derive(Args)]
pub struct FitArgs {
    /// Canvas width in pixels
    pub canvas_width: f64,
    /// Canvas height in pixels
    pub canvas_height: f64,
    /// Image width in pixels
    pub image_width: f64,
    /// Image height in pixels
    pub image_height: f64,
}

pub fn run(args: &FitArgs) -> Result<()> {
    let canvas = Size::new(args.canvas_width, args.canvas_height);
    let image = Size::new(args.image_width, args.image_height);
    let rect = fit(canvas, image)?;
    print_fit(canvas, image, &rect);
    Ok(())
}
