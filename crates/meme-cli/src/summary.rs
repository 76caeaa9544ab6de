use std::path::Path;

use console::Style;
use meme_core::canvas::DrawCommand;
use meme_core::controls::ControlSet;
use meme_core::geometry::{FitRect, Size};
use meme_core::speech::Utterance;
use meme_core::volume::Volume;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

fn print_placement(s: &Styles, rect: &FitRect) {
    println!(
        "  {:<14}{}",
        s.label.apply_to("Scaled"),
        s.value.apply_to(format!("{:.2} x {:.2}", rect.width, rect.height))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Offset"),
        s.value.apply_to(format!("({:.2}, {:.2})", rect.start_x, rect.start_y))
    );
}

pub fn print_fit(canvas: Size, image: Size, rect: &FitRect) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Fit"));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Canvas"),
        s.value.apply_to(format!("{} x {}", canvas.width, canvas.height))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Image"),
        s.value.apply_to(format!("{} x {}", image.width, image.height))
    );
    print_placement(&s, rect);
    println!();
}

pub fn print_render_summary(name: &str, image: Size, rect: &FitRect, output: &Path) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Meme"));
    println!();
    println!(
        "  {:<14}{} ({} x {})",
        s.label.apply_to("Input"),
        s.method.apply_to(name),
        image.width,
        image.height
    );
    print_placement(&s, rect);
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!();
}

pub fn print_controls(controls: &ControlSet) {
    let s = Styles::new();
    let states: Vec<String> = controls
        .iter()
        .map(|c| {
            let state = if c.enabled { "on" } else { "off" };
            format!("{} {}", c.kind, s.value.apply_to(state))
        })
        .collect();
    println!("  {:<14}{}", s.label.apply_to("Controls"), states.join(", "));
    println!();
}

pub fn print_draw_commands(commands: &[DrawCommand]) {
    let s = Styles::new();
    for cmd in commands {
        match cmd {
            DrawCommand::ClearRect(r) => println!(
                "{} {} {} {} {}",
                s.method.apply_to("clear"),
                r.x,
                r.y,
                r.width,
                r.height
            ),
            DrawCommand::FillRect { rect: r, color } => println!(
                "{} {} {} {} {} {:?}",
                s.method.apply_to("fill "),
                r.x,
                r.y,
                r.width,
                r.height,
                color.0
            ),
            DrawCommand::DrawImage { source, placement } => println!(
                "{} {}x{} -> {:.2} {:.2} {:.2} {:.2}",
                s.method.apply_to("image"),
                source.width,
                source.height,
                placement.start_x,
                placement.start_y,
                placement.width,
                placement.height
            ),
            DrawCommand::DrawText { text, x, y, style } => println!(
                "{} {:?} at ({x}, {y}) {}px",
                s.method.apply_to("text "),
                text,
                style.font_size
            ),
        }
    }
}

pub fn print_utterance(utterance: &Utterance, volume: Volume) {
    let s = Styles::new();
    let voice = utterance
        .voice
        .as_ref()
        .map(|v| v.label())
        .unwrap_or_else(|| "synthesizer default".to_string());
    println!(
        "  {:<14}{}",
        s.label.apply_to("Voice"),
        s.method.apply_to(voice)
    );
    println!(
        "  {:<14}{} ({})",
        s.label.apply_to("Volume"),
        s.value.apply_to(volume),
        volume.tier()
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Text"),
        s.value.apply_to(&utterance.text)
    );
}
