use std::sync::mpsc;

use meme_core::io::image_io::{load_image, save_png};

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the background thread that decodes and saves images.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            let result = handle_command(cmd);
            if result_tx.send(result).is_err() {
                break;
            }
            ctx.request_repaint();
        }
        tracing::debug!("Worker thread exiting");
    });

    cmd_tx
}

fn handle_command(cmd: WorkerCommand) -> WorkerResult {
    match cmd {
        WorkerCommand::LoadImage { path } => match load_image(&path) {
            Ok(image) => WorkerResult::ImageLoaded { path, image },
            Err(e) => WorkerResult::Error {
                message: format!("Failed to open {}: {e}", path.display()),
            },
        },
        WorkerCommand::SaveImage { path, image } => match save_png(&image, &path) {
            Ok(()) => WorkerResult::ImageSaved { path },
            Err(e) => WorkerResult::Error {
                message: format!("Failed to save {}: {e}", path.display()),
            },
        },
    }
}
