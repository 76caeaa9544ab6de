use std::path::PathBuf;

use image::RgbaImage;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode an image file.
    LoadImage { path: PathBuf },

    /// Write the composed canvas to disk as PNG.
    SaveImage { path: PathBuf, image: RgbaImage },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    ImageLoaded { path: PathBuf, image: RgbaImage },
    ImageSaved { path: PathBuf },
    Error { message: String },
}
