use std::path::PathBuf;

use onionskin_core::config::OnionskinConfig;
use onionskin_core::error::Result;
use onionskin_core::io::image_io::OverlayImage;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode the user's selected design image.
    DecodeOverlay { path: PathBuf },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    /// Single-shot completion of a `DecodeOverlay`, success or not.
    OverlayDecoded {
        path: PathBuf,
        decoded: Result<OverlayImage>,
    },
    ConfigImported {
        config: OnionskinConfig,
    },
    Log {
        message: String,
    },
}
