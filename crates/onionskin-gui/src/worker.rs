use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use onionskin_core::io::image_io::decode_file;
use tracing::warn;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the decode thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("onionskin-decoder".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::DecodeOverlay { path } => {
                handle_decode_overlay(&path, &tx, &ctx);
            }
        }
    }
}

fn handle_decode_overlay(path: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    let start = Instant::now();
    let decoded = decode_file(path);

    match &decoded {
        Ok(img) => send(
            tx,
            ctx,
            WorkerResult::Log {
                message: format!(
                    "Decoded {} ({}x{}) in {}ms",
                    path.display(),
                    img.width,
                    img.height,
                    start.elapsed().as_millis()
                ),
            },
        ),
        // Failed loads stay silent in the UI; the log is the only trace.
        Err(e) => warn!(path = %path.display(), "overlay decode failed: {e}"),
    }

    send(
        tx,
        ctx,
        WorkerResult::OverlayDecoded {
            path: path.to_path_buf(),
            decoded,
        },
    );
}
