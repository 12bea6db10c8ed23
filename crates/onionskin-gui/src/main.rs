mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod worker;

use std::path::PathBuf;

use onionskin_core::config::OnionskinConfig;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_config();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title("Onionskin"),
        ..Default::default()
    };

    eframe::run_native(
        "Onionskin",
        options,
        Box::new(|cc| Ok(Box::new(app::OnionskinApp::new(&cc.egui_ctx, config)))),
    )
}

/// `--config <file>`; a missing or broken file falls back to defaults.
fn load_config() -> OnionskinConfig {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let Some(path) = args.next().map(PathBuf::from) else {
                tracing::warn!("--config given without a path");
                break;
            };
            match OnionskinConfig::load(&path) {
                Ok(config) => return config,
                Err(e) => tracing::warn!("Using default config: {e}"),
            }
        }
    }
    OnionskinConfig::default()
}
