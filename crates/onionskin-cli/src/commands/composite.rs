use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Args;
use onionskin_core::config::OnionskinConfig;
use onionskin_core::controller::{OverlayController, OverlayMount};
use onionskin_core::fit::FitMode;
use onionskin_core::geometry::Rect;
use onionskin_core::io::composite::composite;
use onionskin_core::io::image_io::{decode_file, load_rgba, save_rgba};
use tracing::info;

use crate::style::{print_placement, FitArg, Styles};

#[derive(Args)]
pub struct CompositeArgs {
    /// Base screenshot of the rendered page
    pub base: PathBuf,

    /// Design image laid over the screenshot
    pub overlay: PathBuf,

    /// Output image path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Overlay opacity in percent, 0-100 [default: config value]
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub opacity: Option<u8>,

    /// Fit mode [default: config value]
    #[arg(long, value_enum)]
    pub fit: Option<FitArg>,

    /// Reference container as L,T,W,H in screenshot pixels (default: whole screenshot)
    #[arg(long)]
    pub bounds: Option<Rect>,

    /// Config file supplying defaults
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &CompositeArgs) -> Result<()> {
    let mut config = match args.config {
        Some(ref path) => OnionskinConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => OnionskinConfig::default(),
    };
    config.overlay = config
        .overlay
        .with_overrides(args.opacity, args.fit.map(FitMode::from));

    let start = Instant::now();
    let mut base = load_rgba(&args.base)
        .with_context(|| format!("Failed to read base image {}", args.base.display()))?;
    let (w, h) = base.dimensions();
    let reference = args
        .bounds
        .unwrap_or_else(|| Rect::new(0.0, 0.0, w as f32, h as f32));

    // Drive the same controller the GUI uses so the output matches the live overlay.
    let Some(mut controller) =
        OverlayController::attach(OverlayMount::complete(reference), &config)
    else {
        bail!("compare tool could not be attached");
    };
    let overlay = decode_file(&args.overlay)
        .with_context(|| format!("Failed to decode overlay {}", args.overlay.display()))?;
    controller.load_image(Ok(overlay));

    let view = controller.view();
    if let Some(image) = controller.state().image() {
        composite(&mut base, &view, image);
    }
    save_rgba(&base, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "composite written");

    let s = Styles::new();
    println!();
    println!("  {}", s.title.apply_to("Overlay Composite"));
    println!();
    println!("  {:<14}{}", s.label.apply_to("Base"), s.path.apply_to(args.base.display()));
    println!("  {:<14}{}", s.label.apply_to("Overlay"), s.path.apply_to(args.overlay.display()));
    s.row("Opacity", format!("{}%", controller.state().opacity_percent()));
    if let Some(ref placement) = view.placement {
        print_placement(&s, controller.state().fit_mode(), placement);
    }
    println!("  {:<14}{}", s.label.apply_to("Output"), s.path.apply_to(args.output.display()));
    println!();

    Ok(())
}
