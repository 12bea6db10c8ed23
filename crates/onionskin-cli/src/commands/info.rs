use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use onionskin_core::io::image_io::decode_file;

use crate::style::Styles;

#[derive(Args)]
pub struct InfoArgs {
    /// Overlay image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let img = decode_file(&args.file)
        .with_context(|| format!("Failed to decode {}", args.file.display()))?;

    let s = Styles::new();
    println!("  {:<14}{}", s.label.apply_to("File"), s.path.apply_to(args.file.display()));
    s.row("Dimensions", format!("{}x{}", img.width, img.height));
    let mb = img.byte_len() as f64 / (1024.0 * 1024.0);
    s.row("Decoded size", format!("{mb:.1} MB (RGBA8)"));

    Ok(())
}
