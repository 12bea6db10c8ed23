use anyhow::Result;
use clap::Args;
use onionskin_core::fit::{place, FitMode};
use onionskin_core::geometry::{Rect, Size};

use crate::style::{print_placement, FitArg, Styles};

#[derive(Args)]
pub struct PlaceArgs {
    /// Image size as WxH
    #[arg(long)]
    pub image: Size,

    /// Bounding box as L,T,W,H
    #[arg(long)]
    pub bounds: Rect,

    /// Fit mode
    #[arg(long, value_enum, default_value = "contain")]
    pub fit: FitArg,
}

pub fn run(args: &PlaceArgs) -> Result<()> {
    let mode = FitMode::from(args.fit);
    let placement = place(mode, args.image, args.bounds);

    let s = Styles::new();
    println!();
    println!("  {}", s.title.apply_to("Overlay Placement"));
    println!();
    print_placement(&s, mode, &placement);
    println!();

    Ok(())
}
