use clap::ValueEnum;
use console::Style;
use onionskin_core::fit::{FitMode, Placement};

/// Command-line spelling of [`FitMode`], matching the CSS `object-fit` names.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FitArg {
    Contain,
    Cover,
    /// Unscaled, centered
    None,
}

impl From<FitArg> for FitMode {
    fn from(arg: FitArg) -> Self {
        match arg {
            FitArg::Contain => FitMode::Contain,
            FitArg::Cover => FitMode::Cover,
            FitArg::None => FitMode::NoneCentered,
        }
    }
}

pub struct Styles {
    pub title: Style,
    pub label: Style,
    pub value: Style,
    pub path: Style,
}

impl Styles {
    pub fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }

    pub fn row(&self, label: &str, value: impl std::fmt::Display) {
        println!("  {:<14}{}", self.label.apply_to(label), self.value.apply_to(value));
    }
}

pub fn print_placement(s: &Styles, mode: FitMode, p: &Placement) {
    s.row("Fit", mode);
    s.row("Scale", format!("{:.4}", p.scale));
    s.row(
        "Dest",
        format!(
            "{:.1},{:.1} {:.1}x{:.1}",
            p.dest.left, p.dest.top, p.dest.width, p.dest.height
        ),
    );
    s.row(
        "Visible UV",
        format!(
            "u {:.4}..{:.4}  v {:.4}..{:.4}",
            p.uv.min_u, p.uv.max_u, p.uv.min_v, p.uv.max_v
        ),
    );
}
