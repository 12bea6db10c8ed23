mod commands;
mod style;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "onionskin", about = "Design overlay comparison tools")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show decoded dimensions of an overlay image
    Info(commands::info::InfoArgs),
    /// Compute where an image lands inside a bounding box
    Place(commands::place::PlaceArgs),
    /// Blend an overlay onto a screenshot for offline comparison
    Composite(commands::composite::CompositeArgs),
    /// Print or save the default configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Place(args) => commands::place::run(args),
        Commands::Composite(args) => commands::composite::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composite_args(extra: &[&str]) -> commands::composite::CompositeArgs {
        let mut argv = vec!["onionskin", "composite", "base.png", "design.png", "-o", "out.png"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Composite(args) => args,
            _ => panic!("expected composite"),
        }
    }

    #[test]
    fn composite_leaves_opacity_and_fit_to_config() {
        let args = composite_args(&["--config", "onionskin.toml"]);
        assert_eq!(args.opacity, None);
        assert!(args.fit.is_none());
    }

    #[test]
    fn composite_flags_are_kept_when_given() {
        let args = composite_args(&["--opacity", "35", "--fit", "none"]);
        assert_eq!(args.opacity, Some(35));
        assert!(matches!(args.fit, Some(style::FitArg::None)));
    }

    #[test]
    fn composite_rejects_opacity_above_100() {
        let argv = ["onionskin", "composite", "a.png", "b.png", "-o", "c.png", "--opacity", "150"];
        assert!(Cli::try_parse_from(argv).is_err());
    }
}
