use anyhow::Context;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use solid_principles::{logging, run_demo, DemoConfig, Principle, Rendition};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Selection {
    All,
    Srp,
    Ocp,
    Lsp,
    Isp,
    Dip,
}

impl Selection {
    fn principles(self) -> Vec<Principle> {
        match self {
            Selection::All => Principle::ALL.to_vec(),
            Selection::Srp => vec![Principle::SingleResponsibility],
            Selection::Ocp => vec![Principle::OpenClosed],
            Selection::Lsp => vec![Principle::LiskovSubstitution],
            Selection::Isp => vec![Principle::InterfaceSegregation],
            Selection::Dip => vec![Principle::DependencyInversion],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Show {
    Corrected,
    Violation,
    Both,
}

#[derive(Debug, Parser)]
#[command(name = "solid", about = "Runs the SOLID principle demos")]
struct Cli {
    /// Which demo to run
    #[arg(value_enum, default_value_t = Selection::All)]
    principle: Selection,

    /// Which rendition(s) to print
    #[arg(long, value_enum, default_value_t = Show::Corrected)]
    show: Show,

    /// TOML file overriding the demo parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable colored banners
    #[arg(long)]
    no_color: bool,
}

fn renditions(principle: Principle, show: Show) -> Vec<Rendition> {
    if !principle.has_violation() {
        return vec![Rendition::Corrected];
    }
    match show {
        Show::Corrected => vec![Rendition::Corrected],
        Show::Violation => vec![Rendition::Violation],
        Show::Both => vec![Rendition::Violation, Rendition::Corrected],
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = DemoConfig::load(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("loading demo config from {}", path.display()),
        None => "loading default demo config".to_string(),
    })?;
    info!(principle = ?cli.principle, show = ?cli.show, "starting demos");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stderr = io::stderr();
    let mut diag = stderr.lock();

    for (idx, principle) in cli.principle.principles().into_iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", format!("=== {} ===", principle.title()).bold())?;

        let selected = renditions(principle, cli.show);
        for rendition in &selected {
            if selected.len() > 1 {
                let label = match rendition {
                    Rendition::Violation => "-- Violation --".red(),
                    Rendition::Corrected => "-- Corrected --".green(),
                };
                writeln!(out, "{}", label)?;
            }
            run_demo(principle, *rendition, &config, &mut out, &mut diag)?;
        }
    }

    Ok(())
}
