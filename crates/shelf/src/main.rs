//! Shelf CLI - article sidebar and site configuration builder.
//!
//! Provides commands for:
//! - `sidebar`: Print the sidebar built from the content root as JSON
//! - `site`: Print the full site configuration as JSON
//! - `render`: Render one article through the markdown pipeline

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, SidebarArgs, SiteArgs};
use output::Output;

/// Shelf - article sidebar and site configuration builder.
#[derive(Parser)]
#[command(name = "shelf", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sidebar as JSON.
    Sidebar(SidebarArgs),
    /// Print the site configuration as JSON.
    Site(SiteArgs),
    /// Render a markdown article to HTML.
    Render(RenderArgs),
}

/// `--verbose` enables INFO level, otherwise use `RUST_LOG` or default to WARN.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Sidebar(args) => args.execute(&output),
        Commands::Site(args) => args.execute(&output),
        Commands::Render(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
