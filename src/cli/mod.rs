//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod generate;
pub mod input;
pub mod plot;
pub mod report;
pub mod serve;

use clap::{Parser, Subcommand};

/// Circle point generator with plotting and PDF report export
#[derive(Parser)]
#[command(name = "roundel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate or resolve the point set and export it as csv/json/text
    Generate(generate::GenerateArgs),

    /// Render the point set to an SVG or PNG image
    Plot(plot::PlotArgs),

    /// Export a PDF report (plot + parameters)
    Report(report::ReportArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate::run(args),
        Commands::Plot(args) => plot::run(args),
        Commands::Report(args) => report::run(args),
        Commands::Serve(args) => serve::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}
