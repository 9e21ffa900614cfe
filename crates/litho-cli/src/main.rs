mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "litho", about = "Partially-coherent optical lithography simulator")]
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
    /// Show grid constants and default optical parameters
    Info(commands::info::InfoArgs),
    /// Run the pipeline once on a mask preset and save the aerial image
    Render(commands::render::RenderArgs),
    /// Run a focus x dose Bossung sweep and print the CD table
    Bossung(commands::bossung::BossungArgs),
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
        Commands::Render(args) => commands::render::run(args),
        Commands::Bossung(args) => commands::bossung::run(args),
    }
}
