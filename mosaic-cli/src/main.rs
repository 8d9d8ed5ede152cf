//! Mosaic CLI - renders social network graph datasets into self-contained
//! force-directed network documents.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "mosaic",
    version,
    about = "Social network graph visualization toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: mosaic_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    mosaic_cmd::run(cli.command)
}
