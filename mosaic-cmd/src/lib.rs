//! Command implementations for the Mosaic CLI.
//!
//! Provides subcommands for rendering a network document from a graph
//! dataset, checking edge endpoint references, and printing dataset
//! statistics.

use clap::Subcommand;

pub mod inspect;
pub mod render;

#[derive(Subcommand)]
pub enum Command {
    /// Render a graph dataset into a self-contained network document
    Render {
        /// Path to the graph dataset JSON
        #[arg(short, long, default_value = "network_data.json")]
        input: String,

        /// Output path for the rendered HTML document
        #[arg(short, long, default_value = "network.html")]
        output: String,

        /// Document title (defaults to "Social Network")
        #[arg(long)]
        title: Option<String>,
    },

    /// Check that every edge references existing node identifiers
    Check {
        /// Path to the graph dataset JSON
        #[arg(short, long, default_value = "network_data.json")]
        input: String,
    },

    /// Print node/edge counts and label coverage for a dataset
    Stats {
        /// Path to the graph dataset JSON
        #[arg(short, long, default_value = "network_data.json")]
        input: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render { input, output, title } => {
            render::run_render(&input, &output, title.as_deref())
        }
        Command::Check { input } => inspect::run_check(&input),
        Command::Stats { input } => inspect::run_stats(&input),
    }
}
