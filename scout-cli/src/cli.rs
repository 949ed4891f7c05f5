use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub const DEFAULT_CATALOG_PATH: &str = "data/agents.json";

#[derive(Parser)]
#[command(name = "scout")]
#[command(about = "AI coding agent recommendations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the recommendation API server
    Serve {
        /// Server port
        #[arg(short, long, default_value = "5000")]
        port: u16,

        /// Bind address
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Path to the agent catalog JSON file
        #[arg(short, long, default_value = DEFAULT_CATALOG_PATH)]
        catalog: PathBuf,
    },

    /// Print recommendations for a single task and exit
    Recommend {
        /// Free-text description of the coding task
        task: String,

        /// Path to the agent catalog JSON file
        #[arg(short, long, default_value = DEFAULT_CATALOG_PATH)]
        catalog: PathBuf,
    },
}
