use anyhow::Result;
use clap::Parser;
use scout_cli::{Cli, Commands, recommend, serve, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, catalog } => {
            telemetry::init_telemetry("scout-server");
            serve::run_serve(&host, port, &catalog).await
        }
        Commands::Recommend { task, catalog } => {
            telemetry::init_telemetry("scout");
            recommend::run_recommend(&task, &catalog).await
        }
    }
}
