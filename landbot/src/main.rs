//! landbot binary: run the Telegram bot, or answer single messages offline.

use anyhow::Result;
use clap::Parser;
use landbot::{run_bot, run_offline, BotConfig, Cli, Commands, EngineConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        command => {
            landbot_core::init_cli_tracing()?;
            let config = EngineConfig::load()?;
            for line in run_offline(&config, command).await? {
                println!("{}", line);
            }
            Ok(())
        }
    }
}
