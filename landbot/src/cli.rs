//! CLI parser.

use clap::{Parser, Subcommand};
use landbot_commands::DEFAULT_MAX_RHYMES;

#[derive(Parser)]
#[command(name = "landbot")]
#[command(about = "Chat command responder: rhymes and song links", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Answer one chat message offline, exactly as the bot would, and print the replies.
    Route {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        message: Vec<String>,
    },
    /// Look up rhymes for a single term.
    Rhyme {
        term: String,
        #[arg(short, long, default_value_t = DEFAULT_MAX_RHYMES)]
        max: usize,
    },
    /// Resolve a song name against the catalog.
    Song {
        #[arg(required = true)]
        query: Vec<String>,
    },
}
