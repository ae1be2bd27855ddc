use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use doro::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "doro")]
#[command(about = "Doro - a small voice assistant for calls, apps and quick replies")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.doro/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpret one utterance and print the reply and action (nothing is launched)
    Ask {
        /// The utterance, e.g. `doro ask call 555 123 4567`
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Talk to the assistant interactively (typed input stands in for speech)
    Chat {
        /// Log dial/open requests instead of launching them
        #[arg(long)]
        dry_run: bool,
    },

    /// List the active rules in priority order
    Rules,

    /// Initialize a new config.toml
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stderr keeps stdout clean for replies and --json)
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Init { force }) => {
            cli::init::init_command(cli.config, force).await?;
        }
        Some(Commands::Ask { text, json }) => {
            let config = Config::load_from(cli.config.as_deref())?;
            cli::ask::ask_command(&config, &text, json)?;
        }
        Some(Commands::Rules) => {
            let config = Config::load_from(cli.config.as_deref())?;
            cli::rules::rules_command(&config);
        }
        Some(Commands::Chat { dry_run }) => {
            let config = Config::load_from(cli.config.as_deref())?;
            cli::chat::chat_command(&config, dry_run).await?;
        }
        None => {
            // Default: interactive chat
            let config = Config::load_from(cli.config.as_deref())?;
            cli::chat::chat_command(&config, false).await?;
        }
    }

    Ok(())
}
