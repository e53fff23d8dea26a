use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "focos", version, about = "FOCOS time-blocking planner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Block management
    Block {
        #[command(subcommand)]
        action: commands::block::BlockAction,
    },
    /// Free-time gap report for a day
    Gaps {
        /// Day of week (monday..sunday)
        day: focos_core::Day,
    },
    /// Day template management
    Template {
        #[command(subcommand)]
        action: commands::template::TemplateAction,
    },
    /// Planner configuration
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .compact()
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Block { action } => commands::block::run(action),
        Commands::Gaps { day } => commands::gaps::run(day),
        Commands::Template { action } => commands::template::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
