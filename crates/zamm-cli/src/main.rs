use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zamm_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "zamm")]
#[command(author, version, about = "Inspect ZAMM animation timings and preferences")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the info box entrance timing
    Timing {
        /// Fixed delay before every sub-animation, in ms (not scaled)
        #[arg(short = 'd', long, default_value_t = 0.0, allow_negative_numbers = true)]
        pre_delay: f64,
        /// Speed scale factor (larger is slower); defaults to the configured preference
        #[arg(short = 's', long)]
        speed: Option<f64>,
    },
    /// Split a page transition into duration and delay
    Transition {
        /// Total transition time in ms; defaults to the configured value
        #[arg(short = 't', long)]
        total: Option<f64>,
        /// Gap (positive) or overlap (negative) between phases, as a fraction of one phase
        #[arg(short = 'f', long, allow_negative_numbers = true)]
        spacing: Option<f64>,
    },
    /// Express a child interval as fractions of a parent interval
    Nest {
        /// Child start and end in ms
        #[arg(
            long,
            required = true,
            num_args = 2,
            value_names = ["START", "END"],
            allow_negative_numbers = true
        )]
        child: Vec<f64>,
        /// Parent start and end in ms
        #[arg(
            long,
            required = true,
            num_args = 2,
            value_names = ["START", "END"],
            allow_negative_numbers = true
        )]
        parent: Vec<f64>,
    },
    /// Inspect the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration if no file exists yet
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Timing { pre_delay, speed } => {
            commands::timing::run(&config, pre_delay, speed, cli.json)
        }
        Commands::Transition { total, spacing } => {
            commands::transition::run(&config, total, spacing, cli.json)
        }
        Commands::Nest { child, parent } => commands::nest::run(&child, &parent, cli.json),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Path => commands::config::path(),
            ConfigAction::Init => commands::config::init(),
        },
    }
}
