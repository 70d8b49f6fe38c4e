use clap::{Parser, Subcommand};
use sjsuconnect::ScreenId;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sjsuconnect")]
#[command(about = "SJSUConnect student onboarding in the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Screen to open first (debugging aid; no profile is loaded)
    #[arg(long, value_enum, value_name = "SCREEN")]
    pub start_screen: Option<ScreenId>,

    /// Write logs to this file (overrides config)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace (overrides config)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Don't capture the mouse (overrides config)
    #[arg(long)]
    pub no_mouse: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the screen navigation table
    Transitions,

    /// Show config status and location, or create default config if missing
    InitConfig,
}

pub fn parse() -> Cli {
    Cli::parse()
}
