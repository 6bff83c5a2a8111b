mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "opsdeck")]
#[command(about = "Terminal admin console over a mock user directory", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding the config file and session record
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Output format for non-interactive commands
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
