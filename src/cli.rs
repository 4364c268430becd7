//! CLI argument parsing.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ipecho", version, about = "IP echo service with access logging")]
pub struct Cli {
    /// Log level
    #[arg(long, default_value = "info", env = "IPECHO_LOG_LEVEL")]
    pub log_level: String,
}
