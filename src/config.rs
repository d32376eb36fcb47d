//! Process configuration, read from the environment or the command line.

use crate::infrastructure::stripe::{DEFAULT_STRIPE_API_BASE, StripeConfig};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Admin actions host", long_about = None)]
pub struct Config {
    /// Host credential required to serve actions
    #[arg(long, env = "INTERVAL_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Stripe secret key. Left empty, payment calls fail at request time.
    #[arg(long, env = "STRIPE_API_KEY", default_value = "", hide_env_values = true)]
    pub stripe_api_key: String,

    /// Stripe API base URL
    #[arg(long, env = "STRIPE_API_BASE", default_value = DEFAULT_STRIPE_API_BASE)]
    pub stripe_api_base: String,

    /// Stripe request timeout in seconds
    #[arg(long, env = "STRIPE_TIMEOUT_SECS", default_value_t = 30)]
    pub stripe_timeout_secs: u64,

    /// Path to persistent user database (optional). If provided, uses RocksDB.
    #[arg(long, env = "ADMIN_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve actions interactively until the input ends (default)
    Listen,
    /// Print the registered actions
    List,
    /// Run a single action by slug
    Run {
        /// Action slug, e.g. `create-user`
        slug: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Listen)
    }

    pub fn stripe(&self) -> StripeConfig {
        StripeConfig {
            api_key: self.stripe_api_key.clone(),
            api_base: self.stripe_api_base.clone(),
            timeout: Duration::from_secs(self.stripe_timeout_secs),
        }
    }
}
