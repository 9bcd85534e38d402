pub mod tag_config;
pub mod toml_config;

pub use tag_config::TagConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum OutputFormat {
    /// HTML overlay markup
    Markup,
    /// Point list as JSON
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "image-tag")]
#[command(about = "Place and replay tag points over an image")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "image-tag.toml")]
    pub config: String,

    /// Session script to replay against the configured points
    #[arg(short, long)]
    pub session: Option<String>,

    #[arg(long, value_enum, default_value = "markup")]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("config", &self.config)?;
        if let Some(session) = &self.session {
            validate_path("session", session)?;
        }
        Ok(())
    }
}
