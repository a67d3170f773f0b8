pub mod cli;
pub mod interactive;
pub mod profile;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "profile-readme")]
#[command(about = "Generate a GitHub profile README from a JSON or TOML profile")]
pub struct CliConfig {
    /// Profile file path (.json or .toml)
    #[arg(short, long, default_value = "config.json")]
    pub config: String,

    /// Force interactive profile setup
    #[arg(short, long)]
    pub interactive: bool,

    /// Directory the README is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// File name of the generated README
    #[arg(long, default_value = "README.md")]
    pub output_file: String,

    /// Print the README to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn needs_interactive_setup(&self) -> bool {
        self.interactive || !std::path::Path::new(&self.config).exists()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("config", &self.config)?;
        validation::validate_non_empty_string("output_dir", &self.output_dir)?;
        validation::validate_non_empty_string("output_file", &self.output_file)?;
        Ok(())
    }
}
