//! Shared context and output helpers for CLI commands.

use crate::config::Config;
use crate::preferences::FilePreferences;
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::PathBuf;

/// Config and file locations resolved from the command line
pub struct CliContext {
    pub config: Config,
    pub config_path: PathBuf,
    pub preferences_path: PathBuf,
}

impl CliContext {
    /// Load the config, honoring `--config` and `--preferences`
    pub fn load(config: Option<PathBuf>, preferences: Option<PathBuf>) -> Result<Self> {
        let config_path = config.unwrap_or_else(crate::utils::get_config_path);
        let config =
            Config::load_or_create(&config_path).context("Failed to load configuration")?;
        let preferences_path = preferences.unwrap_or_else(|| config.preferences_path());

        Ok(Self {
            config,
            config_path,
            preferences_path,
        })
    }

    pub fn preferences(&self) -> Result<FilePreferences> {
        FilePreferences::load(&self.preferences_path)
    }
}

/// Print a success message with a checkmark prefix.
pub fn print_success(msg: &str) {
    println!("\u{2713} {}", msg);
}

/// Print an error message with an X prefix to stderr.
pub fn print_error(msg: &str) {
    eprintln!("\u{2717} {}", msg);
}

/// Print an info message with an info sign prefix.
pub fn print_info(msg: &str) {
    println!("\u{2139}\u{FE0F} {}", msg);
}

/// Ask a yes/no question on stdin; anything but y/yes is a no
pub fn prompt_confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .context("Failed to read answer")?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
