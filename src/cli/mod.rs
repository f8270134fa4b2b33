//! Command-line interface.
//!
//! Running without a subcommand starts the game. The subcommands work on
//! the same config and preferences files without opening the TUI.

mod common;
mod completions;

pub use common::*;

use crate::preferences::{keys, PreferencesStore};
use crate::stats::{format_seconds, Statistics};
use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use tracing::info;

/// A casual sliding-tile puzzle for the terminal
#[derive(Parser, Debug)]
#[command(name = "gridlock", version, about = "A casual sliding-tile puzzle for the terminal", long_about = None, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this config file instead of the default one
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use this preferences file instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub preferences: Option<PathBuf>,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print your statistics
    Stats,
    /// Reset statistics (and with --all, every saved preference)
    Reset {
        /// Also forget settings and the tutorial answer
        #[arg(long)]
        all: bool,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Shows logs location and how to view them
    Logs,
    /// Configuration file location
    Config,
    /// Generate shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Execute the CLI command; `None` means the TUI should start
    pub fn execute(self) -> Result<()> {
        let Some(command) = self.command else {
            return Ok(());
        };
        match command {
            Commands::Stats => Self::cmd_stats(self.config, self.preferences),
            Commands::Reset { all, yes } => Self::cmd_reset(self.config, self.preferences, all, yes),
            Commands::Logs => Self::cmd_logs(),
            Commands::Config => Self::cmd_config(self.config),
            Commands::Completions { shell } => completions::generate(shell),
        }
    }

    fn cmd_stats(config: Option<PathBuf>, preferences: Option<PathBuf>) -> Result<()> {
        let ctx = CliContext::load(config, preferences)?;
        let prefs = ctx.preferences()?;
        let stats = Statistics::load(&prefs);
        let none = || "-".to_string();

        println!("Puzzles started  {}", stats.games_played);
        println!("Puzzles solved   {}", stats.games_solved);
        println!(
            "Fewest moves     {}",
            stats.best_moves.map_or_else(none, |n| n.to_string())
        );
        println!(
            "Fastest time     {}",
            stats.best_seconds.map_or_else(none, format_seconds)
        );
        println!(
            "Last solved      {}",
            stats
                .last_solved
                .map_or_else(none, |at| at.format("%Y-%m-%d %H:%M UTC").to_string())
        );
        println!(
            "Tutorial offered {}",
            if prefs.get_boolean(keys::TUTORIAL_ASKED) {
                "yes"
            } else {
                "no"
            }
        );
        Ok(())
    }

    fn cmd_reset(
        config: Option<PathBuf>,
        preferences: Option<PathBuf>,
        all: bool,
        yes: bool,
    ) -> Result<()> {
        let ctx = CliContext::load(config, preferences)?;
        let what = if all {
            "all saved preferences"
        } else {
            "your statistics"
        };

        if !yes && !prompt_confirm(&format!("Erase {}?", what))? {
            print_info("Nothing changed.");
            return Ok(());
        }

        let mut prefs = ctx.preferences()?;
        if all {
            prefs.clear();
        } else {
            Statistics::reset(&mut prefs);
        }
        prefs.flush()?;
        info!("Reset {} in {:?}", what, prefs.path());
        print_success(&format!("Erased {}.", what));
        Ok(())
    }

    fn cmd_logs() -> Result<()> {
        let log_file = crate::utils::get_log_dir().join("gridlock.log");
        println!("{}", log_file.display());
        println!("View logs in real-time: tail -f {}", log_file.display());
        Ok(())
    }

    fn cmd_config(config: Option<PathBuf>) -> Result<()> {
        let config_path = config.unwrap_or_else(crate::utils::get_config_path);
        println!("{}", config_path.display());
        Ok(())
    }
}
