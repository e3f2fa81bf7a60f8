//! Command-line interface for the terminal game.

use clap::Parser;
use std::path::PathBuf;

/// Time-travel tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "timetravel")]
#[command(about = "Tic-tac-toe with a move history you can jump back into", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults apply if it is missing)
    #[arg(short, long, default_value = "timetravel.toml")]
    pub config: PathBuf,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// List moves newest first
    #[arg(long)]
    pub descending: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["timetravel"]);
        assert_eq!(cli.config, PathBuf::from("timetravel.toml"));
        assert_eq!(cli.log_file, None);
        assert!(!cli.descending);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "timetravel",
            "--config",
            "other.toml",
            "--log-file",
            "game.log",
            "--descending",
        ]);
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")));
        assert!(cli.descending);
    }
}
