//! Configuration management for the style linter CLI.
//!
//! Handles:
//! - Command-line argument parsing
//! - Style pack search-path resolution

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for the style linter
#[derive(Debug, Parser)]
#[command(name = "style-lint")]
#[command(about = "Style-compliance linter for text content")]
#[command(version)]
pub struct Args {
    /// Log level for the linter
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lint content against the style pack
    Check {
        /// File to lint, or "-" for stdin
        file: Option<PathBuf>,

        /// Inline content to lint instead of a file
        #[arg(long, conflicts_with = "file")]
        content: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
        format: OutputFormat,

        /// Explicit style pack file
        #[arg(long, help = "Path to a stylepack.json file")]
        pack: Option<PathBuf>,
    },

    /// Display the resolved style pack rules
    Rules {
        /// Explicit style pack file
        #[arg(long, help = "Path to a stylepack.json file")]
        pack: Option<PathBuf>,
    },

    /// Print only the Flesch-Kincaid grade level of the content
    Grade {
        /// File to analyze, or "-" for stdin
        file: Option<PathBuf>,
    },
}

/// Output format for lint results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Console,
    Json,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Style pack explicitly set via command line
    pub pack_path: Option<PathBuf>,
    /// Directories searched for a stylepack.json
    pub pack_dirs: Vec<PathBuf>,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from an explicit pack path and log level
    pub fn new(pack_path: Option<PathBuf>, log_level: &str) -> Result<Self> {
        // Determine pack search directories
        let mut pack_dirs = Vec::new();

        // Project-local style directory first
        pack_dirs.push(PathBuf::from("style"));

        // Then the default user config directory
        if let Some(config_dir) = dirs::config_dir() {
            pack_dirs.push(config_dir.join("style-lint"));
        }

        Ok(Config {
            pack_path,
            pack_dirs,
            log_level: log_level.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_search_dirs() {
        let config = Config::new(None, "info").expect("create config");
        assert!(config.pack_path.is_none());
        assert_eq!(config.pack_dirs[0], PathBuf::from("style"));
    }

    #[test]
    fn test_explicit_pack_path_kept() {
        let config = Config::new(Some(PathBuf::from("/tmp/p.json")), "debug").expect("config");
        assert_eq!(config.pack_path.as_deref(), Some(std::path::Path::new("/tmp/p.json")));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_args_parse_check_with_format() {
        let args = Args::try_parse_from(["style-lint", "check", "a.txt", "--format", "json"])
            .expect("parse args");
        match args.command {
            Command::Check { file, format, .. } => {
                assert_eq!(file.as_deref(), Some(std::path::Path::new("a.txt")));
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected check subcommand"),
        }
    }
}
