//! CLI interface for wavotes
//!
//! This module defines the command-line interface using clap.
//!
//! # Example
//!
//! ```bash
//! # List Security Council resolutions from a local checkout
//! wavotes --source ./wa-votes resolutions --chamber sc
//!
//! # One resolution as JSON, fetched over HTTP
//! WAVOTES_SOURCE=https://example.org/wa-votes/ wavotes --json resolution 312
//!
//! # A nation's voting history
//! wavotes nation "Testlandia"
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use wavotes_core::chamber::Chamber;

/// Browse World Assembly resolution vote records
#[derive(Parser, Debug, Clone)]
#[command(name = "wavotes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Where resolutions.csv and votes.csv live: an http(s) base URL or a directory
    #[arg(long, short = 's', env = "WAVOTES_SOURCE", default_value = ".", global = true)]
    pub source: String,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Only print warnings and errors to the log
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Chamber selector for filtering
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChamberArg {
    /// General Assembly
    Ga,
    /// Security Council
    Sc,
}

impl From<ChamberArg> for Chamber {
    fn from(arg: ChamberArg) -> Self {
        match arg {
            ChamberArg::Ga => Chamber::GeneralAssembly,
            ChamberArg::Sc => Chamber::SecurityCouncil,
        }
    }
}

/// Arguments for the resolution listing
#[derive(Args, Debug, Clone, Default)]
pub struct ResolutionsArgs {
    /// Only show resolutions from this chamber
    #[arg(long, short = 'c', value_enum)]
    pub chamber: Option<ChamberArg>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List resolutions with vote counts (default)
    Resolutions(ResolutionsArgs),

    /// Show one resolution in detail
    Resolution {
        /// Resolution id
        id: String,
    },

    /// Show how a nation voted
    Nation {
        /// Nation name (case-insensitive, spaces or underscores)
        name: String,
    },

    /// Print the loaded tables as-is
    Dump,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command() {
        let cli = Cli::parse_from(["wavotes", "--json"]);
        assert!(cli.json);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_resolutions_chamber_filter() {
        let cli = Cli::parse_from(["wavotes", "resolutions", "--chamber", "sc"]);
        match cli.command {
            Some(Command::Resolutions(args)) => {
                assert_eq!(args.chamber, Some(ChamberArg::Sc));
                assert_eq!(
                    Chamber::from(ChamberArg::Sc),
                    Chamber::SecurityCouncil
                );
            }
            _ => panic!("Expected Resolutions command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "wavotes",
            "nation",
            "Testlandia",
            "--source",
            "https://example.org/data",
            "-q",
        ]);
        assert_eq!(cli.source, "https://example.org/data");
        assert!(cli.quiet);
        match cli.command {
            Some(Command::Nation { name }) => assert_eq!(name, "Testlandia"),
            _ => panic!("Expected Nation command"),
        }
    }

    #[test]
    fn test_invalid_chamber_rejected() {
        let result = Cli::try_parse_from(["wavotes", "resolutions", "--chamber", "xx"]);
        assert!(result.is_err());
    }
}
