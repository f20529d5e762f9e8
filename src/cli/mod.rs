//! CLI module - Command-line interface for City Explorer
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// City Explorer - location, weather and local listings API
#[derive(Parser)]
#[command(name = "city-explorer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server (default)
    #[command(alias = "daemon")]
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Resolve a search to a location, using the cache when possible
    #[command(alias = "r")]
    Resolve {
        /// Free-text location search
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Delete the auxiliary records stored for a location
    Forget {
        /// Location ID
        location_id: i32,
    },
}

pub use commands::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["city-explorer"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_resolve_joins_words() {
        let cli = Cli::try_parse_from(["city-explorer", "resolve", "mountain", "view"]).unwrap();
        match cli.command {
            Some(Commands::Resolve { query }) => assert_eq!(query.join(" "), "mountain view"),
            _ => panic!("expected resolve"),
        }
    }

    #[test]
    fn test_forget_requires_numeric_id() {
        assert!(Cli::try_parse_from(["city-explorer", "forget", "abc"]).is_err());
    }
}
