use clap::{Parser, Subcommand};

/// Default status file location, polled by the dashboard
pub const DEFAULT_STATUS_FILE: &str = "status_report.json";

#[derive(Parser)]
#[command(name = "regis")]
#[command(version)]
#[command(about = "Session memory and status snapshots for AI assistants")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the current status document
    Status {
        /// Path to the status file
        #[arg(long, default_value = DEFAULT_STATUS_FILE)]
        file: String,
    },

    /// Set one top-level key in the status document
    Set {
        /// Top-level key to set
        key: String,
        /// Value, parsed as JSON with plain-string fallback
        value: String,
        /// Path to the status file
        #[arg(long, default_value = DEFAULT_STATUS_FILE)]
        file: String,
    },

    /// Print version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["regis", "version"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Version));
    }

    #[test]
    fn test_cli_parse_status_default_file() {
        let cli = Cli::try_parse_from(["regis", "status"]).unwrap();
        if let Commands::Status { file } = cli.command {
            assert_eq!(file, DEFAULT_STATUS_FILE);
        } else {
            panic!("Expected Status command");
        }
    }

    #[test]
    fn test_cli_parse_set() {
        let cli = Cli::try_parse_from(["regis", "set", "cpu", "42", "--file", "s.json"]).unwrap();
        if let Commands::Set { key, value, file } = cli.command {
            assert_eq!(key, "cpu");
            assert_eq!(value, "42");
            assert_eq!(file, "s.json");
        } else {
            panic!("Expected Set command");
        }
    }
}
