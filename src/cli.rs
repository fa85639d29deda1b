//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::models::Selection;
use clap::Parser;
use std::path::PathBuf;

/// questbundle - bundle quest JSON files for Go Map!!
///
/// Collects quest definitions scattered across the quests directory into a
/// single `quests.json` that Go Map!! can import.
///
/// Examples:
///   questbundle -q service:bicycle:pump -q access -o ./output
///   questbundle -d bicycle_parking -o ./output
///   questbundle --all -o ./output
///   questbundle --all --dry-run
///   questbundle --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Name of a quest file to include (repeatable)
    ///
    /// Resolved to `<NAME>.json` anywhere below the quests root. Every file
    /// with that name is included.
    #[arg(short, long = "quests", value_name = "NAME")]
    pub quests: Vec<String>,

    /// Directory whose quest files should be included
    ///
    /// The first directory with this name below the quests root is used.
    /// Only its direct JSON children are included.
    #[arg(short, long, value_name = "DIR")]
    pub directory: Option<String>,

    /// Include every JSON file below the quests root
    #[arg(short, long)]
    pub all: bool,

    /// Output directory [default: ./output]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Quests root directory [default: quests]
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .questbundle.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Visit directory entries in file-name order
    ///
    /// By default entries are visited in the order the filesystem lists them.
    #[arg(long)]
    pub sorted: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(long)]
    pub quiet: bool,

    /// Resolve the selection and list the files without writing output
    #[arg(long)]
    pub dry_run: bool,

    /// Generate a default .questbundle.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The quest selection requested on the command line.
    pub fn selection(&self) -> Selection {
        Selection {
            quests: self.quests.clone(),
            directory: self.directory.clone(),
            all: self.all,
        }
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if self.selection().is_empty() {
            return Err("Either --quests, --directory, or --all must be provided".to_string());
        }

        if self.quests.iter().any(|q| q.trim().is_empty()) {
            return Err("Quest names must not be empty".to_string());
        }

        if self.directory.as_deref().is_some_and(|d| d.trim().is_empty()) {
            return Err("Directory name must not be empty".to_string());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn make_args() -> Args {
        Args {
            quests: vec!["access".to_string()],
            directory: None,
            all: false,
            output: None,
            root: None,
            config: None,
            sorted: false,
            verbose: false,
            quiet: false,
            dry_run: false,
            init_config: false,
        }
    }

    #[test]
    fn test_parse_repeated_quests() {
        let args = Args::try_parse_from([
            "questbundle",
            "-q",
            "service:bicycle:pump",
            "-q",
            "access",
            "-o",
            "./dist",
        ])
        .unwrap();

        assert_eq!(args.quests, vec!["service:bicycle:pump", "access"]);
        assert_eq!(args.output, Some(PathBuf::from("./dist")));
        assert!(!args.all);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_parse_directory_and_all() {
        let args = Args::try_parse_from(["questbundle", "-d", "bicycle_parking", "-a"]).unwrap();
        let selection = args.selection();

        assert_eq!(selection.directory.as_deref(), Some("bicycle_parking"));
        assert!(selection.all);
        assert!(selection.quests.is_empty());
    }

    #[test]
    fn test_validation_requires_selection() {
        let mut args = make_args();
        args.quests.clear();
        let err = args.validate().unwrap_err();
        assert!(err.contains("--quests, --directory, or --all"));

        args.init_config = true;
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_names() {
        let mut args = make_args();
        args.quests = vec![" ".to_string()];
        assert!(args.validate().is_err());

        let mut args = make_args();
        args.directory = Some(String::new());
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(), tracing::Level::INFO);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }

    #[test]
    fn test_root_is_not_read_from_environment() {
        std::env::set_var("QUESTBUNDLE_ROOT", "elsewhere");
        let args = Args::try_parse_from(["questbundle", "-a"]).unwrap();
        std::env::remove_var("QUESTBUNDLE_ROOT");

        assert_eq!(args.root, None);

        let args = Args::try_parse_from(["questbundle", "-a", "-r", "data/quests"]).unwrap();
        assert_eq!(args.root, Some(PathBuf::from("data/quests")));
    }
}
