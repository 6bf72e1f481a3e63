//! Command line argument parsing for the Ejaan CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::NormalizerConfig;
use crate::error::Result;
use crate::lexicon::RootSource;

/// Ejaan - Indonesian text normalizer
#[derive(Parser, Debug, Clone)]
#[command(name = "ejaan")]
#[command(about = "Normalize informally written Indonesian text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct EjaanArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "EJAAN_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Persisted lexicon path, overrides the configuration
    #[arg(long, value_name = "LEXICON_FILE", global = true)]
    pub lexicon: Option<PathBuf>,

    /// Local root-word list, overrides the configured root source
    #[arg(long, value_name = "ROOTS_FILE", global = true)]
    pub roots: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl EjaanArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// The configuration file (or defaults) with command line overrides applied.
    pub fn load_config(&self) -> Result<NormalizerConfig> {
        let mut config = match &self.config {
            Some(path) => NormalizerConfig::load_from_file(path)?,
            None => NormalizerConfig::default(),
        };

        if let Some(lexicon) = &self.lexicon {
            config.lexicon_path = lexicon.clone();
        }
        if let Some(roots) = &self.roots {
            config.root_source = RootSource::File {
                path: roots.clone(),
            };
        }

        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct text from an argument, a file or stdin
    Correct(CorrectArgs),

    /// Regenerate the lexicon and save it
    #[command(name = "build-lexicon")]
    BuildLexicon(BuildLexiconArgs),

    /// Look a word up in the lexicon
    Lookup(LookupArgs),

    /// Print the generated surface forms of a root word
    Forms(FormsArgs),
}

/// Arguments for correcting text
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Text to correct; read from stdin when neither TEXT nor --file is given
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long, value_name = "INPUT_FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

/// Arguments for rebuilding the lexicon
#[derive(Parser, Debug, Clone)]
pub struct BuildLexiconArgs {
    /// Build from the gazetteers only, without any root words
    #[arg(long)]
    pub no_roots: bool,
}

/// Arguments for a lexicon lookup
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum edit distance for suggestions
    #[arg(short = 'd', long, default_value = "2")]
    pub max_distance: usize,

    /// Maximum number of suggestions to show
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}

/// Arguments for form generation
#[derive(Parser, Debug, Clone)]
pub struct FormsArgs {
    /// Lowercase root word
    #[arg(value_name = "ROOT")]
    pub root: String,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_command() {
        let args = EjaanArgs::try_parse_from(["ejaan", "correct", "saya makn nasi"]).unwrap();

        if let Command::Correct(correct_args) = args.command {
            assert_eq!(correct_args.text.as_deref(), Some("saya makn nasi"));
            assert!(correct_args.file.is_none());
        } else {
            panic!("Expected Correct command");
        }
    }

    #[test]
    fn test_correct_text_and_file_conflict() {
        let result =
            EjaanArgs::try_parse_from(["ejaan", "correct", "teks", "--file", "input.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_lookup_command() {
        let args =
            EjaanArgs::try_parse_from(["ejaan", "lookup", "rumha", "-d", "1", "--limit", "3"])
                .unwrap();

        if let Command::Lookup(lookup_args) = args.command {
            assert_eq!(lookup_args.word, "rumha");
            assert_eq!(lookup_args.max_distance, 1);
            assert_eq!(lookup_args.limit, 3);
        } else {
            panic!("Expected Lookup command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = EjaanArgs::try_parse_from(["ejaan", "forms", "makan"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = EjaanArgs::try_parse_from(["ejaan", "-vv", "forms", "makan"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = EjaanArgs::try_parse_from(["ejaan", "forms", "makan", "--quiet"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            EjaanArgs::try_parse_from(["ejaan", "--format", "json", "--pretty", "forms", "makan"])
                .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
    }

    #[test]
    fn test_overrides_apply_to_config() {
        let args = EjaanArgs::try_parse_from([
            "ejaan",
            "--lexicon",
            "cache/lexicon.txt",
            "--roots",
            "kata-dasar.txt",
            "build-lexicon",
        ])
        .unwrap();

        let config = args.load_config().unwrap();
        assert_eq!(config.lexicon_path, PathBuf::from("cache/lexicon.txt"));
        assert_eq!(
            config.root_source,
            RootSource::File {
                path: PathBuf::from("kata-dasar.txt")
            }
        );
    }
}
