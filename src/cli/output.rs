//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{EjaanArgs, OutputFormat};
use crate::error::Result;
use crate::pipeline::Correction;
use crate::spelling::Suggestion;

/// Result structure for lexicon builds.
#[derive(Debug, Serialize, Deserialize)]
pub struct LexiconBuildResult {
    pub path: String,
    pub forms: usize,
    pub duration_ms: u64,
}

/// Result structure for lookups.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResult {
    pub word: String,
    pub exact: bool,
    pub suggestions: Vec<Suggestion>,
}

/// Result structure for form generation.
#[derive(Debug, Serialize, Deserialize)]
pub struct FormsResult {
    pub root: String,
    pub count: usize,
    pub forms: Vec<String>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn print_human(&self, args: &EjaanArgs);
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &EjaanArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &EjaanArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

impl HumanOutput for Correction {
    fn print_human(&self, args: &EjaanArgs) {
        println!("{}", self.corrected);

        if args.verbosity() == 0 || self.changes.is_empty() {
            return;
        }
        println!();
        println!("Changes ({}):", self.changes.len());
        println!("────────────");
        for change in &self.changes {
            println!("  {change}");
        }
    }
}

impl HumanOutput for LexiconBuildResult {
    fn print_human(&self, _args: &EjaanArgs) {
        println!(
            "Saved {} forms to {} in {}ms",
            self.forms, self.path, self.duration_ms
        );
    }
}

impl HumanOutput for LookupResult {
    fn print_human(&self, _args: &EjaanArgs) {
        if self.exact {
            println!("{}: in lexicon", self.word);
        } else {
            println!("{}: not in lexicon", self.word);
        }

        if self.suggestions.is_empty() {
            println!("No suggestions.");
            return;
        }
        println!();
        println!("Suggestions:");
        for suggestion in &self.suggestions {
            println!(
                "  {:<24} distance {}",
                suggestion.term, suggestion.distance
            );
        }
    }
}

impl HumanOutput for FormsResult {
    fn print_human(&self, args: &EjaanArgs) {
        if args.verbosity() > 0 {
            println!("{} forms of {}:", self.count, self.root);
        }
        for form in &self.forms {
            println!("{form}");
        }
    }
}
