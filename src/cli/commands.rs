//! Command implementations for the Ejaan CLI.

use std::fs;
use std::io::{self, Read};
use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{EjaanError, Result};
use crate::lexicon::RootSource;
use crate::morphology::generator::FormGenerator;
use crate::pipeline::TextNormalizer;
use crate::spelling::SpellingEngine;

/// Execute a CLI command.
pub fn execute_command(args: EjaanArgs) -> Result<()> {
    match &args.command {
        Command::Correct(correct_args) => correct_text(correct_args.clone(), &args),
        Command::BuildLexicon(build_args) => build_lexicon(build_args.clone(), &args),
        Command::Lookup(lookup_args) => lookup_word(lookup_args.clone(), &args),
        Command::Forms(forms_args) => show_forms(forms_args.clone(), &args),
    }
}

/// Correct text and print the result with its change log.
fn correct_text(args: CorrectArgs, cli_args: &EjaanArgs) -> Result<()> {
    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let normalizer = TextNormalizer::from_config(&cli_args.load_config()?)?;

    let start = Instant::now();
    let correction = normalizer.process(&text);
    info!(
        "Corrected {} characters with {} changes in {}ms",
        text.chars().count(),
        correction.changes.len(),
        start.elapsed().as_millis()
    );

    output_result("Corrected text:", &correction, cli_args)
}

/// Regenerate and persist the lexicon.
fn build_lexicon(args: BuildLexiconArgs, cli_args: &EjaanArgs) -> Result<()> {
    let mut config = cli_args.load_config()?;
    if args.no_roots {
        config.root_source = RootSource::None;
    }
    config.validate()?;

    let start = Instant::now();
    let engine = SpellingEngine::rebuild(&config)?;
    let result = LexiconBuildResult {
        path: config.lexicon_path.display().to_string(),
        forms: engine.len(),
        duration_ms: start.elapsed().as_millis() as u64,
    };

    output_result("Lexicon built:", &result, cli_args)
}

/// Exact and fuzzy lookup of a single word.
fn lookup_word(args: LookupArgs, cli_args: &EjaanArgs) -> Result<()> {
    let word = args.word.trim();
    if word.is_empty() {
        return Err(EjaanError::invalid_argument("Lookup word must not be empty"));
    }

    let config = cli_args.load_config()?;
    config.validate()?;
    let engine = SpellingEngine::open(&config)?;

    let mut suggestions = engine.lookup_closest(word, args.max_distance);
    suggestions.truncate(args.limit);
    let result = LookupResult {
        word: word.to_string(),
        exact: engine.lookup_exact(word),
        suggestions,
    };

    output_result("Lookup:", &result, cli_args)
}

/// Print the surface forms generated from a root.
fn show_forms(args: FormsArgs, cli_args: &EjaanArgs) -> Result<()> {
    let root = args.root.trim().to_lowercase();
    if root.is_empty() || !root.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(EjaanError::invalid_argument(format!(
            "Root must be a non-empty alphabetic word, got {:?}",
            args.root
        )));
    }

    let mut forms: Vec<String> = FormGenerator::generate(&root).into_iter().collect();
    forms.sort();
    let result = FormsResult {
        root,
        count: forms.len(),
        forms,
    };

    output_result("Generated forms:", &result, cli_args)
}
