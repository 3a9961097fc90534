use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use eyre::{Result, WrapErr};
use kycheck_classifier::config::ClassifierConfig;
use kycheck_classifier::events::VerdictEvent;
use kycheck_classifier::OutcomeClassifier;
use kycheck_core::models::{ClassificationResult, NegativePhraseSet};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// Classify a verification provider's response as verified or failed.
///
/// Prints the result as JSON. Exits 0 when verified, 1 when a negative
/// phrase was found, and 2 on error.
#[derive(Parser)]
#[command(name = "kycheck", version, about, long_about = None)]
struct Cli {
    /// Response body to classify. Reads stdin when absent or `-`.
    #[arg(value_name = "PAYLOAD")]
    payload: Option<PathBuf>,

    /// Classifier configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Use the phrase list configured for this provider
    #[arg(short, long, value_name = "ID")]
    provider: Option<String>,

    /// Negative phrase to scan for (repeatable); replaces any configured list
    #[arg(long = "phrase", value_name = "PHRASE")]
    phrases: Vec<String>,

    /// Treat the input as plain text rather than JSON
    #[arg(long)]
    raw: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = color_eyre::install() {
        eprintln!("failed to install error reporter: {e}");
    }
    init_tracing(cli.log_json);

    match run(&cli) {
        Ok(result) if result.verified() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{e:?}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(json: bool) {
    // Logs go to stderr so stdout carries only the result.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(cli: &Cli) -> Result<ClassificationResult> {
    let classifier = build_classifier(cli)?;
    let input = read_input(cli.payload.as_deref())?;

    let result = match (cli.raw, cli.provider.as_deref()) {
        (true, Some(provider)) => classifier.classify_text_for(provider, &input),
        (true, None) => classifier.classify_text(&input),
        (false, provider) => {
            let payload = parse_payload(&input);
            match provider {
                Some(provider) => classifier.classify_for(provider, &payload)?,
                None => classifier.classify(&payload)?,
            }
        }
    };

    let mut event = VerdictEvent::new(&result, input.len());
    if let Some(provider) = &cli.provider {
        event = event.with_provider(provider.clone());
    }
    event.emit();

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(result)
}

fn build_classifier(cli: &Cli) -> Result<OutcomeClassifier> {
    if !cli.phrases.is_empty() {
        let phrases = NegativePhraseSet::new(cli.phrases.iter().cloned())
            .wrap_err("invalid --phrase value")?;
        return Ok(OutcomeClassifier::new(phrases));
    }

    match &cli.config {
        Some(path) => {
            let config = ClassifierConfig::load(path)?;
            let classifier = config
                .into_classifier()
                .wrap_err_with(|| format!("invalid config at {}", path.display()))?;
            tracing::debug!(
                path = %path.display(),
                phrases = classifier.phrases().len(),
                "classifier configured"
            );
            Ok(classifier)
        }
        None => Ok(OutcomeClassifier::default()),
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read payload at {}", path.display())),
        _ => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .wrap_err("failed to read payload from stdin")?;
            Ok(input)
        }
    }
}

/// Parse the input as JSON, falling back to a JSON string holding the text.
fn parse_payload(input: &str) -> Value {
    serde_json::from_str(input).unwrap_or_else(|_| {
        tracing::debug!("payload is not JSON, classifying it as a string");
        Value::String(input.to_string())
    })
}
