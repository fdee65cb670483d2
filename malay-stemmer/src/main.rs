use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use malay_stemmer_lib::report::process_file;
use malay_stemmer_lib::{MalayStemmer, RunConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "malay-stemmer", about = "Malay stemmer for building root word lists")]
struct Cli {
    /// Malay text to stem. If omitted (and no report flags are given), reads from stdin.
    text: Option<String>,

    /// Text file to process into a root frequency report.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory for report files.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Use the default input and output paths (MALAY_STEMMER_INPUT / MALAY_STEMMER_OUTPUT).
    #[arg(short = 'd', long)]
    use_default: bool,

    /// Print the stages applied to each word as JSON.
    #[arg(long)]
    explain: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn report_mode(&self) -> bool {
        self.input.is_some() || self.output.is_some() || self.use_default
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stemmer = MalayStemmer::new();

    if cli.report_mode() {
        return run_report(&cli, &stemmer);
    }

    match cli.text {
        Some(ref text) => process_line(text, &stemmer, &cli)?,
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.context("failed to read stdin")?;
                if !line.trim().is_empty() {
                    process_line(&line, &stemmer, &cli)?;
                }
            }
        }
    }

    Ok(())
}

fn run_report(cli: &Cli, stemmer: &MalayStemmer) -> anyhow::Result<()> {
    let config = RunConfig::resolve(cli.input.clone(), cli.output.clone(), cli.use_default)?;
    tracing::info!(
        input = %config.input.display(),
        output = %config.output_dir.display(),
        "report run"
    );
    let (index, paths) = process_file(&config, stemmer)
        .with_context(|| format!("failed to process {}", config.input.display()))?;

    let stats = index.statistics();
    println!("Total words found: {}", stats.total_words);
    println!("Unique word forms: {}", stats.unique_forms);
    println!("Unique roots: {}", stats.unique_roots);
    for path in paths.all() {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Split a line into lowercase words. Hyphens are kept so reduplicated forms
/// like {mata-mata} reach the stemmer whole.
fn words(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !(c.is_alphabetic() || c == '-' || c == '\'')))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

fn process_line(line: &str, stemmer: &MalayStemmer, cli: &Cli) -> anyhow::Result<()> {
    for word in words(line) {
        if cli.explain {
            let analysis = stemmer.analyze(&word);
            let json = if cli.pretty {
                serde_json::to_string_pretty(&analysis)
            } else {
                serde_json::to_string(&analysis)
            };
            println!("{}", json.context("JSON serialization failed")?);
        } else {
            println!("{word}\t{}", stemmer.stem(&word));
        }
    }
    Ok(())
}
