//! wordrank: print the most frequent words of a text.
//!
//! With no input flags, analyzes a built-in example sentence.

mod format;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wordrank_core::{Analysis, Analyzer, AnalyzerConfig, WordClass};

use crate::format::{render, OutputFormat};

const EXAMPLE_TEXT: &str =
    "Coding is fun. Coding is powerful. Python coding is simple and powerful.";

/// Print the most frequent words (length ≥ 4) of a text, ties broken alphabetically.
#[derive(Parser, Debug)]
#[command(name = "wordrank")]
#[command(version)]
#[command(about = "Rank the most frequent words in a text", long_about = None)]
struct Cli {
    /// Text to analyze
    #[arg(short, long, value_name = "TEXT", conflicts_with = "file")]
    text: Option<String>,

    /// File to analyze, read whole
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Number of words to report
    #[arg(short = 'n', long = "top", default_value_t = AnalyzerConfig::DEFAULT_TOP_N)]
    top: usize,

    /// Minimum word length in characters
    #[arg(long = "min-len", default_value_t = AnalyzerConfig::DEFAULT_MIN_TOKEN_LEN)]
    min_len: usize,

    /// Treat only [A-Za-z0-9_] as word characters
    #[arg(long)]
    ascii: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Entries)]
    format: OutputFormat,

    /// Print token totals after the ranking
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            top_n: self.top,
            min_token_len: self.min_len,
            word_class: if self.ascii {
                WordClass::Ascii
            } else {
                WordClass::Unicode
            },
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<Analysis> {
    let analyzer = Analyzer::with_config(cli.config());
    info!(config = ?analyzer.config(), "analyzer ready");

    if let Some(path) = &cli.file {
        let bytes =
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        info!(path = %path.display(), bytes = bytes.len(), "loaded input file");
        return analyzer
            .analyze_bytes(&bytes)
            .with_context(|| format!("cannot analyze {}", path.display()));
    }

    let text = cli.text.as_deref().unwrap_or(EXAMPLE_TEXT);
    Ok(analyzer.analyze(text))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let analysis = run(&cli)?;
    let rendered = render(&analysis.ranking, cli.format).context("failed to render result")?;

    println!("Result: {rendered}");
    if cli.stats {
        println!(
            "Tokens: {} total, {} distinct",
            analysis.total_tokens, analysis.distinct_tokens
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_analyze_example() {
        let cli = Cli::parse_from(["wordrank"]);
        assert_eq!(cli.config(), AnalyzerConfig::default());

        let analysis = run(&cli).unwrap();
        let out = render(&analysis.ranking, cli.format).unwrap();
        assert_eq!(out, "[coding=3, powerful=2, python=1]");
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["wordrank", "--top", "5", "--min-len", "2", "--ascii"]);
        let config = cli.config();
        assert_eq!(config.top_n, 5);
        assert_eq!(config.min_token_len, 2);
        assert_eq!(config.word_class, WordClass::Ascii);
    }

    #[test]
    fn text_flag() {
        let cli = Cli::parse_from([
            "wordrank",
            "--text",
            "alpha beta gamma delta",
            "--format",
            "pairs",
        ]);
        let analysis = run(&cli).unwrap();
        let out = render(&analysis.ranking, cli.format).unwrap();
        assert_eq!(out, "[('alpha', 1), ('beta', 1), ('delta', 1)]");
    }

    #[test]
    fn text_and_file_conflict() {
        let parsed = Cli::try_parse_from(["wordrank", "--text", "x", "--file", "y.txt"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn missing_file_is_error() {
        let cli = Cli::parse_from(["wordrank", "--file", "/nonexistent/wordrank/input.txt"]);
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn invalid_utf8_file_is_encoding_error() {
        use std::io::Write;
        use wordrank_core::AnalyzeError;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"coding \xC3 x").unwrap();
        file.flush().unwrap();

        let path = file.path().to_str().unwrap();
        let cli = Cli::parse_from(["wordrank", "--file", path]);
        let err = run(&cli).unwrap_err();

        assert!(err.to_string().contains("cannot analyze"));
        assert_eq!(
            err.downcast_ref::<AnalyzeError>(),
            Some(&AnalyzeError::InputEncoding { valid_up_to: 7 })
        );
    }
}
