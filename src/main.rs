#![forbid(unsafe_code)]
//! # Toxic Text Analysis CLI
//!
//! Command-line front end for the `toxic_text_analysis` crate. It loads a
//! stopword list and a toxic word list, ingests a file (or every file in a
//! directory) into one analysis, prints the report and saves it.
//!
//! ## Example
//! ```bash
//! cargo run --release -- tweets.csv --toxicwords lists/toxic.txt --top 30 --export-format json
//! ```
//!
//! Warnings (missing word lists, dropped words) are shown by default;
//! set `RUST_LOG=info` to also see per-file progress.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;
use log::{error, warn};
use toxic_text_analysis::{
    Analyzer, AnalyzerConfig, ExportFormat, FieldMode, LexiconTable, ReportLimits, collect_files,
    parse_count, render_export, render_report, report, save_report,
};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// File or directory to analyze
    path: PathBuf,

    /// Stopword list (one word per line)
    #[arg(long, default_value = "stopwords.txt")]
    stopwords: PathBuf,

    /// Toxic word list (`word severity` pairs)
    #[arg(long, default_value = "toxicwords.txt")]
    toxicwords: PathBuf,

    /// Number of most frequent words to report
    #[arg(long, default_value_t = report::REPORT_TOP_WORDS, value_parser = parse_count)]
    top: usize,

    /// Number of toxic words to report
    #[arg(long, default_value_t = report::REPORT_TOXIC_LIMIT, value_parser = parse_count)]
    toxic_top: usize,

    /// Output format for the saved report (txt, csv, tsv, json)
    #[arg(long, default_value = "txt")]
    export_format: ExportFormat,

    /// Directory the report is saved to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Analyze whole lines instead of the first CSV cell
    #[arg(long, default_value_t = false)]
    plain: bool,

    /// Letters kept per word
    #[arg(long, default_value_t = toxic_text_analysis::config::DEFAULT_MAX_TOKEN_LEN)]
    max_token_len: usize,

    /// Distinct words kept before new words are dropped
    #[arg(long, default_value_t = toxic_text_analysis::config::DEFAULT_MAX_UNIQUE_WORDS)]
    max_words: usize,
}

impl Cli {
    fn config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            max_token_len: self.max_token_len,
            max_unique_words: self.max_words,
            field_mode: if self.plain {
                FieldMode::Line
            } else {
                FieldMode::Csv
            },
            ..AnalyzerConfig::default()
        }
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = cli.config();

    let (lexicon, missing) = LexiconTable::from_files(
        &cli.stopwords,
        &cli.toxicwords,
        config.max_stopwords,
        config.max_toxic_words,
        config.max_token_len,
    );
    if missing.stopwords && missing.toxic_words {
        warn!("no word lists loaded: every word is counted and none is toxic");
    }
    let mut analyzer = Analyzer::new(&lexicon, config);

    let mut any_errors = false;
    let mut ingested = 0;
    for file in collect_files(&cli.path) {
        match analyzer.ingest_path(&file) {
            Ok(summary) => {
                ingested += 1;
                println!("{}: processed {} lines", file.display(), summary.lines);
            }
            Err(e) => {
                // the message already tells an empty file apart from a missing one
                error!("Error: {}", e);
                any_errors = true;
            }
        }
    }

    if ingested == 0 {
        error!("Error: nothing to analyze in {}", cli.path.display());
        process::exit(1);
    }

    let snapshot = analyzer.compute_statistics();
    let frequent = analyzer.top_words(cli.top);
    let toxic = analyzer.top_toxic(cli.toxic_top);
    let limits = ReportLimits {
        top_words: cli.top,
        top_toxic: cli.toxic_top,
    };
    println!("{}", render_report(&snapshot, &frequent, &toxic, limits));

    let saved = render_export(cli.export_format, &snapshot, &frequent, &toxic, limits)
        .and_then(|contents| save_report(&contents, &cli.out_dir, cli.export_format));
    match saved {
        Ok(path) => println!("Report saved to {}.", path.display()),
        Err(e) => {
            error!("Cannot create output file: {}", e);
            any_errors = true;
        }
    }

    if any_errors {
        process::exit(1);
    }
}
