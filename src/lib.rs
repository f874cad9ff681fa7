#![forbid(unsafe_code)]
//! # Toxic Text Analysis
//!
//! Word frequency, lexical statistics and toxicity reporting for plain text
//! and CSV-embedded tweets.
//!
//! Text flows line by line through a small pipeline:
//! 1. [`extract_field`] picks the text cell out of a CSV line (quoted or not).
//! 2. [`tokenize`] splits it into runs of ASCII letters and tallies letters
//!    and sentence terminators in [`RunningCounters`].
//! 3. [`WordRegistry::register`] normalizes each token, skips stopwords and
//!    counts the rest, recording the toxicity severity from the [`Lexicon`].
//! 4. [`rank_by_frequency`], [`top_toxic`] and [`compute_statistics`] derive
//!    the rankings and the [`AnalysisSnapshot`] rendered by [`render_report`].
//!
//! [`Analyzer`] bundles the steps over one isolated [`AnalysisState`].
//!
//! ## Example
//! ```
//! use toxic_text_analysis::{Analyzer, AnalyzerConfig, LexiconTable};
//!
//! let mut lexicon = LexiconTable::new(10_000, 10_000, 79);
//! lexicon.load_stopwords("i\nso\n");
//! lexicon.load_toxic_words("hate 5\n");
//!
//! let mut analyzer = Analyzer::new(&lexicon, AnalyzerConfig::default());
//! analyzer.ingest_line("I hate you so much!!");
//!
//! let stats = analyzer.compute_statistics();
//! assert_eq!(stats.total_tokens, 3);
//! assert_eq!(stats.toxic_unique_count, 1);
//! assert_eq!(stats.total_sentences, 2);
//! ```

pub mod analyzer;
pub mod config;
pub mod csv_field;
pub mod error;
pub mod lexicon;
pub mod normalize;
pub mod registry;
pub mod report;
pub mod stats;
pub mod tokenizer;

pub use analyzer::{AnalysisState, Analyzer, IngestSummary, collect_files};
pub use config::AnalyzerConfig;
pub use csv_field::{FieldMode, extract_field};
pub use error::{AnalysisError, Result};
pub use lexicon::{Lexicon, LexiconTable, MissingLists};
pub use normalize::normalize;
pub use registry::{Registration, WordRecord, WordRegistry};
pub use report::{ExportFormat, ReportLimits, render_export, render_report, save_report};
pub use stats::{
    AnalysisSnapshot, compute_statistics, parse_count, rank_by_frequency, top_toxic, top_words,
};
pub use tokenizer::{RunningCounters, Tokens, tokenize};
