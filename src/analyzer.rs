//! Ties extraction, tokenization and registration together over one isolated state.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, Result};
use crate::lexicon::Lexicon;
use crate::registry::{Registration, WordRecord, WordRegistry};
use crate::stats::{self, AnalysisSnapshot};
use crate::tokenizer::{RunningCounters, tokenize};

/// Everything accumulated by one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisState {
    pub registry: WordRegistry,
    pub counters: RunningCounters,
}

impl AnalysisState {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            registry: WordRegistry::new(config.max_unique_words, config.max_token_len),
            counters: RunningCounters::default(),
        }
    }
}

/// Outcome of ingesting one line, text or file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub lines: usize,
    /// Tokens that created or incremented a record.
    pub tokens_registered: u64,
    /// New words turned away because the registry was full.
    pub dropped_words: u64,
}

impl IngestSummary {
    fn absorb(&mut self, other: IngestSummary) {
        self.lines += other.lines;
        self.tokens_registered += other.tokens_registered;
        self.dropped_words += other.dropped_words;
    }
}

/// Accumulates word statistics for text fed to it, consulting a borrowed lexicon.
///
/// State is owned per analyzer, so independent analyses never share counts.
pub struct Analyzer<'l, L: Lexicon + ?Sized> {
    config: AnalyzerConfig,
    lexicon: &'l L,
    state: AnalysisState,
}

impl<'l, L: Lexicon + ?Sized> Analyzer<'l, L> {
    pub fn new(lexicon: &'l L, config: AnalyzerConfig) -> Self {
        Self {
            state: AnalysisState::new(&config),
            config,
            lexicon,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    pub fn registry(&self) -> &WordRegistry {
        &self.state.registry
    }

    pub fn counters(&self) -> &RunningCounters {
        &self.state.counters
    }

    /// Registers a single raw token without touching the counters.
    pub fn register(&mut self, raw_token: &str) -> Registration {
        self.state.registry.register(raw_token, self.lexicon)
    }

    fn scan_line(&mut self, line: &str) -> IngestSummary {
        let field = self.config.field_mode.select(line, self.config.max_field_len);
        let AnalysisState { registry, counters } = &mut self.state;

        let mut summary = IngestSummary {
            lines: 1,
            ..IngestSummary::default()
        };
        for token in tokenize(field, self.config.max_token_len, counters) {
            match registry.register(token, self.lexicon) {
                Registration::Inserted | Registration::Incremented => summary.tokens_registered += 1,
                Registration::Dropped => summary.dropped_words += 1,
                Registration::Ignored => {}
            }
        }
        summary
    }

    fn report_overflow(&self, summary: &IngestSummary) {
        if summary.dropped_words > 0 {
            warn!(
                "{} ({} words dropped)",
                AnalysisError::CapacityExceeded {
                    what: "registry",
                    limit: self.state.registry.capacity(),
                },
                summary.dropped_words
            );
        }
    }

    ///Extracts the text cell of one line and counts its words.
    /// # Example
    /// ```
    /// use toxic_text_analysis::{Analyzer, AnalyzerConfig, LexiconTable};
    /// let lex = LexiconTable::new(10, 10, 79);
    /// let mut analyzer = Analyzer::new(&lex, AnalyzerConfig::default());
    /// analyzer.ingest_line("\"Good day, good night.\",42");
    /// assert_eq!(analyzer.registry().get("good").map(|r| r.count), Some(2));
    /// assert_eq!(analyzer.counters().total_sentences, 1);
    /// ```
    pub fn ingest_line(&mut self, line: &str) -> IngestSummary {
        let summary = self.scan_line(line);
        self.report_overflow(&summary);
        summary
    }

    /// Ingests every line of `text`.
    pub fn ingest_text(&mut self, text: &str) -> IngestSummary {
        let mut summary = IngestSummary::default();
        for line in text.lines() {
            summary.absorb(self.scan_line(line));
        }
        self.report_overflow(&summary);
        summary
    }

    /// Reads one file and ingests it line by line.
    ///
    /// Missing or unreadable files give `InputUnavailable`, zero-byte files
    /// give `EmptyInput`; in both cases the state is left untouched.
    pub fn ingest_path(&mut self, path: &Path) -> Result<IngestSummary> {
        let shown = path.display().to_string();
        let bytes = fs::read(path).map_err(|e| AnalysisError::input_unavailable(shown.clone(), e))?;
        if bytes.is_empty() {
            return Err(AnalysisError::EmptyInput { path: shown });
        }

        debug!("ingesting {shown} ({} bytes)", bytes.len());
        let text = String::from_utf8_lossy(&bytes);
        let summary = self.ingest_text(&text);
        info!("{shown}: processed {} lines", summary.lines);
        Ok(summary)
    }

    pub fn rank_by_frequency(&self) -> Vec<&WordRecord> {
        stats::rank_by_frequency(&self.state.registry)
    }

    pub fn top_words(&self, n: usize) -> Vec<&WordRecord> {
        stats::top_words(&self.state.registry, n)
    }

    pub fn top_toxic(&self, limit: usize) -> Vec<&WordRecord> {
        stats::top_toxic(&self.state.registry, limit)
    }

    pub fn compute_statistics(&self) -> AnalysisSnapshot {
        stats::compute_statistics(&self.state.registry, &self.state.counters)
    }
}

/// Expands `path` into the files to ingest: the file itself, or every file
/// below a directory in sorted order.
pub fn collect_files(path: &Path) -> Vec<PathBuf> {
    if !path.is_dir() {
        return vec![path.to_path_buf()];
    }
    WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv_field::FieldMode;
    use crate::lexicon::LexiconTable;

    fn lexicon() -> LexiconTable {
        let mut lex = LexiconTable::new(100, 100, 79);
        lex.load_stopwords("i\nso\n");
        lex.load_toxic_words("hate 5");
        lex
    }

    #[test]
    fn scenario_hate_line() {
        let lex = lexicon();
        let mut a = Analyzer::new(&lex, AnalyzerConfig::default());
        let summary = a.ingest_line("I hate you so much!!");
        assert_eq!(summary.tokens_registered, 3);

        let words: Vec<(&str, u32)> = a
            .registry()
            .records()
            .map(|r| (r.word.as_str(), r.severity))
            .collect();
        assert_eq!(words, vec![("hate", 5), ("you", 0), ("much", 0)]);
        assert_eq!(a.counters().total_sentences, 2);

        let s = a.compute_statistics();
        assert_eq!(s.toxic_unique_count, 1);
        assert_eq!(s.toxic_total_occurrences, 1);
    }

    #[test]
    fn csv_mode_reads_only_first_cell() {
        let lex = lexicon();
        let mut a = Analyzer::new(&lex, AnalyzerConfig::default());
        a.ingest_line("\"this is great, really\",1");
        a.ingest_line("bad,\"ignored text\",1");
        assert!(a.registry().get("really").is_some());
        assert!(a.registry().get("bad").is_some());
        assert!(a.registry().get("ignored").is_none());
    }

    #[test]
    fn line_mode_reads_everything() {
        let lex = lexicon();
        let config = AnalyzerConfig {
            field_mode: FieldMode::Line,
            ..AnalyzerConfig::default()
        };
        let mut a = Analyzer::new(&lex, config);
        a.ingest_line("bad,\"not ignored\",1");
        assert!(a.registry().get("ignored").is_some());
    }

    #[test]
    fn analyzers_do_not_share_state() {
        let lex = lexicon();
        let mut first = Analyzer::new(&lex, AnalyzerConfig::default());
        let second = Analyzer::new(&lex, AnalyzerConfig::default());
        first.ingest_text("alpha beta.\nalpha!");
        assert_eq!(first.compute_statistics().total_tokens, 3);
        assert_eq!(second.compute_statistics().total_tokens, 0);
        assert_eq!(second.counters().total_sentences, 0);
    }

    #[test]
    fn text_ingestion_counts_lines_and_drops_over_capacity() {
        let lex = lexicon();
        let config = AnalyzerConfig {
            max_unique_words: 2,
            ..AnalyzerConfig::default()
        };
        let mut a = Analyzer::new(&lex, config);
        let summary = a.ingest_text("one two\nthree one\n\nfour");
        assert_eq!(summary.lines, 4);
        assert_eq!(summary.tokens_registered, 3);
        assert_eq!(summary.dropped_words, 2);
        assert_eq!(a.registry().get("one").unwrap().count, 2);
        assert_eq!(a.registry().dropped(), 2);
    }

    #[test]
    fn stopwords_still_feed_the_counters() {
        let lex = lexicon();
        let mut a = Analyzer::new(&lex, AnalyzerConfig::default());
        a.ingest_line("I so.");
        assert!(a.registry().is_empty());
        assert_eq!(a.counters().total_characters, 3);
        assert_eq!(a.counters().total_sentences, 1);
    }

    #[test]
    fn missing_and_empty_files_are_distinct_errors() {
        let lex = lexicon();
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty.csv");
        std::fs::write(&empty, "").unwrap();

        let mut a = Analyzer::new(&lex, AnalyzerConfig::default());
        let missing = a.ingest_path(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(missing, AnalysisError::InputUnavailable { .. }));
        let empty = a.ingest_path(&empty).unwrap_err();
        assert!(matches!(empty, AnalysisError::EmptyInput { .. }));
        assert!(a.registry().is_empty());
    }

    #[test]
    fn files_accumulate_into_one_state() {
        let lex = lexicon();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.csv"), "\"apple pie\",1\n").unwrap();
        std::fs::write(dir.path().join("b.csv"), "apple,2\n").unwrap();

        let files = collect_files(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.csv"));

        let mut a = Analyzer::new(&lex, AnalyzerConfig::default());
        for f in &files {
            a.ingest_path(f).unwrap();
        }
        assert_eq!(a.registry().get("apple").unwrap().count, 2);
        assert_eq!(a.registry().get("pie").unwrap().count, 1);
    }

    #[test]
    fn invalid_utf8_is_read_lossily() {
        let lex = lexicon();
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("latin1.txt");
        std::fs::write(&p, b"caf\xe9 ok\n").unwrap();
        let mut a = Analyzer::new(&lex, AnalyzerConfig::default());
        let s = a.ingest_path(&p).unwrap();
        assert_eq!(s.lines, 1);
        assert!(a.registry().get("caf").is_some());
        assert!(a.registry().get("ok").is_some());
    }
}
