//! Stopword and toxicity lists consulted while registering words.
//!
//! The registry only needs the [`Lexicon`] trait; [`LexiconTable`] is the
//! in-memory implementation loaded from the two list files.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::error::AnalysisError;
use crate::normalize::normalize;

/// Read-only view of the reference word lists. Both lookups take canonical words.
pub trait Lexicon {
    fn is_stopword(&self, canonical_word: &str) -> bool;

    /// Severity of `canonical_word`, 0 when it is not listed as toxic.
    fn toxicity_of(&self, canonical_word: &str) -> u32;
}

#[derive(Debug, Clone)]
pub struct LexiconTable {
    stopwords: HashSet<String>,
    toxicity: HashMap<String, u32>,
    max_stopwords: usize,
    max_toxic_words: usize,
    max_word_len: usize,
}

/// Which list files were absent when loading with [`LexiconTable::from_files`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingLists {
    pub stopwords: bool,
    pub toxic_words: bool,
}

impl LexiconTable {
    /// Empty table with the given capacities; `max_word_len` bounds canonical entries.
    pub fn new(max_stopwords: usize, max_toxic_words: usize, max_word_len: usize) -> Self {
        Self {
            stopwords: HashSet::new(),
            toxicity: HashMap::new(),
            max_stopwords,
            max_toxic_words,
            max_word_len,
        }
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    /// Words listed with a positive severity.
    pub fn toxic_word_count(&self) -> usize {
        self.toxicity.values().filter(|&&s| s > 0).count()
    }

    /// Adds one stopword. Returns the number of entries dropped for capacity (0 or 1).
    pub fn add_stopword(&mut self, raw: &str) -> usize {
        let word = normalize(raw, self.max_word_len);
        if word.is_empty() || self.stopwords.contains(&word) {
            return 0;
        }
        if self.stopwords.len() >= self.max_stopwords {
            return 1;
        }
        self.stopwords.insert(word);
        0
    }

    /// Adds one toxic word. The first severity recorded for a word wins, even a
    /// non-positive one, which is stored as 0 (not toxic).
    /// Returns the number of entries dropped for capacity (0 or 1).
    pub fn add_toxic(&mut self, raw: &str, severity: i64) -> usize {
        let word = normalize(raw, self.max_word_len);
        if word.is_empty() || self.toxicity.contains_key(&word) {
            return 0;
        }
        if self.toxicity.len() >= self.max_toxic_words {
            return 1;
        }
        let severity = u32::try_from(severity.max(0)).unwrap_or(u32::MAX);
        self.toxicity.insert(word, severity);
        0
    }

    ///Loads a stopword list: one word per line, blank lines ignored.
    /// # Example
    /// ```
    /// use toxic_text_analysis::{Lexicon, LexiconTable};
    /// let mut lex = LexiconTable::new(10_000, 10_000, 79);
    /// lex.load_stopwords("  The \n\nI\n");
    /// assert!(lex.is_stopword("the"));
    /// assert!(lex.is_stopword("i"));
    /// ```
    pub fn load_stopwords(&mut self, contents: &str) {
        let mut dropped = 0;
        for line in contents.lines() {
            let entry = line.trim();
            if entry.is_empty() {
                continue;
            }
            dropped += self.add_stopword(entry);
        }
        if dropped > 0 {
            warn!(
                "{} ({dropped} stopwords skipped)",
                AnalysisError::CapacityExceeded {
                    what: "stopword list",
                    limit: self.max_stopwords,
                }
            );
        }
    }

    ///Loads a toxic word list of whitespace separated `word severity` pairs.
    ///Reading stops at the first pair whose severity is not a whole number.
    /// # Example
    /// ```
    /// use toxic_text_analysis::{Lexicon, LexiconTable};
    /// let mut lex = LexiconTable::new(10_000, 10_000, 79);
    /// lex.load_toxic_words("hate 5\nIdiot 3\n");
    /// assert_eq!(lex.toxicity_of("hate"), 5);
    /// assert_eq!(lex.toxicity_of("idiot"), 3);
    /// assert_eq!(lex.toxicity_of("kind"), 0);
    /// ```
    pub fn load_toxic_words(&mut self, contents: &str) {
        let mut dropped = 0;
        let mut fields = contents.split_whitespace();
        while let (Some(word), Some(severity)) = (fields.next(), fields.next()) {
            let Ok(severity) = severity.parse::<i64>() else {
                debug!("toxic word list: stopped at malformed severity {severity:?} for {word:?}");
                break;
            };
            dropped += self.add_toxic(word, severity);
        }
        if dropped > 0 {
            warn!(
                "{} ({dropped} toxic words skipped)",
                AnalysisError::CapacityExceeded {
                    what: "toxic word list",
                    limit: self.max_toxic_words,
                }
            );
        }
    }

    /// Loads both lists from disk. A missing or unreadable file leaves that list
    /// empty and is reported with a warning rather than an error.
    pub fn from_files(
        stopwords: &Path,
        toxic_words: &Path,
        max_stopwords: usize,
        max_toxic_words: usize,
        max_word_len: usize,
    ) -> (Self, MissingLists) {
        let mut table = Self::new(max_stopwords, max_toxic_words, max_word_len);
        let mut missing = MissingLists::default();

        match fs::read_to_string(stopwords) {
            Ok(s) => table.load_stopwords(&s),
            Err(e) => {
                warn!("{} not loaded: {e}", stopwords.display());
                missing.stopwords = true;
            }
        }
        match fs::read_to_string(toxic_words) {
            Ok(s) => table.load_toxic_words(&s),
            Err(e) => {
                warn!("{} not loaded: {e}", toxic_words.display());
                missing.toxic_words = true;
            }
        }

        debug!(
            "lexicon ready: {} stopwords, {} toxic words",
            table.stopword_count(),
            table.toxic_word_count()
        );
        (table, missing)
    }
}

impl Lexicon for LexiconTable {
    fn is_stopword(&self, canonical_word: &str) -> bool {
        self.stopwords.contains(canonical_word)
    }

    fn toxicity_of(&self, canonical_word: &str) -> u32 {
        self.toxicity.get(canonical_word).copied().unwrap_or(0)
    }
}
