//! Per-word occurrence counts and toxicity, kept in first-seen order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::normalize::normalize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub count: u64,
    /// Severity looked up once, when the word was first registered. 0 = not toxic.
    pub severity: u32,
}

impl WordRecord {
    pub fn is_toxic(&self) -> bool {
        self.severity > 0
    }
}

/// What [`WordRegistry::register`] did with a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Inserted,
    Incremented,
    /// Empty after normalization, or a stopword.
    Ignored,
    /// A new word arrived while the registry was full.
    Dropped,
}

/// Unique canonical words with their counts.
///
/// Iteration order is insertion order, which ranking relies on to break ties.
#[derive(Debug, Clone)]
pub struct WordRegistry {
    records: IndexMap<String, WordRecord>,
    capacity: usize,
    max_word_len: usize,
    dropped: u64,
}

impl WordRegistry {
    pub fn new(capacity: usize, max_word_len: usize) -> Self {
        Self {
            records: IndexMap::new(),
            capacity,
            max_word_len,
            dropped: 0,
        }
    }

    ///Normalizes `raw_token` and counts it unless it is empty or a stopword.
    /// # Example
    /// ```
    /// use toxic_text_analysis::{LexiconTable, Registration, WordRegistry};
    /// let mut lex = LexiconTable::new(10, 10, 79);
    /// lex.load_stopwords("the");
    /// let mut reg = WordRegistry::new(100, 79);
    /// assert_eq!(reg.register("The", &lex), Registration::Ignored);
    /// assert_eq!(reg.register("Cat", &lex), Registration::Inserted);
    /// assert_eq!(reg.register("cat!", &lex), Registration::Incremented);
    /// assert_eq!(reg.get("cat").map(|r| r.count), Some(2));
    /// ```
    pub fn register<L: Lexicon + ?Sized>(&mut self, raw_token: &str, lexicon: &L) -> Registration {
        let word = normalize(raw_token, self.max_word_len);
        if word.is_empty() || lexicon.is_stopword(&word) {
            return Registration::Ignored;
        }

        if let Some(record) = self.records.get_mut(&word) {
            record.count += 1;
            return Registration::Incremented;
        }

        if self.records.len() >= self.capacity {
            self.dropped += 1;
            return Registration::Dropped;
        }

        let severity = lexicon.toxicity_of(&word);
        self.records.insert(
            word.clone(),
            WordRecord {
                word,
                count: 1,
                severity,
            },
        );
        Registration::Inserted
    }

    pub fn get(&self, word: &str) -> Option<&WordRecord> {
        self.records.get(word)
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &WordRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// New words turned away because the registry was full.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconTable;

    fn lexicon() -> LexiconTable {
        let mut lex = LexiconTable::new(100, 100, 79);
        lex.load_stopwords("i\nso\n");
        lex.load_toxic_words("hate 5");
        lex
    }

    #[test]
    fn same_token_n_times_makes_one_record() {
        let lex = lexicon();
        let mut reg = WordRegistry::new(100, 79);
        for _ in 0..7 {
            reg.register("Banana", &lex);
        }
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get("banana").unwrap().count, 7);
    }

    #[test]
    fn stopwords_never_create_or_increment() {
        let lex = lexicon();
        let mut reg = WordRegistry::new(100, 79);
        for t in ["I", "i", "SO", "s.o"] {
            assert_eq!(reg.register(t, &lex), Registration::Ignored);
        }
        assert!(reg.is_empty());
    }

    #[test]
    fn empty_tokens_are_silently_ignored() {
        let lex = lexicon();
        let mut reg = WordRegistry::new(100, 79);
        assert_eq!(reg.register("", &lex), Registration::Ignored);
        assert_eq!(reg.register("1234", &lex), Registration::Ignored);
        assert!(reg.is_empty());
    }

    #[test]
    fn severity_is_taken_at_insertion() {
        let lex = lexicon();
        let mut reg = WordRegistry::new(100, 79);
        reg.register("HATE", &lex);
        reg.register("you", &lex);
        assert_eq!(reg.get("hate").unwrap().severity, 5);
        assert!(reg.get("hate").unwrap().is_toxic());
        assert_eq!(reg.get("you").unwrap().severity, 0);
    }

    #[test]
    fn full_registry_drops_new_words_but_keeps_counting_known_ones() {
        let lex = lexicon();
        let mut reg = WordRegistry::new(2, 79);
        assert_eq!(reg.register("one", &lex), Registration::Inserted);
        assert_eq!(reg.register("two", &lex), Registration::Inserted);
        assert_eq!(reg.register("three", &lex), Registration::Dropped);
        assert_eq!(reg.register("four", &lex), Registration::Dropped);
        assert_eq!(reg.register("one", &lex), Registration::Incremented);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.dropped(), 2);
        assert_eq!(reg.get("one").unwrap().count, 2);
    }

    #[test]
    fn records_iterate_in_first_seen_order() {
        let lex = lexicon();
        let mut reg = WordRegistry::new(100, 79);
        for t in ["pear", "apple", "pear", "fig"] {
            reg.register(t, &lex);
        }
        let order: Vec<&str> = reg.records().map(|r| r.word.as_str()).collect();
        assert_eq!(order, vec!["pear", "apple", "fig"]);
    }
}
