//! Splits text into raw alphabetic tokens while tallying characters and sentences.

use serde::{Deserialize, Serialize};

/// Character and sentence tallies accumulated over every scanned input.
///
/// These only ever grow; a fresh count needs a fresh analyzer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningCounters {
    /// ASCII letters scanned, including letters of words later discarded.
    pub total_characters: u64,
    /// Occurrences of `.`, `?` and `!`.
    pub total_sentences: u64,
}

/// Lazy, single-pass sequence of raw tokens over one text.
///
/// A token is a maximal run of ASCII letters, cut to `max_len` letters.
/// Counters are updated as the scan advances, so they only reflect the text
/// once the iterator has been driven to the end.
pub struct Tokens<'t, 'c> {
    text: &'t str,
    pos: usize,
    max_len: usize,
    counters: &'c mut RunningCounters,
}

///Starts tokenizing `text`, updating `counters` as tokens are pulled.
/// # Example
/// ```
/// use toxic_text_analysis::{tokenize, RunningCounters};
/// let mut counters = RunningCounters::default();
/// let tokens: Vec<&str> = tokenize("Hi there. You?", 79, &mut counters).collect();
/// assert_eq!(tokens, vec!["Hi", "there", "You"]);
/// assert_eq!(counters.total_sentences, 2);
/// assert_eq!(counters.total_characters, 10);
/// ```
pub fn tokenize<'t, 'c>(
    text: &'t str,
    max_len: usize,
    counters: &'c mut RunningCounters,
) -> Tokens<'t, 'c> {
    Tokens {
        text,
        pos: 0,
        max_len,
        counters,
    }
}

impl<'t> Iterator for Tokens<'t, '_> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        let text = self.text;
        let bytes = text.as_bytes();
        let mut start = 0;
        let mut kept = 0;

        while self.pos < bytes.len() {
            let b = bytes[self.pos];
            self.pos += 1;

            if b.is_ascii_alphabetic() {
                self.counters.total_characters += 1;
                if kept == 0 {
                    start = self.pos - 1;
                }
                // letters past the limit are dropped, the run continues
                if kept < self.max_len {
                    kept += 1;
                }
                continue;
            }

            if matches!(b, b'.' | b'?' | b'!') {
                self.counters.total_sentences += 1;
            }
            if kept > 0 {
                return Some(&text[start..start + kept]);
            }
        }

        (kept > 0).then(|| &text[start..start + kept])
    }
}
