//! Picks the text cell out of one input line.
//!
//! The dialect is small: a quoted cell ends at a `"` followed by
//! a comma or the end of the line, and doubled quotes are copied as-is.

use serde::{Deserialize, Serialize};

/// How an input line is turned into the text that gets tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldMode {
    /// Tokenize the first CSV cell of every line.
    #[default]
    Csv,
    /// Tokenize the whole line.
    Line,
}

///Extracts the first CSV cell of `line`, keeping at most `max_len` bytes.
/// # Example
/// ```
/// use toxic_text_analysis::extract_field;
/// assert_eq!(extract_field("\"a,b,c\",rest", 2999), "a,b,c");
/// assert_eq!(extract_field("  plain cell,next", 2999), "plain cell");
/// ```
pub fn extract_field(line: &str, max_len: usize) -> &str {
    let rest = line.trim_start_matches([' ', '\t']);
    let bytes = rest.as_bytes();

    let (start, end) = if bytes.first() == Some(&b'"') {
        let body = &bytes[1..];
        let close = (0..body.len())
            .find(|&i| body[i] == b'"' && matches!(body.get(i + 1), None | Some(b',') | Some(b'\n')))
            .unwrap_or(body.len());
        (1, 1 + close)
    } else {
        let stop = bytes
            .iter()
            .position(|&b| b == b',' || b == b'\n')
            .unwrap_or(bytes.len());
        (0, stop)
    };

    let mut end = end.min(start + max_len);
    while !rest.is_char_boundary(end) {
        end -= 1;
    }
    &rest[start..end]
}

impl FieldMode {
    /// Returns the part of `line` that should be tokenized.
    pub fn select<'a>(&self, line: &'a str, max_len: usize) -> &'a str {
        match self {
            FieldMode::Csv => extract_field(line, max_len),
            FieldMode::Line => {
                let mut end = line.len().min(max_len);
                while !line.is_char_boundary(end) {
                    end -= 1;
                }
                &line[..end]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_cell_keeps_embedded_commas() {
        assert_eq!(extract_field("\"a,b,c\",rest", 2999), "a,b,c");
        assert_eq!(
            extract_field("\"this is great, really\",1", 2999),
            "this is great, really"
        );
    }

    #[test]
    fn quoted_cell_closes_at_end_of_line() {
        assert_eq!(extract_field("\"whole line\"", 2999), "whole line");
        assert_eq!(extract_field("\"whole line\"\n", 2999), "whole line");
    }

    #[test]
    fn unterminated_quote_runs_to_end() {
        assert_eq!(extract_field("\"no close, at all", 2999), "no close, at all");
    }

    #[test]
    fn doubled_quotes_are_not_unescaped() {
        assert_eq!(
            extract_field("\"she said \"\"hi\"\" there\",x", 2999),
            "she said \"\"hi\"\" there"
        );
    }

    #[test]
    fn unquoted_cell_stops_at_comma_or_newline() {
        assert_eq!(extract_field("bad,\"this is great, really\",1", 2999), "bad");
        assert_eq!(extract_field("first line\nsecond", 2999), "first line");
        assert_eq!(extract_field("\t  leading blanks,x", 2999), "leading blanks");
        assert_eq!(extract_field(",starts empty", 2999), "");
        assert_eq!(extract_field("", 2999), "");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(extract_field("abcdef", 3), "abc");
        assert_eq!(extract_field("\"abcdef\"", 3), "abc");
        // 'é' is two bytes; cutting inside it backs off to the previous boundary
        assert_eq!(extract_field("aé", 2), "a");
    }

    #[test]
    fn line_mode_takes_everything() {
        assert_eq!(FieldMode::Line.select("a, b, c", 2999), "a, b, c");
        assert_eq!(FieldMode::Csv.select("a, b, c", 2999), "a");
    }
}
