// score-core/src/matcher.rs
//! Occurrence test for a single query word

use serde::{Deserialize, Serialize};

/// How a query word is looked up in a file's text.
///
/// Both modes compare lowercased text.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum MatchMode {
    /// The word must stand on its own: `cat` does not match `category`
    #[default]
    Token,
    /// Any occurrence counts, including inside longer words
    Substring,
}

impl MatchMode {
    /// `haystack` and `needle` are expected to be lowercased already.
    pub fn occurs_in(self, haystack: &str, needle: &str) -> bool {
        if needle.is_empty() {
            return false;
        }
        match self {
            MatchMode::Substring => haystack.contains(needle),
            MatchMode::Token => contains_token(haystack, needle),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Every candidate start is checked, overlapping ones included, so a rejected
/// match can never hide a valid one that begins inside it.
fn contains_token(haystack: &str, needle: &str) -> bool {
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        let start = from + pos;
        let end = start + needle.len();

        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        if !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char) {
            return true;
        }

        // step one character past the rejected start
        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
    }
    false
}
