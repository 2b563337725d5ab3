use std::collections::BTreeSet;

/// The word that, alone, ends an interactive session.
pub const EXIT_WORD: &str = "exit";

/// A set of distinct, lowercased words to look for.
///
/// Words are kept sorted so iteration order never depends on how the user
/// typed them. An empty `Query` can be built; consumers decide whether that
/// is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Query {
    words: BTreeSet<String>,
}

impl Query {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// True only when the query is the single word `exit`.
    pub fn is_exit(&self) -> bool {
        self.words.len() == 1 && self.words.contains(EXIT_WORD)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Query {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
