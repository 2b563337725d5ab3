// score-core/src/rank.rs
//! Scoring and ranking engine
//!
//! A file's score is the share of distinct query words it contains, as a
//! percentage. Every file in the corpus gets an entry, zero scores included;
//! cutting the list down to a top N is left to the caller.

use std::cmp::Ordering;

use query::Query;

use crate::error::{Result, ScoreError};
use crate::matcher::MatchMode;
use crate::models::{Corpus, FileRecord};

/// Score given to a file that contains every query word
pub const FULL_SCORE: f64 = 100.0;

/// One file and its score in `[0, 100]`
#[derive(Debug, Clone, PartialEq)]
pub struct RankEntry {
    pub file_id: String,
    pub score: f64,
}

impl RankEntry {
    /// Highest score first, then file identifier ascending.
    fn rank_order(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.file_id.cmp(&other.file_id))
    }
}

/// Every file of a corpus, best score first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedResult {
    entries: Vec<RankEntry>,
}

impl RankedResult {
    fn from_unsorted(mut entries: Vec<RankEntry>) -> Self {
        entries.sort_by(RankEntry::rank_order);
        Self { entries }
    }

    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }

    /// At most `limit` leading entries
    pub fn top(&self, limit: usize) -> &[RankEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<RankEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a RankEntry;
    type IntoIter = std::slice::Iter<'a, RankEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Scores files against queries with a fixed matching mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    mode: MatchMode,
}

impl Scorer {
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Number of distinct query words found in the file.
    pub fn match_count(&self, file: &FileRecord, query: &Query) -> usize {
        query
            .iter()
            .filter(|word| self.mode.occurs_in(file.folded(), word))
            .count()
    }

    /// Percentage of the query covered by the file. An empty query is
    /// rejected, as in `rank`.
    pub fn score(&self, file: &FileRecord, query: &Query) -> Result<f64> {
        if query.is_empty() {
            return Err(ScoreError::InvalidQuery);
        }
        Ok(FULL_SCORE * self.match_count(file, query) as f64 / query.len() as f64)
    }

    /// Score every file of the corpus and sort the results.
    pub fn rank(&self, corpus: &Corpus, query: &Query) -> Result<RankedResult> {
        if query.is_empty() {
            return Err(ScoreError::InvalidQuery);
        }

        let entries = corpus
            .iter()
            .map(|file| {
                Ok(RankEntry {
                    file_id: file.id().to_string(),
                    score: self.score(file, query)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let result = RankedResult::from_unsorted(entries);

        tracing::debug!(
            "ranked {} files against {} words ({} mode)",
            result.len(),
            query.len(),
            self.mode
        );
        Ok(result)
    }
}

/// Rank `corpus` against `query` with the given matching mode.
pub fn rank(corpus: &Corpus, query: &Query, mode: MatchMode) -> Result<RankedResult> {
    Scorer::new(mode).rank(corpus, query)
}
