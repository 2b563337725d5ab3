// score-core/src/lib.rs
//! Relevance scoring core
//!
//! Loads a directory of text files into an in-memory [`Corpus`] and ranks the
//! files by how many words of a [`Query`] they contain:
//! - 100 when a file contains every word
//! - 0 when it contains none of them
//! - the covered percentage otherwise

pub mod config;
pub mod error;
pub mod extract;
pub mod loader;
pub mod matcher;
pub mod models;
pub mod rank;

pub use config::WalkerConfig;
pub use error::{Result, ScoreError};
pub use extract::read_text;
pub use loader::CorpusLoader;
pub use matcher::MatchMode;
pub use models::{Corpus, FileRecord};
pub use rank::{rank, RankEntry, RankedResult, Scorer, FULL_SCORE};

pub use query::Query;
