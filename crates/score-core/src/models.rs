// score-core/src/models.rs
//! Data model: file records and the corpus snapshot

use std::collections::BTreeMap;
use std::collections::btree_map;

/// One file captured at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    id: String,
    content: String,
    /// Lowercased copy of `content`, computed once
    folded: String,
}

impl FileRecord {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let folded = content.to_lowercase();
        Self {
            id: id.into(),
            content,
            folded,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub(crate) fn folded(&self) -> &str {
        &self.folded
    }
}

/// Read-only snapshot of every file loaded for one run, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    files: BTreeMap<String, FileRecord>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, replacing any previous file with the same identifier.
    pub fn insert(&mut self, id: impl Into<String>, content: impl Into<String>) {
        let record = FileRecord::new(id, content);
        self.files.insert(record.id.clone(), record);
    }

    pub fn get(&self, id: &str) -> Option<&FileRecord> {
        self.files.get(id)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Records in identifier order
    pub fn iter(&self) -> Records<'_> {
        Records {
            inner: self.files.values(),
        }
    }
}

pub struct Records<'a> {
    inner: btree_map::Values<'a, String, FileRecord>,
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a FileRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Records<'_> {}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a FileRecord;
    type IntoIter = Records<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Corpus {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        for (id, content) in iter {
            corpus.insert(id, content);
        }
        corpus
    }
}
