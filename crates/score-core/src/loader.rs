// score-core/src/loader.rs
//! Corpus loader: reads every accepted file of a directory into memory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use ignore::overrides::{Override, OverrideBuilder};

use crate::config::WalkerConfig;
use crate::error::{Result, ScoreError};
use crate::extract::read_text;
use crate::models::Corpus;

pub struct CorpusLoader {
    config: WalkerConfig,
}

impl CorpusLoader {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Snapshot the content of every accepted file under `dir`.
    ///
    /// A file that cannot be read is skipped with a warning; only a missing
    /// or unlistable directory fails the load.
    pub fn load(&self, dir: &Path) -> Result<Corpus> {
        let files = self.list_files(dir)?;
        let mut corpus = Corpus::new();

        for path in files {
            match read_text(&path) {
                Ok(content) => {
                    let id = file_id(dir, &path);
                    tracing::debug!("loaded {} ({} bytes)", id, content.len());
                    corpus.insert(id, content);
                }
                Err(e) => tracing::warn!("skipping unreadable file {:?}: {}", path, e),
            }
        }

        tracing::info!("loaded {} files from {:?}", corpus.len(), dir);
        Ok(corpus)
    }

    /// Paths of the regular files `load` would read, sorted.
    pub fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        check_directory(dir)?;

        let mut builder = WalkBuilder::new(dir);
        builder
            .hidden(self.config.skip_hidden)
            .parents(self.config.respect_gitignore)
            .git_ignore(self.config.respect_gitignore)
            .git_global(false)
            .git_exclude(false)
            .ignore(self.config.respect_gitignore)
            .require_git(false)
            .follow_links(self.config.follow_symlinks)
            .overrides(self.build_overrides(dir)?);

        if self.config.max_depth > 0 {
            builder.max_depth(Some(self.config.max_depth));
        }

        let mut files = Vec::new();
        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("walk error under {:?}: {}", dir, e);
                    continue;
                }
            };
            if is_regular_file(&entry) && self.config.accepts_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }

    fn build_overrides(&self, dir: &Path) -> Result<Override> {
        let mut builder = OverrideBuilder::new(dir);
        for pattern in &self.config.ignore_patterns {
            builder
                .add(&format!("!{pattern}"))
                .map_err(|e| ScoreError::InvalidConfig(e.to_string()))?;
        }
        builder
            .build()
            .map_err(|e| ScoreError::InvalidConfig(e.to_string()))
    }
}

impl Default for CorpusLoader {
    fn default() -> Self {
        Self::new(WalkerConfig::default())
    }
}

/// A regular file, or a symlink whose target is one. Symlinked directories
/// are only descended into when `follow_symlinks` is set.
fn is_regular_file(entry: &ignore::DirEntry) -> bool {
    match entry.file_type() {
        Some(t) if t.is_file() => true,
        Some(t) if t.is_symlink() => entry.path().is_file(),
        _ => false,
    }
}

/// The directory must exist, be a directory and be listable.
fn check_directory(dir: &Path) -> Result<()> {
    let unreadable = |reason: String| ScoreError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        reason,
    };

    let metadata = match fs::metadata(dir) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ScoreError::DirectoryNotFound(dir.to_path_buf()));
        }
        Err(e) => return Err(unreadable(e.to_string())),
    };
    if !metadata.is_dir() {
        return Err(unreadable("not a directory".to_string()));
    }
    fs::read_dir(dir).map_err(|e| unreadable(e.to_string()))?;
    Ok(())
}

/// Path relative to the root, `/`-separated: the bare file name for direct
/// children.
fn file_id(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
