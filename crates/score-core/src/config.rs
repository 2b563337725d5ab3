// score-core/src/config.rs
//! Corpus loading options

use serde::{Deserialize, Serialize};

/// Walker configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct WalkerConfig {
    /// 1 lists only the direct children of the directory, 0 is unlimited
    pub max_depth: usize,
    pub skip_hidden: bool,
    pub respect_gitignore: bool,
    pub follow_symlinks: bool,
    /// Glob patterns whose matches are left out of the corpus
    pub ignore_patterns: Vec<String>,
    /// Accepted extensions without the dot; empty accepts every file
    pub extensions: Vec<String>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: 1,
            skip_hidden: false,
            respect_gitignore: false,
            follow_symlinks: false,
            ignore_patterns: vec![],
            extensions: vec![],
        }
    }
}

impl WalkerConfig {
    /// Whether a file name passes the extension filter.
    pub fn accepts_extension(&self, path: &std::path::Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return false;
        };
        self.extensions
            .iter()
            .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}
