use crate::cli::Cli;
use crate::error::{Result, WrapErr};
use score_core::{MatchMode, WalkerConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Results shown per query unless configured otherwise
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Settings {
    /// Directory used when none is given on the command line
    pub default_directory: Option<PathBuf>,
    pub limit: usize,
    pub match_mode: MatchMode,
    pub walker: WalkerConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_directory: None,
            limit: DEFAULT_LIMIT,
            match_mode: MatchMode::default(),
            walker: WalkerConfig::default(),
        }
    }
}

impl Settings {
    fn load_str(user_config_str: &str) -> Result<Settings> {
        let user_config: Settings = toml::from_str(user_config_str)?;
        Ok(user_config)
    }

    /// Read the user config file. Nothing is written: a missing file, or no
    /// resolvable config directory, means defaults.
    pub fn load() -> Result<Settings> {
        match config::config_file_path() {
            Ok(config_path) => Self::load_from(&config_path),
            Err(e) => {
                tracing::warn!("no config directory ({}), using defaults", e);
                Ok(Settings::default())
            }
        }
    }

    fn load_from(config_path: &Path) -> Result<Settings> {
        match std::fs::read_to_string(config_path) {
            Ok(user_config_str) => Self::load_str(&user_config_str)
                .wrap_err_with(|| format!("Invalid config file {}", config_path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no config file at {:?}, using defaults", config_path);
                Ok(Settings::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Command line flags win over the config file.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if !cli.extensions.is_empty() {
            self.walker.extensions = cli.extensions.clone();
        }
        if let Some(mode) = cli.match_mode {
            self.match_mode = mode;
        }
        if let Some(limit) = cli.limit {
            self.limit = limit;
        }
    }
}
