pub mod constants;

pub use etcetera::AppStrategy;
use etcetera::{AppStrategyArgs, HomeDirError, choose_app_strategy};

use std::path::PathBuf;
use std::env;


pub fn create_strategy() -> std::result::Result<impl AppStrategy, HomeDirError> {
    choose_app_strategy(AppStrategyArgs {
        top_level_domain: constants::TOP_LEVEL_DOMAIN.to_string(),
        author: constants::AUTHOR.to_string(),
        app_name: constants::APP_NAME.to_string(),
    })
}

/// Location of the user config file.
///
/// `SCORES_CONFIG` wins over the platform config directory.
pub fn config_file_path() -> std::result::Result<PathBuf, HomeDirError> {
    match env::var_os(constants::CONFIG_ENV_KEY) {
        Some(path) => Ok(PathBuf::from(path)),
        None => Ok(create_strategy()?.config_dir().join(constants::CONFIG_FILE_NAME)),
    }
}
