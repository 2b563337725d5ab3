pub const TOP_LEVEL_DOMAIN: &str = "io";
pub const AUTHOR: &str = "shodo";
pub const APP_NAME: &str = "scores";

pub const CONFIG_FILE_NAME: &str = "scores.toml";
pub const CONFIG_ENV_KEY: &str = "SCORES_CONFIG";
