use clap::{ArgAction, Parser};
use score_core::MatchMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Directory containing the files to score (defaults to `default-directory` from the config file)
    pub directory: Option<PathBuf>,

    /// Only read files with this extension. Can be repeated (e.g., -e txt -e md).
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// How query words are matched: `token` (whole words) or `substring`
    #[arg(short, long, value_name = "MODE")]
    pub match_mode: Option<MatchMode>,

    /// Number of results shown per query
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
