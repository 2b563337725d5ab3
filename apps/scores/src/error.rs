pub type Result<T> = color_eyre::Result<T>;

pub use color_eyre::eyre::WrapErr;

/// Failures reported to the user as a single line, before the session starts
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No directory given to index. Please pass the directory containing the files to read.")]
    InvalidArguments,
}
