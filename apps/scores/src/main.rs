mod cli;
mod error;
mod presenter;
mod session;
mod settings;

use error::{AppError, WrapErr};
use presenter::Presenter;
use session::{QueryReader, Session};
use settings::Settings;

use clap::Parser;
use color_eyre::Report;
use score_core::{CorpusLoader, ScoreError, Scorer};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::Level;

fn main() -> error::Result<ExitCode> {
    color_eyre::install()?;
    let command_line = cli::Cli::parse();
    init_logging(command_line.verbose);

    let outcome = Settings::load()
        .context("Load configuration error")
        .and_then(|settings| {
            run(
                &command_line,
                settings,
                io::stdin().lock(),
                io::stdout().lock(),
            )
        });

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(report) => match failure_line(&report) {
            Some(line) => {
                eprintln!("{line}");
                Ok(ExitCode::FAILURE)
            }
            None => Err(report),
        },
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// Argument and directory problems are reported as one line on stderr with a
/// failure exit code; everything else keeps the full report.
fn failure_line(report: &Report) -> Option<String> {
    if let Some(e) = report.downcast_ref::<AppError>() {
        return Some(e.to_string());
    }
    match report.downcast_ref::<ScoreError>() {
        Some(e) if e.is_directory_error() => {
            Some(format!("{e}. Please pass an existing, readable directory."))
        }
        _ => None,
    }
}

fn run<R: BufRead, W: Write>(
    command_line: &cli::Cli,
    mut settings: Settings,
    input: R,
    output: W,
) -> error::Result<()> {
    settings.apply_cli(command_line);

    let directory = command_line
        .directory
        .clone()
        .or_else(|| settings.default_directory.clone())
        .ok_or(AppError::InvalidArguments)?;

    let corpus = CorpusLoader::new(settings.walker.clone()).load(&directory)?;

    let mut presenter = Presenter::new(output);
    presenter.show_file_count(corpus.len(), &directory)?;

    let reader = QueryReader::new(input);
    let scorer = Scorer::new(settings.match_mode);
    Session::new(&corpus, scorer, settings.limit, reader, presenter).run()
}
