//! Interactive scoring session
//!
//! Prompt, read one line, rank, print, and again until the user types `exit`
//! or closes the input.

use crate::error::Result;
use crate::presenter::Presenter;
use query::{Input, parse_input};
use score_core::{Corpus, Query, RankedResult, Scorer};
use std::io::{self, BufRead, Write};

/// Anything able to rank a corpus against a query
pub trait Ranker {
    fn rank(&self, corpus: &Corpus, query: &Query) -> score_core::Result<RankedResult>;
}

impl Ranker for Scorer {
    fn rank(&self, corpus: &Corpus, query: &Query) -> score_core::Result<RankedResult> {
        Scorer::rank(self, corpus, query)
    }
}

/// Reads queries typed at the prompt
pub struct QueryReader<R: BufRead> {
    input: R,
    line: String,
}

impl<R: BufRead> QueryReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
        }
    }

    /// Next line of input, `None` once the input is closed.
    pub fn read_query(&mut self) -> io::Result<Option<Input>> {
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(parse_input(&self.line)))
    }
}

pub struct Session<'a, K, R, W>
where
    K: Ranker,
    R: BufRead,
    W: Write,
{
    corpus: &'a Corpus,
    ranker: K,
    limit: usize,
    reader: QueryReader<R>,
    presenter: Presenter<W>,
}

impl<'a, K, R, W> Session<'a, K, R, W>
where
    K: Ranker,
    R: BufRead,
    W: Write,
{
    pub fn new(
        corpus: &'a Corpus,
        ranker: K,
        limit: usize,
        reader: QueryReader<R>,
        presenter: Presenter<W>,
    ) -> Self {
        Self {
            corpus,
            ranker,
            limit,
            reader,
            presenter,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.presenter.show_prompt()?;

            let query = match self.reader.read_query()? {
                Some(Input::Search(query)) => query,
                Some(Input::Blank) => continue,
                Some(Input::Exit) | None => break,
            };

            tracing::debug!("query: {:?}", query);
            let result = self.ranker.rank(self.corpus, &query)?;
            self.presenter.show_top_results(&result, self.limit)?;
        }

        self.presenter.show_exit()?;
        Ok(())
    }

    #[cfg(test)]
    fn into_parts(self) -> (K, W) {
        (self.ranker, self.presenter.into_inner())
    }
}
