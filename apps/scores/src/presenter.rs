use score_core::RankedResult;
use std::io::{self, Write};
use std::path::Path;

pub const PROMPT: &str = "search> ";

/// Console rendering of the session
pub struct Presenter<W: Write> {
    out: W,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn show_file_count(&mut self, count: usize, directory: &Path) -> io::Result<()> {
        let noun = if count == 1 { "file" } else { "files" };
        writeln!(self.out, "{} {} read in directory {}", count, noun, directory.display())
    }

    pub fn show_prompt(&mut self) -> io::Result<()> {
        write!(self.out, "{PROMPT}")?;
        self.out.flush()
    }

    /// One line per file, best first, at most `limit` lines.
    pub fn show_top_results(&mut self, result: &RankedResult, limit: usize) -> io::Result<()> {
        if result.is_empty() {
            return writeln!(self.out, "no files to rank");
        }
        for entry in result.top(limit) {
            writeln!(self.out, "{} : {:.2}%", entry.file_id, entry.score)?;
        }
        Ok(())
    }

    pub fn show_exit(&mut self) -> io::Result<()> {
        writeln!(self.out, "Exiting...")
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use score_core::{Corpus, MatchMode, Query, rank};

    fn render(f: impl FnOnce(&mut Presenter<Vec<u8>>) -> io::Result<()>) -> String {
        let mut presenter = Presenter::new(Vec::new());
        f(&mut presenter).unwrap();
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn test_file_count() {
        let out = render(|p| p.show_file_count(3, Path::new("docs")));
        assert_eq!(out, "3 files read in directory docs\n");
        let out = render(|p| p.show_file_count(1, Path::new("docs")));
        assert_eq!(out, "1 file read in directory docs\n");
    }

    #[test]
    fn test_results_are_truncated() {
        let corpus: Corpus = [("a.txt", "cat dog"), ("b.txt", "cat"), ("c.txt", "")]
            .into_iter()
            .collect();
        let result = rank(&corpus, &Query::from_words(["cat", "dog", "bird"]), MatchMode::Token).unwrap();

        let out = render(|p| p.show_top_results(&result, 2));
        assert_eq!(out, "a.txt : 66.67%\nb.txt : 33.33%\n");
    }

    #[test]
    fn test_empty_result() {
        let out = render(|p| p.show_top_results(&RankedResult::default(), 10));
        assert_eq!(out, "no files to rank\n");
    }

    #[test]
    fn test_prompt_and_exit() {
        let out = render(|p| {
            p.show_prompt()?;
            p.show_exit()
        });
        assert_eq!(out, "search> Exiting...\n");
    }
}
