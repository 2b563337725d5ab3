use crate::{Query, QueryLexer};

/// What one line of interactive input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// No words at all; the caller should prompt again
    Blank,

    /// The terminating query
    Exit,

    /// Words to rank the corpus against
    Search(Query),
}

/// Interpret one line typed at the prompt.
///
/// `exit` is reserved only when it is the whole query. Any other combination
/// containing it is an ordinary search.
pub fn parse_input(line: &str) -> Input {
    let query: Query = QueryLexer::new(line).words().collect();

    if query.is_empty() {
        Input::Blank
    } else if query.is_exit() {
        Input::Exit
    } else {
        Input::Search(query)
    }
}
