pub mod lexer;
pub mod parser;
pub mod query;

pub use lexer::{Token, QueryLexer};
pub use parser::{Input, parse_input};
pub use query::{Query, EXIT_WORD};
