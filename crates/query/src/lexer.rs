use logos::{Logos, Lexer};

/// Raw tokens used internally by logos
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"[^ \t\r\n\f]+", lowercase_slice)]
    Word(String),
}

fn lowercase_slice(lex: &mut Lexer<RawToken>) -> String {
    lex.slice().to_lowercase()
}

/// The public token type
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// A whitespace-delimited word, already lowercased
    Word(String),
}

/// Splits one line of user input into lowercase words
pub struct QueryLexer<'source> {
    lexer: Lexer<'source, RawToken>,
}

impl<'source> QueryLexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            lexer: RawToken::lexer(source),
        }
    }

    /// Consume the lexer, keeping only the words
    pub fn words(self) -> impl Iterator<Item = String> + 'source {
        self.filter_map(|token| token.ok()).map(|Token::Word(w)| w)
    }
}

impl<'source> Iterator for QueryLexer<'source> {
    type Item = Result<Token, ()>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.lexer.next()? {
            Ok(RawToken::Word(w)) => Some(Ok(Token::Word(w))),
            Err(_) => Some(Err(())),
        }
    }
}
