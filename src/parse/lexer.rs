use crate::common::Sign;
use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};
use std::fmt;

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

pub fn lexer(s: &str) -> Lexer {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r"[dD]")]
    DieMarker,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    #[regex(r"[ \t\n\x0C\r]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    pub const SIGNS: &'static [Self] = &[Self::Plus, Self::Minus];

    pub fn to_str(&self) -> &'static str {
        match self {
            Self::Integer => "<integer>",
            Self::DieMarker => "'d'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Error => "<error>",
        }
    }

    pub fn as_sign(&self) -> Option<Sign> {
        Some(match self {
            Self::Plus => Sign::Add,
            Self::Minus => Sign::Sub,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}
