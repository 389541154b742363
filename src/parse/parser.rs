use super::{ast::*, lexer::*};
use logos_iter::LogosIter;
use crate::common::*;
use std::fmt;
use std::ops::Range;

type PResult<T> = Result<T, ParseError>;

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[error("error at position {} ({slice:?}): {kind}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Range<usize>,
    pub slice: String,
}

impl ParseError {
    /// Whether the input contained a character that starts no token.
    pub fn is_lex_error(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Lex)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseErrorKind {
    Lex,
    UnexpectedToken {
        found: TokenKind,
        expected: Vec<TokenKind>,
    },
    UnexpectedEnd {
        expected: Vec<TokenKind>,
    },
    ZeroSides,
    IntegerOverflow,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex => f.write_str("unrecognized input"),
            Self::UnexpectedToken { found, expected } => {
                write!(f, "unexpected token: found {}, expected ", found)?;
                fmt_expected(expected, f)
            }
            Self::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of input, expected ")?;
                fmt_expected(expected, f)
            }
            Self::ZeroSides => f.write_str("dice must have at least one side"),
            Self::IntegerOverflow => write!(f, "integer is larger than {}", UInt::MAX),
        }
    }
}

fn fmt_expected(expected: &[TokenKind], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let len = expected.len();

    if expected.is_empty() {
        Ok(())
    } else if len == 1 {
        f.write_str(expected[0].to_str())
    } else if len == 2 {
        write!(f, "{} or {}", expected[0].to_str(), expected[1].to_str())
    } else {
        for exp in &expected[..len - 1] {
            write!(f, "{}, ", exp.to_str())?;
        }
        write!(f, "or {}", expected[len - 1].to_str())
    }
}

pub struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    const LEADING: &'static [TokenKind] = &[TokenKind::Plus, TokenKind::Minus, TokenKind::Integer];

    pub fn new(s: &'a str) -> Self {
        Self {
            source: s,
            lexer: lexer(s),
        }
    }

    pub fn parse(mut self) -> PResult<Expression> {
        self.parse_expression()
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.lexer.peek().map_or(false, |&peeked| peeked == kind)
    }

    fn matches_any(&mut self, options: &[TokenKind]) -> bool {
        self.lexer
            .peek()
            .map_or(false, |peeked| options.contains(peeked))
    }

    fn at_end(&mut self) -> bool {
        self.lexer.peek().is_none()
    }

    fn consume(&mut self, expected: TokenKind) -> PResult<()> {
        if self.matches(expected) {
            self.lexer.next();
            Ok(())
        } else {
            self.unexpected_token(vec![expected])
        }
    }

    fn consume_int(&mut self) -> PResult<UInt> {
        self.consume(TokenKind::Integer)?;
        match self.lexer.slice().parse() {
            Ok(x) => Ok(x),
            Err(_) => self.error(ParseErrorKind::IntegerOverflow),
        }
    }

    fn error<T>(&mut self, kind: ParseErrorKind) -> PResult<T> {
        Err(ParseError {
            kind,
            span: self.lexer.span(),
            slice: self.lexer.slice().to_string(),
        })
    }

    fn unexpected_token<T>(&mut self, expected: Vec<TokenKind>) -> PResult<T> {
        match self.lexer.next() {
            Some(TokenKind::Error) => self.error(ParseErrorKind::Lex),
            Some(found) => self.error(ParseErrorKind::UnexpectedToken { found, expected }),
            None => {
                let end = self.source.len();
                Err(ParseError {
                    kind: ParseErrorKind::UnexpectedEnd { expected },
                    span: end..end,
                    slice: String::new(),
                })
            }
        }
    }

    fn parse_expression(&mut self) -> PResult<Expression> {
        if !self.matches_any(Self::LEADING) {
            return self.unexpected_token(Self::LEADING.to_vec());
        }

        let sign = if self.matches(TokenKind::Integer) {
            Sign::Add
        } else {
            self.parse_sign()?
        };
        let mut terms = NonEmpty::new(self.parse_term(sign)?);

        while !self.at_end() {
            let sign = self.parse_sign()?;
            terms.push(self.parse_term(sign)?);
        }

        Ok(Expression::new(terms))
    }

    fn parse_sign(&mut self) -> PResult<Sign> {
        match self.lexer.peek().and_then(TokenKind::as_sign) {
            Some(sign) => {
                self.lexer.next();
                Ok(sign)
            }
            None => self.unexpected_token(TokenKind::SIGNS.to_vec()),
        }
    }

    fn parse_term(&mut self, sign: Sign) -> PResult<Term> {
        let count = self.consume_int()?;

        if !self.matches(TokenKind::DieMarker) {
            return Ok(Term::new(sign, Constant::new(count)));
        }
        self.lexer.next();

        let sides = self.consume_int()?;
        match NonZeroUInt::new(sides) {
            Some(sides) => Ok(Term::new(sign, Dice::new(count, sides))),
            None => self.error(ParseErrorKind::ZeroSides),
        }
    }
}
