use std::{convert::TryFrom, fmt};

pub use crate::source_pos::{Span, Spanned};

use super::operators::{binary_op, BinOp, DELIMITER_PREC};

pub type SpannedTok<'a> = Spanned<Token<'a>>;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token<'a> {
    Op(BinOp),

    // Numbers stay as source text, they only get parsed once the evaluator
    // needs their value
    Num(&'a str),

    Delimiter(Delimiter),
}

impl Token<'_> {
    /// Rank of the token on the operator stack.
    pub fn prec(&self) -> u8 {
        match self {
            Token::Op(op) => op.operator().prec,
            Token::Delimiter(_) | Token::Num(_) => DELIMITER_PREC,
        }
    }

    pub fn is_lparen(&self) -> bool {
        matches!(self, Token::Delimiter(Delimiter::LParen))
    }
}

impl<'a> TryFrom<&'a str> for Token<'a> {
    type Error = ();
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        Ok(match value {
            "(" | ")" => Token::Delimiter(Delimiter::try_from(value)?),
            _ => match binary_op(value) {
                Some(op) => Token::Op(op),
                None => return Err(()),
            },
        })
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Op(op) => write!(f, "{}", op),
            Token::Num(n) => f.write_str(n),
            Token::Delimiter(d) => write!(f, "{}", d),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Delimiter {
    LParen,
    RParen,
}
impl TryFrom<&str> for Delimiter {
    type Error = ();
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(match value {
            "(" => Delimiter::LParen,
            ")" => Delimiter::RParen,
            _ => return Err(()),
        })
    }
}
impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Delimiter::LParen => "(",
            Delimiter::RParen => ")",
        })
    }
}

/// Joins the literal forms of `tokens` with single spaces.
pub fn format_tokens(tokens: &[SpannedTok<'_>]) -> String {
    tokens
        .iter()
        .map(|tok| tok.elem.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
