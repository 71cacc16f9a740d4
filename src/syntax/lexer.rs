use std::{convert::TryFrom, iter::Peekable, str::CharIndices};

use tracing::{debug, trace};

use crate::syntax::tokens::{format_tokens, Spanned, SpannedTok, Token};

pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
}
macro_rules! many {
    ($name: ident, $predicate: expr, $token: path) => {
        pub fn $name(&mut self, start: usize) -> SpannedTok<'a> {
            let mut end = start + 1;
            while let Some((pos, c)) = self.next_if($predicate) {
                end = pos + c.len_utf8();
            }
            let span = start..end;
            Spanned {
                elem: $token(&self.source[span.clone()]),
                span,
            }
        }
    };
}
impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
        }
    }

    /// Splits the source into numbers, operators and parentheses. Anything
    /// else, whitespace included, only separates tokens.
    ///
    /// Number runs are not validated here: `1.2.3` comes out as a single
    /// `Num` and gets rejected when it is evaluated.
    pub fn tokenize(mut self) -> Vec<SpannedTok<'a>> {
        let mut tokens = vec![];
        while let Some((pos, char)) = self.next() {
            match char {
                c if is_num_char(c) => tokens.push(self.num(pos)),
                c => {
                    let span = pos..pos + c.len_utf8();
                    match Token::try_from(&self.source[span.clone()]) {
                        Ok(elem) => tokens.push(Spanned { elem, span }),
                        Err(()) => trace!(?c, pos, "separator"),
                    }
                }
            }
        }
        debug!(tokens = %format_tokens(&tokens), "tokenized");
        tokens
    }

    many!(num, is_num_char, Token::Num);

    pub fn next_if(&mut self, predicate: impl Fn(char) -> bool) -> Option<(usize, char)> {
        if predicate(self.peek()?.1) {
            return self.next();
        }
        None
    }
    fn peek(&mut self) -> Option<&(usize, char)> {
        self.chars.peek()
    }
}
impl Iterator for Lexer<'_> {
    type Item = (usize, char);
    fn next(&mut self) -> Option<(usize, char)> {
        self.chars.next()
    }
}

fn is_num_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Shorthand for `Lexer::new(source).tokenize()`.
pub fn tokenize(source: &str) -> Vec<SpannedTok<'_>> {
    Lexer::new(source).tokenize()
}
