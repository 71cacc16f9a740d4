//! Evaluates arithmetic expressions made of numbers, `+ - * /` and
//! parentheses.
//!
//! The work happens in three stages: the [`Lexer`] splits the input into
//! tokens, [`to_postfix`] reorders them with the shunting-yard algorithm and
//! [`evaluate_postfix`] runs the result on an operand stack. [`evaluate`]
//! chains all three.
//!
//! ```
//! assert_eq!(ssbc::evaluate("(2+3)*4"), Ok(20.0));
//! ```

pub mod errors;
pub mod eval;
pub mod source_pos;
pub mod syntax;

pub use errors::{Error, ErrorInfo, EvalResult};
pub use eval::evaluate_postfix;
pub use syntax::{format_tokens, to_postfix, BinOp, Lexer, SpannedTok, Token};

/// Tokenizes `expression` and returns it in postfix order.
pub fn parse(expression: &str) -> EvalResult<Vec<SpannedTok<'_>>> {
    let tokens = Lexer::new(expression).tokenize();
    if tokens.is_empty() {
        return Err(ErrorInfo::new(Error::EmptyExpression, 0..expression.len()));
    }
    to_postfix(tokens)
}

/// Computes the value of `expression`, stopping at the first error.
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    let postfix = parse(expression)?;
    if postfix.is_empty() {
        // Only parentheses, e.g. `()`.
        return Err(ErrorInfo::new(Error::EmptyExpression, 0..expression.len()));
    }
    evaluate_postfix(postfix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_returns_postfix() {
        let postfix = parse("1 + 2 - (2 + 9)").map(|tokens| format_tokens(&tokens));
        assert_eq!(postfix, Ok("1 2 + 2 9 + -".to_string()));
    }

    #[test]
    fn empty_expressions() {
        assert_eq!(
            evaluate(""),
            Err(ErrorInfo::new(Error::EmptyExpression, 0..0))
        );
        assert_eq!(
            evaluate("   "),
            Err(ErrorInfo::new(Error::EmptyExpression, 0..3))
        );
        assert_eq!(
            evaluate("( )"),
            Err(ErrorInfo::new(Error::EmptyExpression, 0..3))
        );
    }

    #[test]
    fn first_error_wins() {
        // The unbalanced paren is found before the division is ever run.
        assert_eq!(
            evaluate("(5/0"),
            Err(ErrorInfo::new(Error::UnbalancedParentheses, 0..1))
        );
        // The malformed number is evaluated before the division.
        assert_eq!(
            evaluate("1..2/0"),
            Err(ErrorInfo::new(
                Error::MalformedNumber("1..2".to_string()),
                0..4
            ))
        );
    }
}
