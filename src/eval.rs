use tracing::trace;

use crate::{
    errors::{Error, ErrorInfo, EvalResult},
    source_pos::Span,
    syntax::tokens::{SpannedTok, Token},
};

/// Runs a postfix token sequence on an operand stack and returns the single
/// value left at the end.
pub fn evaluate_postfix<'a, I>(tokens: I) -> EvalResult<f64>
where
    I: IntoIterator<Item = SpannedTok<'a>>,
{
    let mut stack: Vec<Operand> = vec![];
    for tok in tokens {
        match tok.elem {
            Token::Num(text) => {
                let value = parse_num(text, &tok.span)?;
                trace!(value, "push");
                stack.push(Operand {
                    value,
                    span: tok.span,
                });
            }
            Token::Op(op) => {
                let (lhs, rhs) = match (stack.pop(), stack.pop()) {
                    (Some(rhs), Some(lhs)) => (lhs, rhs),
                    _ => return Err(ErrorInfo::new(Error::InsufficientOperands(op), tok.span)),
                };
                let value = op.apply(lhs.value, rhs.value, &tok.span)?;
                trace!(lhs = lhs.value, %op, rhs = rhs.value, value, "apply");
                stack.push(Operand {
                    value,
                    span: lhs.span.start.min(tok.span.start)..rhs.span.end.max(tok.span.end),
                });
            }
            Token::Delimiter(d) => {
                return Err(ErrorInfo::new(Error::InvalidToken(d.to_string()), tok.span))
            }
        }
    }
    match stack.len() {
        0 => Err(ErrorInfo::new(Error::EmptyExpression, 0..0)),
        1 => Ok(stack[0].value),
        n => Err(ErrorInfo::new(Error::ExtraOperands(n), stack[1].span.clone())),
    }
}

/// A value on the operand stack, with the source range it was computed from.
struct Operand {
    value: f64,
    span: Span,
}

fn parse_num(text: &str, span: &Span) -> EvalResult<f64> {
    text.parse::<f64>()
        .map_err(|_| ErrorInfo::new(Error::MalformedNumber(text.to_string()), span.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{
        operators::BinOp,
        tokens::{Delimiter, Spanned},
    };
    use pretty_assertions::assert_eq;

    fn num(text: &str, at: usize) -> SpannedTok<'_> {
        Spanned::new(Token::Num(text), at..at + text.len())
    }

    fn op(op: BinOp, at: usize) -> SpannedTok<'static> {
        Spanned::new(Token::Op(op), at..at + 1)
    }

    #[test]
    fn evaluates_postfix() {
        // 1 2 + 2 9 + -
        let tokens = vec![
            num("1", 0),
            num("2", 2),
            op(BinOp::Add, 1),
            num("2", 5),
            num("9", 7),
            op(BinOp::Add, 6),
            op(BinOp::Sub, 3),
        ];
        assert_eq!(evaluate_postfix(tokens), Ok(-8.0));
    }

    #[test]
    fn right_operand_is_most_recent() {
        let tokens = vec![num("10", 0), num("4", 3), op(BinOp::Sub, 2)];
        assert_eq!(evaluate_postfix(tokens), Ok(6.0));
        let tokens = vec![num("1", 0), num("4", 2), op(BinOp::Div, 1)];
        assert_eq!(evaluate_postfix(tokens), Ok(0.25));
    }

    #[test]
    fn single_number() {
        assert_eq!(evaluate_postfix(vec![num("2.5", 0)]), Ok(2.5));
        assert_eq!(evaluate_postfix(vec![num(".5", 0)]), Ok(0.5));
        assert_eq!(evaluate_postfix(vec![num("3.", 0)]), Ok(3.0));
    }

    #[test]
    fn malformed_number() {
        assert_eq!(
            evaluate_postfix(vec![num("1.2.3", 4)]),
            Err(ErrorInfo::new(
                Error::MalformedNumber("1.2.3".to_string()),
                4..9
            ))
        );
        assert_eq!(
            evaluate_postfix(vec![num(".", 0)]),
            Err(ErrorInfo::new(Error::MalformedNumber(".".to_string()), 0..1))
        );
    }

    #[test]
    fn insufficient_operands() {
        assert_eq!(
            evaluate_postfix(vec![num("1", 0), op(BinOp::Mul, 1)]),
            Err(ErrorInfo::new(Error::InsufficientOperands(BinOp::Mul), 1..2))
        );
        assert_eq!(
            evaluate_postfix(vec![op(BinOp::Add, 0)]),
            Err(ErrorInfo::new(Error::InsufficientOperands(BinOp::Add), 0..1))
        );
    }

    #[test]
    fn division_by_zero() {
        let tokens = vec![num("5", 0), num("0", 2), op(BinOp::Div, 1)];
        assert_eq!(
            evaluate_postfix(tokens),
            Err(ErrorInfo::new(Error::DivisionByZero, 1..2))
        );
        let tokens = vec![num("5", 0), num("0.0", 2), op(BinOp::Div, 1)];
        assert_eq!(
            evaluate_postfix(tokens),
            Err(ErrorInfo::new(Error::DivisionByZero, 1..2))
        );
    }

    #[test]
    fn delimiters_are_rejected() {
        let tokens = vec![
            num("1", 0),
            Spanned::new(Token::Delimiter(Delimiter::LParen), 1..2),
        ];
        assert_eq!(
            evaluate_postfix(tokens),
            Err(ErrorInfo::new(Error::InvalidToken("(".to_string()), 1..2))
        );
    }

    #[test]
    fn empty_sequence_has_no_value() {
        assert_eq!(
            evaluate_postfix(Vec::new()),
            Err(ErrorInfo::new(Error::EmptyExpression, 0..0))
        );
    }

    #[test]
    fn leftover_operands() {
        let tokens = vec![num("1", 0), num("2", 2), num("3", 4)];
        assert_eq!(
            evaluate_postfix(tokens),
            Err(ErrorInfo::new(Error::ExtraOperands(3), 2..3))
        );
    }
}
