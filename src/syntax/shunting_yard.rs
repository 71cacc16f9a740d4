use tracing::debug;

use crate::{
    errors::{Error, ErrorInfo, EvalResult},
    syntax::tokens::{format_tokens, Delimiter, SpannedTok, Token},
};

/// Reorders infix tokens into postfix (reverse polish) order.
///
/// `*` and `/` bind tighter than `+` and `-`, and operators of equal rank
/// associate to the left. Parentheses only group, they never appear in the
/// output. A `)` without a matching `(`, or a `(` that is never closed, is
/// reported as [`Error::UnbalancedParentheses`].
pub fn to_postfix<'a, I>(tokens: I) -> EvalResult<Vec<SpannedTok<'a>>>
where
    I: IntoIterator<Item = SpannedTok<'a>>,
{
    // Only ever holds operators and `(`.
    let mut op_stack: Vec<SpannedTok<'a>> = vec![];
    let mut output = vec![];
    for tok in tokens {
        match tok.elem {
            Token::Num(_) => output.push(tok),
            Token::Op(op) => {
                let incoming = op.operator();
                // `(` ranks below every operator, so it always stops the popping.
                while let Some(top) = op_stack.last().map(|top| top.elem) {
                    if !incoming.is_outranked_by(top.prec()) {
                        break;
                    }
                    output.extend(op_stack.pop());
                }
                op_stack.push(tok);
            }
            Token::Delimiter(Delimiter::LParen) => op_stack.push(tok),
            Token::Delimiter(Delimiter::RParen) => loop {
                match op_stack.pop() {
                    Some(top) if top.elem.is_lparen() => break,
                    Some(top) => output.push(top),
                    None => return Err(ErrorInfo::new(Error::UnbalancedParentheses, tok.span)),
                }
            },
        }
    }
    while let Some(top) = op_stack.pop() {
        if top.elem.is_lparen() {
            return Err(ErrorInfo::new(Error::UnbalancedParentheses, top.span));
        }
        output.push(top);
    }
    debug!(postfix = %format_tokens(&output), "converted");
    Ok(output)
}
