//! Infix to postfix conversion
//!
//! Classic operator-precedence scan over the token stream with an
//! explicit operator stack. `~` always pushes (it binds to the next
//! primary term); a binary connective first pops every stacked operator
//! of an equal or tighter tier, since all tiers are left-associative.

use super::error::ParseError;
use super::lexer::Token;

/// Convert a normalized token sequence to postfix (reverse Polish) order.
///
/// Parentheses are consumed here; the output contains only operands and
/// operators. Bracket mismatches in either direction are faults.
pub(crate) fn infix_to_postfix(tokens: &[Token]) -> Result<Vec<Token>, ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for &token in tokens {
        match token {
            Token::Const(_) | Token::Var(_) => output.push(token),
            Token::Not | Token::Open => stack.push(token),
            Token::Bin(op) => {
                while let Some(&top) = stack.last() {
                    let pops = match top {
                        Token::Not => true,
                        Token::Bin(stacked) => stacked.precedence() <= op.precedence(),
                        _ => false,
                    };
                    if !pops {
                        break;
                    }
                    output.push(top);
                    stack.pop();
                }
                stack.push(token);
            }
            Token::Close => loop {
                match stack.pop() {
                    Some(Token::Open) => break,
                    Some(op) => output.push(op),
                    None => return Err(ParseError::UnbalancedParenthesis),
                }
            },
        }
    }

    while let Some(token) = stack.pop() {
        if token == Token::Open {
            return Err(ParseError::UnbalancedParenthesis);
        }
        output.push(token);
    }

    Ok(output)
}
