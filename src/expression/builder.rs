//! Builds the expression tree from the postfix token stream

use std::collections::BTreeMap;

use super::ast::ExprNode;
use super::error::ParseError;
use super::lexer::Token;

/// Consume a postfix token stream into a tree, registering every
/// distinct variable into `workspace` with a default value of `false`.
///
/// Binary operators pop their right operand first, then the left, so
/// operand order is preserved for the non-commutative connectives. A pop
/// on an empty stack, or anything other than exactly one tree left at
/// the end, is a fault. Nodes already on the operand stack are released
/// when the stack is dropped on the error path.
pub(crate) fn build_tree(
    postfix: &[Token],
    workspace: &mut BTreeMap<u8, bool>,
) -> Result<ExprNode, ParseError> {
    let mut stack: Vec<ExprNode> = Vec::new();

    for &token in postfix {
        let node = match token {
            Token::Const(value) => ExprNode::Constant(value),
            Token::Var(id) => {
                workspace.entry(id).or_insert(false);
                ExprNode::Variable(id)
            }
            Token::Not => {
                let operand = stack.pop().ok_or(ParseError::MissingOperand)?;
                ExprNode::Not(Box::new(operand))
            }
            Token::Bin(op) => {
                let right = stack.pop().ok_or(ParseError::MissingOperand)?;
                let left = stack.pop().ok_or(ParseError::MissingOperand)?;
                ExprNode::binary(op, left, right)
            }
            // the converter consumes all parentheses
            Token::Open | Token::Close => return Err(ParseError::UnbalancedParenthesis),
        };
        stack.push(node);
    }

    let root = stack.pop().ok_or(ParseError::IncompleteExpression)?;
    if !stack.is_empty() {
        return Err(ParseError::IncompleteExpression);
    }
    Ok(root)
}
