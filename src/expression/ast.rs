//! Expression tree nodes
//!
//! The tree is a closed set of variants: each binary node exclusively
//! owns its two operand subtrees, so a tree is always a strict
//! sharing-free binary/unary tree and release is recursive `Drop`.

use super::lexer::BinOp;

/// A node of a parsed formula tree.
///
/// A `Variable` holds the one-digit identifier of the variable it
/// references; the value is resolved against the owning
/// [`BooleanExpression`]'s binding table at evaluation time, so nodes
/// never point into the table.
///
/// [`BooleanExpression`]: super::BooleanExpression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode {
    /// A literal `0` or `1`
    Constant(bool),
    /// A reference to variable `x<id>`, `id` in `1..=9`
    Variable(u8),
    /// `~a`
    Not(Box<ExprNode>),
    /// `a & b`
    And(Box<ExprNode>, Box<ExprNode>),
    /// `a v b`
    Or(Box<ExprNode>, Box<ExprNode>),
    /// `a + b` (sum mod 2)
    Xor(Box<ExprNode>, Box<ExprNode>),
    /// `a > b`
    Implies(Box<ExprNode>, Box<ExprNode>),
    /// `a < b`
    ConverseImplies(Box<ExprNode>, Box<ExprNode>),
    /// `a = b`
    Equivalence(Box<ExprNode>, Box<ExprNode>),
    /// `a | b` (Sheffer stroke)
    Nand(Box<ExprNode>, Box<ExprNode>),
    /// `a ^ b` (Peirce arrow)
    Nor(Box<ExprNode>, Box<ExprNode>),
}

impl ExprNode {
    /// Build the binary node for `op` with `(left, right)` in that order.
    pub(crate) fn binary(op: BinOp, left: ExprNode, right: ExprNode) -> ExprNode {
        let (left, right) = (Box::new(left), Box::new(right));
        match op {
            BinOp::And => ExprNode::And(left, right),
            BinOp::Or => ExprNode::Or(left, right),
            BinOp::Xor => ExprNode::Xor(left, right),
            BinOp::Implies => ExprNode::Implies(left, right),
            BinOp::ConverseImplies => ExprNode::ConverseImplies(left, right),
            BinOp::Equivalence => ExprNode::Equivalence(left, right),
            BinOp::Nand => ExprNode::Nand(left, right),
            BinOp::Nor => ExprNode::Nor(left, right),
        }
    }
}
