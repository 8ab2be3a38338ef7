//! Evaluation and truth-table generation

use std::collections::BTreeMap;

use super::ast::ExprNode;
use super::BooleanExpression;

impl ExprNode {
    /// Evaluate the subtree under the given variable assignment.
    ///
    /// A variable missing from the assignment reads as `false`; every
    /// variable of a parsed formula is registered at build time, so this
    /// only matters for assignments supplied by callers directly.
    pub(crate) fn eval(&self, assignment: &BTreeMap<u8, bool>) -> bool {
        match self {
            ExprNode::Constant(value) => *value,
            ExprNode::Variable(id) => assignment.get(id).copied().unwrap_or(false),
            ExprNode::Not(inner) => !inner.eval(assignment),
            ExprNode::And(left, right) => left.eval(assignment) && right.eval(assignment),
            ExprNode::Or(left, right) => left.eval(assignment) || right.eval(assignment),
            ExprNode::Xor(left, right) => left.eval(assignment) != right.eval(assignment),
            ExprNode::Implies(left, right) => !left.eval(assignment) || right.eval(assignment),
            ExprNode::ConverseImplies(left, right) => {
                left.eval(assignment) || !right.eval(assignment)
            }
            ExprNode::Equivalence(left, right) => left.eval(assignment) == right.eval(assignment),
            ExprNode::Nand(left, right) => !(left.eval(assignment) && right.eval(assignment)),
            ExprNode::Nor(left, right) => !(left.eval(assignment) || right.eval(assignment)),
        }
    }
}

impl BooleanExpression {
    /// Evaluate the formula with a given variable assignment.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolcalc::BooleanExpression;
    /// use std::collections::BTreeMap;
    ///
    /// let formula = BooleanExpression::parse("x1 & x2").unwrap();
    ///
    /// let mut assignment = BTreeMap::new();
    /// assignment.insert(1, true);
    /// assignment.insert(2, true);
    /// assert!(formula.evaluate(&assignment));
    ///
    /// assignment.insert(2, false);
    /// assert!(!formula.evaluate(&assignment));
    /// ```
    pub fn evaluate(&self, assignment: &BTreeMap<u8, bool>) -> bool {
        self.root.eval(assignment)
    }

    /// The complete truth table as a string of `'0'`/`'1'`.
    ///
    /// With `k` distinct variables the table has `2^k` entries (one entry
    /// when the formula is constant), in lexicographic assignment order
    /// with the lowest variable id as the most significant bit.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolcalc::BooleanExpression;
    ///
    /// let formula = BooleanExpression::parse("x1 v x2").unwrap();
    /// assert_eq!(formula.table(), "0111");
    /// ```
    pub fn table(&self) -> String {
        let ids: Vec<u8> = self.workspace.keys().copied().collect();
        let k = ids.len();
        if k == 0 {
            return if self.root.eval(&self.workspace) {
                "1".to_string()
            } else {
                "0".to_string()
            };
        }

        // working copy, so the formula itself stays immutable
        let mut assignment = self.workspace.clone();
        let rows = 1usize << k;
        let mut result = String::with_capacity(rows);

        for row in 0..rows {
            for (j, &id) in ids.iter().enumerate() {
                let bit = row >> (k - 1 - j) & 1 == 1;
                assignment.insert(id, bit);
            }
            result.push(if self.root.eval(&assignment) { '1' } else { '0' });
        }

        result
    }
}
