//! Boolean formula parsing and representation
//!
//! This module provides [`BooleanExpression`], a propositional formula
//! over variables `x1`..`x9` parsed from text. A formula owns its
//! expression tree and its variable binding table; cloning deep-copies
//! both, so instances never share state.
//!
//! # Grammar
//!
//! Constants `0`, `1`; variables `x` followed by one digit `1..=9`;
//! unary `~`; binary connectives in six precedence tiers, tightest
//! first, all left-associative:
//!
//! 1. `~` (negation, prefix)
//! 2. `&` (conjunction)
//! 3. `v` (disjunction), `+` (sum mod 2)
//! 4. `>` (implication), `<` (converse implication)
//! 5. `=` (equivalence)
//! 6. `|` (Sheffer stroke), `^` (Peirce arrow)
//!
//! Space, tab and carriage return are ignored anywhere.
//!
//! # Quick start
//!
//! ```
//! use boolcalc::BooleanExpression;
//!
//! let formula = BooleanExpression::parse("~x1 & x2 v x3")?;
//! assert_eq!(formula.table(), "01110101");
//! assert_eq!(formula.to_string(), "~x1 & x2 v x3");
//!
//! let polynomial = formula.zhegalkin();
//! assert_eq!(polynomial.table(), formula.table());
//! # Ok::<(), boolcalc::ParseError>(())
//! ```

mod anf;
mod ast;
mod builder;
mod display;
pub mod error;
mod eval;
mod lexer;
mod postfix;

pub use ast::ExprNode;
pub use error::ParseError;

use std::collections::BTreeMap;
use std::str::FromStr;

/// A parsed propositional formula.
///
/// Holds the original source text, the normalized (whitespace-stripped)
/// infix text, the owned expression tree and the owned variable binding
/// table. The normalized text is the canonical form: it drives both
/// [`Display`](std::fmt::Display) rendering and equality, which is
/// syntactic — `x1 v x2` and `x2 v x1` are *not* equal even though they
/// compute the same function.
///
/// # Examples
///
/// ```
/// use boolcalc::BooleanExpression;
///
/// let a = BooleanExpression::parse("x1&x2")?;
/// let b = BooleanExpression::parse(" x1 \t & x2 ")?;
/// assert_eq!(a, b); // whitespace is insignificant
///
/// let c = BooleanExpression::parse("x2 & x1")?;
/// assert_ne!(a, c); // equality is syntactic
/// # Ok::<(), boolcalc::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BooleanExpression {
    /// The text the formula was parsed from, verbatim.
    source: String,
    /// Whitespace-free infix text; canonical form for equality and display.
    normalized: String,
    /// Root of the owned expression tree.
    root: ExprNode,
    /// Binding table: variable id -> current value, ascending by id.
    /// Populated with `false` as variables are first encountered.
    workspace: BTreeMap<u8, bool>,
}

impl BooleanExpression {
    /// Parse formula text into a [`BooleanExpression`].
    ///
    /// Runs the full pipeline: normalize, convert to postfix, build the
    /// tree. Any fault aborts construction entirely; no partially built
    /// formula is ever returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolcalc::BooleanExpression;
    ///
    /// let formula = BooleanExpression::parse("x1 > x2")?;
    /// assert_eq!(formula.table(), "1101");
    ///
    /// assert!(BooleanExpression::parse("x1 &").is_err());
    /// assert!(BooleanExpression::parse("(x1 & x2").is_err());
    /// # Ok::<(), boolcalc::ParseError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let tokens = lexer::normalize(input)?;
        let postfix = postfix::infix_to_postfix(&tokens)?;
        let mut workspace = BTreeMap::new();
        let root = builder::build_tree(&postfix, &mut workspace)?;

        Ok(BooleanExpression {
            source: input.to_string(),
            normalized: lexer::render_compact(&tokens),
            root,
            workspace,
        })
    }

    /// The text this formula was parsed from, verbatim.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The distinct variable ids of this formula, ascending.
    pub fn variables(&self) -> impl Iterator<Item = u8> + '_ {
        self.workspace.keys().copied()
    }

    /// The number of distinct variables.
    pub fn variable_count(&self) -> usize {
        self.workspace.len()
    }

    /// The root node of the expression tree.
    pub fn root(&self) -> &ExprNode {
        &self.root
    }
}

/// The constant-false formula `0`.
impl Default for BooleanExpression {
    fn default() -> Self {
        BooleanExpression {
            source: "0".to_string(),
            normalized: "0".to_string(),
            root: ExprNode::Constant(false),
            workspace: BTreeMap::new(),
        }
    }
}

impl FromStr for BooleanExpression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BooleanExpression::parse(s)
    }
}

/// Syntactic equality over the normalized infix text.
impl PartialEq for BooleanExpression {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for BooleanExpression {}
