//! # boolcalc
//!
//! A calculator for two-valued propositional formulas over the variables
//! `x1`..`x9`. Formula text is parsed into an expression tree that can
//! be evaluated under arbitrary assignments, expanded into its complete
//! truth table, and rewritten as its canonical Zhegalkin polynomial
//! (XOR-of-AND-monomials normal form). A set of formulas can be tested
//! for functional completeness with Post's criterion.
//!
//! ## Parsing and truth tables
//!
//! ```
//! use boolcalc::BooleanExpression;
//!
//! let formula = BooleanExpression::parse("x1 > x2 = ~x1 v x2")?;
//!
//! // 2^k entries for k distinct variables; the lowest variable id is
//! // the most significant bit of the assignment index
//! assert_eq!(formula.table(), "1111");
//! # Ok::<(), boolcalc::ParseError>(())
//! ```
//!
//! ## Zhegalkin polynomials
//!
//! ```
//! use boolcalc::BooleanExpression;
//!
//! let disjunction = BooleanExpression::parse("x1 v x2")?;
//! let polynomial = disjunction.zhegalkin();
//!
//! assert_eq!(polynomial.to_string(), "x2 + x1 + x1 & x2");
//! // the polynomial is a formula again, equivalent to the original
//! assert_eq!(polynomial.table(), disjunction.table());
//! # Ok::<(), boolcalc::ParseError>(())
//! ```
//!
//! ## Completeness of a formula system
//!
//! ```
//! use boolcalc::{is_full_system, BooleanExpression};
//!
//! let system = vec![
//!     BooleanExpression::parse("~x1")?,
//!     BooleanExpression::parse("x1 & x2")?,
//! ];
//! assert!(is_full_system(&system));
//! # Ok::<(), boolcalc::ParseError>(())
//! ```
//!
//! ## Batch processing
//!
//! The [`table_report`], [`zhegalkin_report`] and [`completeness_report`]
//! functions process one formula per input line and back the `boolcalc`
//! command-line binary (built with the `cli` feature). They are
//! all-or-nothing: a fault on any line discards the whole batch.

mod batch;
mod completeness;
pub mod expression;

pub use batch::{completeness_report, table_report, zhegalkin_report};
pub use completeness::is_full_system;
pub use expression::{BooleanExpression, ExprNode, ParseError};
