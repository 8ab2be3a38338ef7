//! Functional completeness checking via Post's criterion
//!
//! A set of Boolean functions is functionally complete iff it is not
//! wholly contained in any of the five maximal closed classes:
//! zero-preserving, one-preserving, self-dual, monotone and linear
//! functions. Each formula's truth table (and, for linearity, its
//! Zhegalkin polynomial) is tested against all five.

use crate::BooleanExpression;

/// Recursive-halving monotonicity test over a truth table.
///
/// A table of length <= 2 is monotone iff its first entry <= its last.
/// Otherwise both halves must be monotone and every entry of the first
/// half must be <= every entry of the second (splitting the table in two
/// fixes the most significant unresolved variable).
fn is_monotone(table: &[u8]) -> bool {
    if table.len() <= 2 {
        return table[0] <= table[table.len() - 1];
    }
    let (low, high) = table.split_at(table.len() / 2);
    is_monotone(low)
        && is_monotone(high)
        && low.iter().all(|a| high.iter().all(|b| a <= b))
}

/// Self-duality test: a self-dual table differs at every mirrored pair
/// of positions.
fn is_self_dual(table: &[u8]) -> bool {
    table
        .iter()
        .zip(table.iter().rev())
        .take(table.len() / 2)
        .all(|(a, b)| a != b)
}

/// Check a system of formulas for functional completeness.
///
/// The system is complete iff each of the five Post predicates (not
/// zero-preserving, not one-preserving, not self-dual, not monotone,
/// not linear) is witnessed by at least one formula — not necessarily
/// the same one for each.
///
/// # Examples
///
/// ```
/// use boolcalc::{is_full_system, BooleanExpression};
///
/// let sheffer = vec![BooleanExpression::parse("x1 | x2")?];
/// assert!(is_full_system(&sheffer));
///
/// let conjunction = vec![BooleanExpression::parse("x1 & x2")?];
/// assert!(!is_full_system(&conjunction));
/// # Ok::<(), boolcalc::ParseError>(())
/// ```
pub fn is_full_system(system: &[BooleanExpression]) -> bool {
    let mut not_zero_preserving = false;
    let mut not_one_preserving = false;
    let mut not_self_dual = false;
    let mut not_monotone = false;
    let mut not_linear = false;

    for formula in system {
        let table = formula.table();
        let table = table.as_bytes();

        // the all-false assignment comes first, the all-true one last
        if table[0] == b'1' {
            not_zero_preserving = true;
        }
        if table[table.len() - 1] == b'0' {
            not_one_preserving = true;
        }
        if !is_self_dual(table) {
            not_self_dual = true;
        }
        if !is_monotone(table) {
            not_monotone = true;
        }
        // a monomial of degree >= 2 shows up as '&' in the polynomial
        if formula.zhegalkin().to_string().contains('&') {
            not_linear = true;
        }
    }

    not_zero_preserving && not_one_preserving && not_self_dual && not_monotone && not_linear
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(formulas: &[&str]) -> Vec<BooleanExpression> {
        formulas
            .iter()
            .map(|text| BooleanExpression::parse(text).unwrap())
            .collect()
    }

    #[test]
    fn test_is_monotone() {
        assert!(is_monotone(b"0"));
        assert!(is_monotone(b"1"));
        assert!(is_monotone(b"01"));
        assert!(!is_monotone(b"10"));
        assert!(is_monotone(b"0001")); // x1 & x2
        assert!(is_monotone(b"0111")); // x1 v x2
        assert!(!is_monotone(b"0110")); // x1 + x2
        assert!(!is_monotone(b"1101")); // x1 > x2
    }

    #[test]
    fn test_is_self_dual() {
        assert!(is_self_dual(b"01")); // x1
        assert!(is_self_dual(b"10")); // ~x1
        assert!(!is_self_dual(b"0001")); // x1 & x2
        assert!(is_self_dual(b"00010111")); // the majority function
    }

    #[test]
    fn test_single_sheffer_or_peirce_is_complete() {
        assert!(is_full_system(&system(&["x1 | x2"])));
        assert!(is_full_system(&system(&["x1 ^ x2"])));
    }

    #[test]
    fn test_classic_complete_systems() {
        assert!(is_full_system(&system(&["~x1", "x1 & x2"])));
        assert!(is_full_system(&system(&["~x1", "x1 v x2"])));
        assert!(is_full_system(&system(&["~x1", "x1 > x2"])));
        assert!(is_full_system(&system(&["1", "x1 + x2", "x1 & x2"])));
        assert!(is_full_system(&system(&["0", "x1 & x2", "x1 = x2"])));
    }

    #[test]
    fn test_compound_complete_systems() {
        assert!(is_full_system(&system(&[
            "1",
            "~x1",
            "x1 + x2 + x1 & x2 + x2 & x3 + x3 & x1",
            "x1 & x2 & (x1 + x2)",
        ])));
        assert!(is_full_system(&system(&[
            "0",
            "x1 + x2",
            "x1 > x2",
            "x1 & x2 = x3 & x1",
        ])));
        assert!(is_full_system(&system(&[
            "x1 & x2 + x3",
            "x1 + x2 + 1",
            "x1 & ~x2",
            "~x1",
        ])));
    }

    #[test]
    fn test_single_functions_are_incomplete() {
        for formula in [
            "0", "1", "x1", "~x1", "x1 & x2", "x1 v x2", "x1 > x2", "x1 < x2", "x1 + x2",
            "x1 = x2",
        ] {
            assert!(
                !is_full_system(&system(&[formula])),
                "{{{}}} must not be complete",
                formula
            );
        }
    }

    #[test]
    fn test_incomplete_pairs_and_triples() {
        assert!(!is_full_system(&system(&["x1 & x2", "0"])));
        assert!(!is_full_system(&system(&["x1 v x2", "x1"])));
        assert!(!is_full_system(&system(&["~x1", "x1 + x2"])));
        assert!(!is_full_system(&system(&["~x1", "x1"])));
        assert!(!is_full_system(&system(&["1", "x1 + x2", "x1 = x2"])));
        assert!(!is_full_system(&system(&["0", "x1 & x2", "x1 v x2"])));
    }

    #[test]
    fn test_incomplete_compound_systems() {
        assert!(!is_full_system(&system(&[
            "x1 & x2",
            "x1 & x2 & x3 & x4 & x5 & x6",
        ])));
        assert!(!is_full_system(&system(&[
            "x1 v x2 v 1",
            "x1 + x2 + x1 & x2 + x2 & x3 + x3 & x1",
        ])));
        assert!(!is_full_system(&system(&[
            "x1 + x2 + x1 & x2 + x2 & x3 + x3 & x1",
            "x1 & x2 & (x1 + x2)",
        ])));
        assert!(!is_full_system(&system(&["1", "x1 & x2 = x3 & x1"])));
        assert!(!is_full_system(&system(&[
            "x1 + x2 + x3",
            "x1 & x2 + x2 & x3 + x3 & x1",
            "x1 & x2 + x3",
        ])));
        assert!(!is_full_system(&system(&["x1 & x2 + x3", "x1 & ~x2"])));
        assert!(!is_full_system(&system(&[
            "x9 + x2",
            "x1 + x2 + x3",
            "x1 & x2",
        ])));
    }

    #[test]
    fn test_empty_system_is_incomplete() {
        assert!(!is_full_system(&[]));
    }
}
