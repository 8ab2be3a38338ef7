//! Line-oriented batch processing for the command-line front end
//!
//! Every line of the input is an independent formula. All three reports
//! are all-or-nothing: the first faulting line aborts the whole batch,
//! so a caller never sees partial output next to a fault.

use crate::completeness::is_full_system;
use crate::expression::{BooleanExpression, ParseError};

/// One truth table per input line, newline-terminated.
///
/// # Examples
///
/// ```
/// use boolcalc::table_report;
///
/// assert_eq!(table_report("x1 & x2\n~x1")?, "0001\n10\n");
/// assert!(table_report("x1\na & b").is_err());
/// # Ok::<(), boolcalc::ParseError>(())
/// ```
pub fn table_report(input: &str) -> Result<String, ParseError> {
    let mut output = String::new();
    for line in input.lines() {
        let formula = BooleanExpression::parse(line)?;
        output.push_str(&formula.table());
        output.push('\n');
    }
    Ok(output)
}

/// One rendered Zhegalkin polynomial per input line, newline-terminated.
///
/// # Examples
///
/// ```
/// use boolcalc::zhegalkin_report;
///
/// assert_eq!(zhegalkin_report("x1 v x2")?, "x2 + x1 + x1 & x2\n");
/// # Ok::<(), boolcalc::ParseError>(())
/// ```
pub fn zhegalkin_report(input: &str) -> Result<String, ParseError> {
    let mut output = String::new();
    for line in input.lines() {
        let formula = BooleanExpression::parse(line)?;
        output.push_str(&formula.zhegalkin().to_string());
        output.push('\n');
    }
    Ok(output)
}

/// `"yes"` if the formulas form a functionally complete system, `"no"`
/// otherwise.
///
/// # Examples
///
/// ```
/// use boolcalc::completeness_report;
///
/// assert_eq!(completeness_report("x1 | x2")?, "yes");
/// assert_eq!(completeness_report("x1 & x2\nx1 v x2")?, "no");
/// # Ok::<(), boolcalc::ParseError>(())
/// ```
pub fn completeness_report(input: &str) -> Result<String, ParseError> {
    let system = input
        .lines()
        .map(BooleanExpression::parse)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(if is_full_system(&system) { "yes" } else { "no" }.to_string())
}
