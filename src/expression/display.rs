//! Display formatting for formulas
//!
//! The rendering contract: echo the normalized infix text verbatim,
//! except that every binary connective gets exactly one space on each
//! side. `~`, digits, parentheses and variable tokens stay unspaced, and
//! source parentheses are preserved as written.

use std::fmt;

use super::BooleanExpression;

impl fmt::Display for BooleanExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chars = self.normalized.chars();
        while let Some(ch) = chars.next() {
            match ch {
                'x' => {
                    f.write_str("x")?;
                    // the digit after 'x' must not be spaced, even though
                    // some digits double as constant tokens
                    if let Some(digit) = chars.next() {
                        write!(f, "{}", digit)?;
                    }
                }
                '&' | 'v' | '+' | '>' | '<' | '=' | '|' | '^' => write!(f, " {} ", ch)?,
                _ => write!(f, "{}", ch)?,
            }
        }
        Ok(())
    }
}
