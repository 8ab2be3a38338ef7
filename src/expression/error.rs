//! Error types for formula parsing

use std::fmt;
use std::io;

/// Errors produced while parsing a formula.
///
/// Parsing either fully succeeds or fails with one of these kinds; a
/// partially constructed [`BooleanExpression`] is never returned.
/// Positions are byte offsets into the original (unnormalized) input.
///
/// [`BooleanExpression`]: super::BooleanExpression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// A character outside the formula alphabet.
    InvalidCharacter {
        /// The offending character
        character: char,
        /// Byte offset in the input where it occurred
        position: usize,
    },
    /// An `x` not followed by exactly one digit `1..=9`.
    InvalidVariable {
        /// Byte offset of the `x` in the input
        position: usize,
    },
    /// A `(` without a matching `)`, or a `)` without a matching `(`.
    UnbalancedParenthesis,
    /// An operator with too few operands.
    MissingOperand,
    /// An empty formula, or operands left over with no connecting operator.
    IncompleteExpression,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidCharacter {
                character,
                position,
            } => {
                write!(
                    f,
                    "invalid character {:?} at position {}",
                    character, position
                )
            }
            ParseError::InvalidVariable { position } => {
                write!(
                    f,
                    "invalid variable at position {}: expected 'x' followed by exactly one digit 1-9",
                    position
                )
            }
            ParseError::UnbalancedParenthesis => write!(f, "unbalanced parenthesis"),
            ParseError::MissingOperand => write!(f, "operator is missing an operand"),
            ParseError::IncompleteExpression => write!(f, "empty or incomplete formula"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_character_message() {
        let err = ParseError::InvalidCharacter {
            character: '$',
            position: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("'$'"));
        assert!(msg.contains("position 3"));
    }

    #[test]
    fn test_invalid_variable_message() {
        let err = ParseError::InvalidVariable { position: 0 };
        let msg = err.to_string();
        assert!(msg.contains("position 0"));
        assert!(msg.contains("digit"));
    }

    #[test]
    fn test_parse_error_to_io_error() {
        let err = ParseError::UnbalancedParenthesis;
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
        assert!(io_err.to_string().contains("parenthesis"));
    }
}
