//! Input normalization and tokenization for formula text
//!
//! The normalizer strips insignificant whitespace (space, tab, carriage
//! return), validates the token alphabet and rewrites every `x<digit>`
//! variable reference into a single [`Token::Var`] carrying the digit.

use super::error::ParseError;

/// The eight binary connectives, in source notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinOp {
    /// `&` - conjunction
    And,
    /// `v` - disjunction
    Or,
    /// `+` - sum mod 2
    Xor,
    /// `>` - implication
    Implies,
    /// `<` - converse implication
    ConverseImplies,
    /// `=` - equivalence
    Equivalence,
    /// `|` - Sheffer stroke
    Nand,
    /// `^` - Peirce arrow
    Nor,
}

impl BinOp {
    /// Precedence tier; lower binds tighter. Every tier is left-associative.
    /// Tier 1 belongs to the unary `~`, handled separately by the converter.
    pub(crate) fn precedence(self) -> u8 {
        match self {
            BinOp::And => 2,
            BinOp::Or | BinOp::Xor => 3,
            BinOp::Implies | BinOp::ConverseImplies => 4,
            BinOp::Equivalence => 5,
            BinOp::Nand | BinOp::Nor => 6,
        }
    }

    /// The source character of this connective.
    pub(crate) fn symbol(self) -> char {
        match self {
            BinOp::And => '&',
            BinOp::Or => 'v',
            BinOp::Xor => '+',
            BinOp::Implies => '>',
            BinOp::ConverseImplies => '<',
            BinOp::Equivalence => '=',
            BinOp::Nand => '|',
            BinOp::Nor => '^',
        }
    }

    fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '&' => Some(BinOp::And),
            'v' => Some(BinOp::Or),
            '+' => Some(BinOp::Xor),
            '>' => Some(BinOp::Implies),
            '<' => Some(BinOp::ConverseImplies),
            '=' => Some(BinOp::Equivalence),
            '|' => Some(BinOp::Nand),
            '^' => Some(BinOp::Nor),
            _ => None,
        }
    }
}

/// A token of the normalized formula text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    /// `0` or `1`
    Const(bool),
    /// `x<digit>`, carrying the digit `1..=9`
    Var(u8),
    /// `~`
    Not,
    /// A binary connective
    Bin(BinOp),
    /// `(`
    Open,
    /// `)`
    Close,
}

/// Normalize raw formula text into a token sequence.
///
/// Whitespace (space, tab, carriage return) is dropped anywhere. Any
/// character outside the alphabet, or an `x` not followed by exactly one
/// digit `1..=9`, is a fault. Variable digit `0` is excluded from the
/// grammar.
pub(crate) fn normalize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        match ch {
            ' ' | '\t' | '\r' => continue,
            '0' => tokens.push(Token::Const(false)),
            '1' => tokens.push(Token::Const(true)),
            '(' => tokens.push(Token::Open),
            ')' => tokens.push(Token::Close),
            '~' => tokens.push(Token::Not),
            'x' => {
                let digit = match chars.peek() {
                    Some(&(_, d)) if d.is_ascii_digit() => {
                        chars.next();
                        d
                    }
                    _ => return Err(ParseError::InvalidVariable { position }),
                };
                // a second digit would make the identifier too wide
                if matches!(chars.peek(), Some(&(_, d)) if d.is_ascii_digit()) {
                    return Err(ParseError::InvalidVariable { position });
                }
                if digit == '0' {
                    return Err(ParseError::InvalidVariable { position });
                }
                tokens.push(Token::Var(digit as u8 - b'0'));
            }
            _ => match BinOp::from_symbol(ch) {
                Some(op) => tokens.push(Token::Bin(op)),
                None => {
                    return Err(ParseError::InvalidCharacter {
                        character: ch,
                        position,
                    })
                }
            },
        }
    }

    Ok(tokens)
}

/// Render a token sequence back as compact (whitespace-free) infix text.
///
/// This is the canonical form a [`BooleanExpression`] stores for equality
/// and display.
///
/// [`BooleanExpression`]: super::BooleanExpression
pub(crate) fn render_compact(tokens: &[Token]) -> String {
    let mut text = String::with_capacity(tokens.len() * 2);
    for token in tokens {
        match token {
            Token::Const(false) => text.push('0'),
            Token::Const(true) => text.push('1'),
            Token::Var(id) => {
                text.push('x');
                text.push((b'0' + id) as char);
            }
            Token::Not => text.push('~'),
            Token::Bin(op) => text.push(op.symbol()),
            Token::Open => text.push('('),
            Token::Close => text.push(')'),
        }
    }
    text
}
