use crate::identifiers::{is_identifier, IdentifierSet};
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Not,
    And,
    Or,
    Implies,
    Iff,
}

impl Operator {
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '-' => Some(Self::Not),
            '&' => Some(Self::And),
            '|' => Some(Self::Or),
            '>' => Some(Self::Implies),
            '=' => Some(Self::Iff),
            _ => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Not => '-',
            Self::And => '&',
            Self::Or => '|',
            Self::Implies => '>',
            Self::Iff => '=',
        }
    }

    /// Number of operands consumed from the evaluation stack.
    pub const fn arity(self) -> usize {
        match self {
            Self::Not => 1,
            Self::And | Self::Or | Self::Implies | Self::Iff => 2,
        }
    }

    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Not)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Var(char),
    Op(Operator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var(v) => write!(f, "{v}"),
            Self::Op(op) => write!(f, "{op}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("illegal character '{character}' at position {position}")]
    IllegalCharacter { character: char, position: usize },
    #[error("mismatched parenthesis at position {position}")]
    MismatchedParenthesis { position: usize },
}

/// Entries of the operator stack used during conversion.
#[derive(Debug, Clone, Copy)]
enum StackEntry {
    Op(Operator),
    // position of the '(' in the formula
    OpenParen(usize),
}

/// A formula in postfix (reverse polish) order.
///
/// All binary operators share a single precedence level and associate to the
/// left, so `a & b | c` reads as `(a & b) | c` and `a | b & c` as `(a | b) & c`.
/// Negation is only flushed from the operator stack by a following binary
/// operator, a closing parenthesis or the end of the formula.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix {
    tokens: Vec<Token>,
}

const fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

impl Postfix {
    /// Converts an infix formula to postfix order using an operator stack.
    pub fn parse(formula: &str) -> Result<Self, ParseError> {
        let mut output: Vec<Token> = Vec::with_capacity(formula.len());
        let mut stack: Vec<StackEntry> = Vec::new();

        for (position, c) in formula.chars().enumerate() {
            log::trace!("token '{c}' at {position}, stack: {stack:?}");

            if is_identifier(c) {
                output.push(Token::Var(c));
            } else if let Some(op) = Operator::from_symbol(c) {
                if !op.is_unary() {
                    while let Some(&StackEntry::Op(top)) = stack.last() {
                        stack.pop();
                        output.push(Token::Op(top));
                    }
                }
                stack.push(StackEntry::Op(op));
            } else if c == '(' {
                stack.push(StackEntry::OpenParen(position));
            } else if c == ')' {
                loop {
                    match stack.pop() {
                        Some(StackEntry::Op(top)) => output.push(Token::Op(top)),
                        Some(StackEntry::OpenParen(_)) => break,
                        None => return Err(ParseError::MismatchedParenthesis { position }),
                    }
                }
            } else if !is_space(c) {
                return Err(ParseError::IllegalCharacter {
                    character: c,
                    position,
                });
            }
        }

        while let Some(entry) = stack.pop() {
            match entry {
                StackEntry::Op(op) => output.push(Token::Op(op)),
                StackEntry::OpenParen(position) => {
                    return Err(ParseError::MismatchedParenthesis { position })
                }
            }
        }

        let result = Self { tokens: output };
        log::debug!("postfix: {result}");

        Ok(result)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The identifiers referenced by this sequence, in canonical order.
    pub fn identifiers(&self) -> IdentifierSet {
        IdentifierSet::from_symbols(self.tokens.iter().filter_map(|t| match t {
            Token::Var(v) => Some(*v),
            Token::Op(_) => None,
        }))
    }
}

impl FromStr for Postfix {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.iter().join(" "))
    }
}
