use crate::identifiers::IdentifierSet;
use crate::parser::{Operator, Postfix, Token};
use itertools::Itertools;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("expression is empty")]
    EmptyExpression,
    #[error("operator at postfix position {position} is missing an operand")]
    StackUnderflow { position: usize },
    #[error("identifier '{0}' has no assigned value")]
    UnknownIdentifier(char),
    #[error("row {index} is out of range for a table of {rows} rows")]
    RowOutOfRange { index: usize, rows: usize },
}

/// Boolean values bound to the identifiers of a formula, indexed by canonical position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    values: Vec<bool>,
}

impl Assignment {
    /// The assignment of row 0: every identifier is true.
    pub fn all_true(len: usize) -> Self {
        Self {
            values: vec![true; len],
        }
    }

    /// The assignment of row `row` in a table over `len` identifiers.
    ///
    /// Identifier `j` is true iff bit `len - 1 - j` of `row` is clear, so the
    /// leftmost identifier changes slowest and the rightmost changes every row.
    /// Bits above the width of `usize` are read as clear.
    pub fn for_row(row: usize, len: usize) -> Self {
        let bit = |shift: usize| {
            u32::try_from(shift)
                .ok()
                .and_then(|shift| row.checked_shr(shift))
                .map_or(0, |shifted| shifted & 1)
        };

        Self {
            values: (0..len).map(|j| bit(len - 1 - j) == 0).collect(),
        }
    }

    /// Moves the assignment of row `row - 1` to that of `row` by toggling.
    ///
    /// Column `j` toggles whenever `row` is a multiple of `2^(len - 1 - j)`.
    pub fn advance(&mut self, row: usize) {
        if row == 0 {
            return;
        }

        let mut period: usize = 1;
        for value in self.values.iter_mut().rev() {
            if row % period == 0 {
                *value = !*value;
            }
            period = period.saturating_mul(2);
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.values.get(index).copied()
    }

    pub fn values(&self) -> &[bool] {
        &self.values
    }
}

impl From<Vec<bool>> for Assignment {
    fn from(values: Vec<bool>) -> Self {
        Self { values }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let markers = self.values.iter().map(|&v| if v { 'T' } else { 'F' });
        write!(f, "{}", markers.format(" "))
    }
}

/// Applies a binary operator; `y` is the left operand and `x` the right one.
pub(crate) const fn apply_binary(op: Operator, y: bool, x: bool) -> bool {
    match op {
        Operator::And => x && y,
        Operator::Or => x || y,
        Operator::Implies => !y || (x && y),
        Operator::Iff => (x && y) || (!x && !y),
        Operator::Not => !x,
    }
}

impl Postfix {
    /// Evaluates the sequence under `assignment` with an explicit value stack.
    ///
    /// When operands are left over on the stack, the most recently pushed one is
    /// the result.
    pub fn eval(
        &self,
        identifiers: &IdentifierSet,
        assignment: &Assignment,
    ) -> Result<bool, EvalError> {
        let mut stack: Vec<bool> = Vec::with_capacity(self.len());

        for (position, token) in self.tokens().iter().enumerate() {
            match *token {
                Token::Var(v) => {
                    let value = identifiers
                        .position(v)
                        .and_then(|index| assignment.get(index))
                        .ok_or(EvalError::UnknownIdentifier(v))?;
                    stack.push(value);
                }
                Token::Op(Operator::Not) => {
                    let top = stack
                        .last_mut()
                        .ok_or(EvalError::StackUnderflow { position })?;
                    *top = !*top;
                }
                Token::Op(op) => {
                    let x = stack.pop().ok_or(EvalError::StackUnderflow { position })?;
                    let y = stack.pop().ok_or(EvalError::StackUnderflow { position })?;
                    stack.push(apply_binary(op, y, x));
                }
            }
        }

        stack.last().copied().ok_or(EvalError::EmptyExpression)
    }

    /// Checks that every operator finds its operands, without evaluating anything.
    ///
    /// The stack shape does not depend on the assignment, so a sequence that passes
    /// this check evaluates without error under every assignment of its identifiers.
    pub fn check_arity(&self) -> Result<(), EvalError> {
        let mut depth: usize = 0;

        for (position, token) in self.tokens().iter().enumerate() {
            match token {
                Token::Var(_) => depth += 1,
                Token::Op(op) => {
                    depth = depth
                        .checked_sub(op.arity())
                        .ok_or(EvalError::StackUnderflow { position })?
                        + 1;
                }
            }
        }

        match depth {
            0 => Err(EvalError::EmptyExpression),
            1 => Ok(()),
            surplus => {
                log::warn!("{} operands left unused in '{self}'", surplus - 1);
                Ok(())
            }
        }
    }
}
