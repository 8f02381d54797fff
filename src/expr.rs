use crate::evaluator::{apply_binary, Assignment, EvalError};
use crate::identifiers::IdentifierSet;
use crate::parser::{Operator, Postfix, Token};
use std::fmt;

/// Expression tree rebuilt from a postfix sequence.
///
/// The tree makes the grouping chosen by the converter explicit: `a & b | c`
/// becomes `((a & b) | c)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Var(char),
    Not(Box<Expr>),
    // (operator, left operand, right operand)
    BinaryOp(Operator, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn from_postfix(postfix: &Postfix) -> Result<Self, EvalError> {
        let mut stack: Vec<Self> = Vec::new();

        for (position, token) in postfix.tokens().iter().enumerate() {
            match *token {
                Token::Var(v) => stack.push(Self::Var(v)),
                Token::Op(Operator::Not) => {
                    let operand = stack
                        .pop()
                        .ok_or(EvalError::StackUnderflow { position })?;
                    stack.push(Self::Not(Box::new(operand)));
                }
                Token::Op(op) => {
                    let right = stack.pop().ok_or(EvalError::StackUnderflow { position })?;
                    let left = stack.pop().ok_or(EvalError::StackUnderflow { position })?;
                    stack.push(Self::BinaryOp(op, Box::new(left), Box::new(right)));
                }
            }
        }

        stack.pop().ok_or(EvalError::EmptyExpression)
    }

    pub fn eval(
        &self,
        identifiers: &IdentifierSet,
        assignment: &Assignment,
    ) -> Result<bool, EvalError> {
        match self {
            Self::Var(v) => identifiers
                .position(*v)
                .and_then(|index| assignment.get(index))
                .ok_or(EvalError::UnknownIdentifier(*v)),
            Self::Not(e) => Ok(!e.eval(identifiers, assignment)?),
            Self::BinaryOp(op, l, r) => {
                let l = l.eval(identifiers, assignment)?;
                let r = r.eval(identifiers, assignment)?;
                Ok(apply_binary(*op, l, r))
            }
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Self::Var(_) => 1,
            Self::Not(e) => 1 + e.size(),
            Self::BinaryOp(_, l, r) => 1 + l.size() + r.size(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var(v) => write!(f, "{v}"),
            Self::Not(e) => write!(f, "-{e}"),
            Self::BinaryOp(op, l, r) => write!(f, "({l} {op} {r})"),
        }
    }
}
