use crate::evaluator::{Assignment, EvalError};
use crate::identifiers::IdentifierSet;
use crate::parser::{ParseError, Postfix};
use std::{
    fmt::{self, Display},
    str::FromStr,
};
use thiserror::Error;

/// Column label of the formula's result.
pub const RESULT_LABEL: &str = "R";

/// Identifier ceiling used when the caller does not provide one.
pub const DEFAULT_MAX_IDENTIFIERS: usize = 24;

// row indices must fit in a usize
const MAX_SUPPORTED_IDENTIFIERS: usize = usize::BITS as usize - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Single cell of a truth table, printed as `T` or `F`.
pub enum TruthTableEntry {
    True,
    False,
}

impl TruthTableEntry {
    const fn variants<'a>() -> &'a [Self] {
        &[Self::True, Self::False]
    }

    fn matches(&self, s: &str) -> bool {
        match self {
            Self::True => matches!(s, "true" | "True" | "t" | "T" | "1"),
            Self::False => matches!(s, "false" | "False" | "f" | "F" | "0"),
        }
    }

}

impl From<bool> for TruthTableEntry {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

impl Display for TruthTableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::True => "T",
            Self::False => "F",
        })
    }
}

impl FromStr for TruthTableEntry {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::variants()
            .iter()
            .find(|variant| variant.matches(s))
            .ok_or_else(|| anyhow::anyhow!("cannot parse {s} as truth-table entry"))
            .copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("formula has {found} distinct identifiers, the limit is {limit}")]
    TooManyIdentifiers { found: usize, limit: usize },
}

/// One row of a truth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub index: usize,
    pub assignment: Assignment,
    pub result: bool,
}

impl Row {
    pub fn entries(&self) -> impl Iterator<Item = TruthTableEntry> + '_ {
        self.assignment.values().iter().map(|&v| TruthTableEntry::from(v))
    }

    pub fn result_entry(&self) -> TruthTableEntry {
        TruthTableEntry::from(self.result)
    }
}

impl Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.assignment.is_empty() {
            write!(f, "{}", self.result_entry())
        } else {
            write!(f, "{} {}", self.assignment, self.result_entry())
        }
    }
}

/// A converted formula together with its identifiers.
///
/// Construction performs every check that can fail, so once a table exists all of
/// its rows can be produced.
#[derive(Debug, Clone)]
pub struct TruthTable {
    identifiers: IdentifierSet,
    postfix: Postfix,
}

impl TruthTable {
    pub fn new(formula: &str) -> Result<Self, TableError> {
        Self::with_limit(formula, DEFAULT_MAX_IDENTIFIERS)
    }

    pub fn with_limit(formula: &str, limit: usize) -> Result<Self, TableError> {
        let identifiers = IdentifierSet::collect(formula);
        let postfix = Postfix::parse(formula)?;

        let limit = limit.min(MAX_SUPPORTED_IDENTIFIERS);
        if identifiers.len() > limit {
            return Err(TableError::TooManyIdentifiers {
                found: identifiers.len(),
                limit,
            });
        }

        postfix.check_arity()?;

        Ok(Self {
            identifiers,
            postfix,
        })
    }

    pub fn identifiers(&self) -> &IdentifierSet {
        &self.identifiers
    }

    pub fn postfix(&self) -> &Postfix {
        &self.postfix
    }

    pub fn num_rows(&self) -> usize {
        1 << self.identifiers.len()
    }

    /// Column labels: the identifiers followed by the result label.
    pub fn header(&self) -> Vec<String> {
        self.identifiers
            .iter()
            .map(String::from)
            .chain(std::iter::once(RESULT_LABEL.to_string()))
            .collect()
    }

    pub fn eval(&self, assignment: &Assignment) -> Result<bool, EvalError> {
        self.postfix.eval(&self.identifiers, assignment)
    }

    /// Computes row `index` directly from the bits of the index.
    pub fn row(&self, index: usize) -> Result<Row, EvalError> {
        if index >= self.num_rows() {
            return Err(EvalError::RowOutOfRange {
                index,
                rows: self.num_rows(),
            });
        }

        let assignment = Assignment::for_row(index, self.identifiers.len());
        let result = self.eval(&assignment)?;

        Ok(Row {
            index,
            assignment,
            result,
        })
    }

    pub fn rows(&self) -> Rows<'_> {
        log::info!("enumerating {} rows", self.num_rows());

        Rows {
            table: self,
            next: 0,
            assignment: Assignment::all_true(self.identifiers.len()),
        }
    }

    pub fn count_models(&self) -> Result<usize, EvalError> {
        self.rows()
            .try_fold(0, |count, row| -> Result<usize, EvalError> {
                Ok(count + usize::from(row?.result))
            })
    }

    pub fn is_tautology(&self) -> Result<bool, EvalError> {
        Ok(self.count_models()? == self.num_rows())
    }

    pub fn is_contradiction(&self) -> Result<bool, EvalError> {
        Ok(self.count_models()? == 0)
    }
}

/// Iterator over the rows of a [`TruthTable`] in table order.
///
/// The live assignment is toggled in place from one row to the next.
pub struct Rows<'a> {
    table: &'a TruthTable,
    next: usize,
    assignment: Assignment,
}

impl Iterator for Rows<'_> {
    type Item = Result<Row, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.table.num_rows() {
            return None;
        }

        let index = self.next;
        self.next += 1;
        self.assignment.advance(index);

        Some(self.table.eval(&self.assignment).map(|result| Row {
            index,
            assignment: self.assignment.clone(),
            result,
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.table.num_rows() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}
