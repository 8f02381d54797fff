#![warn(clippy::disallowed_types)]

pub use evaluator::{Assignment, EvalError};
pub use identifiers::IdentifierSet;
pub use parser::{Operator, ParseError, Postfix, Token};
pub use truth_table::{Row, Rows, TableError, TruthTable, TruthTableEntry};

pub mod evaluator;
pub mod expr;
pub mod expr_io;
pub mod identifiers;
pub mod input;
pub mod parser;
pub mod table_io;
pub mod truth_table;
