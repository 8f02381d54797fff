use std::fmt::{self, Display};
use std::io::Write;
use std::str::FromStr;

use itertools::Itertools;

use crate::truth_table::{Row, TruthTable, TruthTableEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFormat {
    /// Space separated columns, one line per row
    #[default]
    Text,
    /// Comma separated values with a header record
    Csv,
}

impl TableFormat {
    const fn variants<'a>() -> &'a [Self] {
        &[Self::Text, Self::Csv]
    }

    fn matches(&self, s: &str) -> bool {
        match self {
            Self::Text => matches!(s, "text" | "txt" | "plain"),
            Self::Csv => matches!(s, "csv"),
        }
    }
}

impl Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Text => "text",
            Self::Csv => "csv",
        })
    }
}

impl FromStr for TableFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::variants()
            .iter()
            .find(|variant| variant.matches(s))
            .ok_or_else(|| anyhow::anyhow!("unknown table format {s}"))
            .copied()
    }
}

/// Rows of `table`, optionally restricted to those whose result equals `filter`.
fn selected_rows(
    table: &TruthTable,
    filter: Option<TruthTableEntry>,
) -> impl Iterator<Item = anyhow::Result<Row>> + '_ {
    table
        .rows()
        .map(|row| row.map_err(anyhow::Error::from))
        .filter(move |row| match (row, filter) {
            (Ok(row), Some(entry)) => row.result_entry() == entry,
            _ => true,
        })
}

/// Writes the header line followed by one line per row, e.g. `a b R` and `T F F`.
pub fn write_text<W: Write>(
    table: &TruthTable,
    writer: &mut W,
    filter: Option<TruthTableEntry>,
) -> anyhow::Result<()> {
    writeln!(writer, "{}", table.header().iter().join(" "))?;

    for row in selected_rows(table, filter) {
        writeln!(writer, "{}", row?)?;
    }

    Ok(())
}

pub fn write_csv<W: Write>(
    table: &TruthTable,
    writer: &mut W,
    filter: Option<TruthTableEntry>,
) -> anyhow::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);

    csv_writer.write_record(table.header())?;

    for row in selected_rows(table, filter) {
        let row = row?;
        let record = row
            .entries()
            .chain(std::iter::once(row.result_entry()))
            .map(|entry| entry.to_string());
        csv_writer.write_record(record)?;
    }

    csv_writer.flush()?;

    Ok(())
}

pub fn write_table<W: Write>(
    table: &TruthTable,
    writer: &mut W,
    format: TableFormat,
    filter: Option<TruthTableEntry>,
) -> anyhow::Result<()> {
    match format {
        TableFormat::Text => write_text(table, writer, filter),
        TableFormat::Csv => write_csv(table, writer, filter),
    }
}
