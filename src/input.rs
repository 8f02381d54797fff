use anyhow::Context;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads the first line of `reader` without its `\n` or `\r\n` terminator.
///
/// Anything after the first line is ignored; empty input yields an empty formula.
pub fn read_formula<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;

    Ok(line.trim_end_matches(&['\n', '\r'][..]).to_string())
}

pub fn read_formula_file<P: AsRef<Path>>(path: P) -> anyhow::Result<String> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;

    Ok(read_formula(BufReader::new(file))?)
}
