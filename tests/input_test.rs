use pretty_assertions::assert_eq;
use rstruth::input::{read_formula, read_formula_file};
use rstruth::TruthTable;
use std::io::BufReader;

fn read(contents: &str) -> String {
    read_formula(BufReader::new(contents.as_bytes())).expect("could not read formula")
}

#[test]
fn test_line_terminators_are_trimmed() {
    assert_eq!(read("a&b\n"), "a&b");
    assert_eq!(read("a&b\r\n"), "a&b");
    assert_eq!(read("a&b"), "a&b");
}

#[test]
fn test_only_first_line_is_used() {
    assert_eq!(read("a&b\nc"), "a&b");
    assert_eq!(read("a|b\r\n#\n"), "a|b");
}

#[test]
fn test_empty_input() {
    assert_eq!(read(""), "");
    assert_eq!(read("\n"), "");
    assert!(TruthTable::new(&read("")).is_err());
}

#[test]
fn test_inner_whitespace_is_kept() {
    assert_eq!(read("  a > b \n"), "  a > b ");
}

#[test]
fn test_read_from_file() {
    assert_eq!(
        read_formula_file("tests/data/left_assoc.txt").expect("could not read formula"),
        "a & b | c"
    );
    assert!(read_formula_file("tests/data/missing.txt").is_err());
}
