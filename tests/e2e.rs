use pretty_assertions::assert_eq;
use rstruth::table_io::write_text;
use rstruth::TruthTable;
use std::fs;
use std::path::Path;

fn read_formula<P: AsRef<Path>>(file: P) -> String {
    let contents = fs::read_to_string(file).expect("could not read formula file");
    contents.lines().next().unwrap_or_default().to_string()
}

fn file_assert_table<P: AsRef<Path>>(formula_file: P, table_file: P) {
    let formula = read_formula(formula_file);
    let expected = fs::read_to_string(table_file).expect("could not read table file");

    let table = TruthTable::new(&formula).expect("could not build truth table");

    let mut output: Vec<u8> = Vec::new();
    write_text(&table, &mut output, None).expect("could not write table");

    assert_eq!(String::from_utf8(output).expect("output is not utf-8"), expected);
}

#[test]
fn test_files_table() {
    let mut checked = 0;

    for file in glob::glob("tests/data/*.txt").expect("invalid glob pattern") {
        let f = file.expect("unreadable path");

        if f.to_string_lossy().ends_with("_fails.txt") {
            continue;
        }

        println!("testing {}", f.display());
        file_assert_table(f.clone(), f.with_extension("table"));
        checked += 1;
    }

    assert!(checked >= 5);
}

#[test]
fn test_files_fail() {
    let mut checked = 0;

    for file in glob::glob("tests/data/*_fails.txt").expect("invalid glob pattern") {
        let f = file.expect("unreadable path");
        println!("testing {}", f.display());

        let formula = read_formula(&f);
        let expected = fs::read_to_string(f.with_extension("error"))
            .expect("could not read expected error file");

        match TruthTable::new(&formula) {
            Ok(_) => panic!("{} should not produce a table", f.display()),
            Err(e) => assert_eq!(e.to_string(), expected.trim_end()),
        }
        checked += 1;
    }

    assert!(checked >= 4);
}
