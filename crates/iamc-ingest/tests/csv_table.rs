#![allow(missing_docs)]

use std::io::Write;

use iamc_ingest::{read_csv_from, read_csv_table};

#[test]
fn reads_a_wide_table() {
    let data = "\
model,scenario,region,variable,unit,2010,2020
m1,s1,r1,Energy|Supply,EJ/yr,5,7
m1,s1,r2,Energy|Supply,EJ/yr,3,4
";
    let table = read_csv_from(data.as_bytes()).expect("read");
    assert_eq!(
        table.headers,
        vec!["model", "scenario", "region", "variable", "unit", "2010", "2020"]
    );
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0][3], "Energy|Supply");
    assert_eq!(table.rows[1][6], "4");
}

#[test]
fn trims_cells_and_skips_blank_lines() {
    let data = "\
\u{feff}model, scenario ,2010
m1 , s1 ,5
,,
m2,s2, 6
";
    let table = read_csv_from(data.as_bytes()).expect("read");
    assert_eq!(table.headers, vec!["model", "scenario", "2010"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["m1", "s1", "5"]);
    assert_eq!(table.rows[1], vec!["m2", "s2", "6"]);
}

#[test]
fn pads_short_rows_to_the_header_width() {
    let data = "\
model,scenario,2010,2020
m1,s1,5
";
    let table = read_csv_from(data.as_bytes()).expect("read");
    assert_eq!(table.rows[0], vec!["m1", "s1", "5", ""]);
}

#[test]
fn empty_input_yields_an_empty_table() {
    let table = read_csv_from("".as_bytes()).expect("read");
    assert!(table.headers.is_empty());
    assert!(table.rows.is_empty());
}

#[test]
fn reads_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "model,2010").expect("write");
    writeln!(file, "m1,5").expect("write");
    file.flush().expect("flush");

    let table = read_csv_table(file.path()).expect("read");
    assert_eq!(table.headers, vec!["model", "2010"]);
    assert_eq!(table.rows, vec![vec!["m1".to_string(), "5".to_string()]]);
}

#[test]
fn missing_file_reports_the_path() {
    let err = read_csv_table(std::path::Path::new("/nonexistent/data.csv")).expect_err("missing");
    assert!(err.to_string().contains("/nonexistent/data.csv"));
}
