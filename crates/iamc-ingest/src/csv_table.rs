use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

/// A wide CSV file in memory: one header row plus string cells.
///
/// Cells are trimmed and BOM-stripped; fully blank lines are skipped. Every
/// row is padded or truncated to the header width so downstream code can
/// index by column. What the columns *mean* is the normalizer's concern,
/// not the reader's.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a wide CSV table from a file.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let file = std::fs::File::open(path).with_context(|| format!("open csv: {}", path.display()))?;
    read_csv_from(file).with_context(|| format!("read csv: {}", path.display()))
}

/// Read a wide CSV table from any reader.
pub fn read_csv_from<R: Read>(reader: R) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.context("read record")?;
        let cells: Vec<String> = record.iter().map(normalize_cell).collect();
        if cells.iter().all(String::is_empty) {
            continue;
        }
        match &headers {
            None => {
                headers = Some(record.iter().map(normalize_header).collect());
            }
            Some(headers) => {
                let mut row = Vec::with_capacity(headers.len());
                for index in 0..headers.len() {
                    row.push(cells.get(index).cloned().unwrap_or_default());
                }
                rows.push(row);
            }
        }
    }

    let headers = headers.unwrap_or_default();
    debug!(
        columns = headers.len(),
        rows = rows.len(),
        "read csv table"
    );
    Ok(CsvTable { headers, rows })
}
