//! Parsing threshold tables from tabular text or JSON.
//!
//! Each row is `cutoff_percentage, label, acronym[, ...]`. Commas,
//! semicolons and tabs all work as separators. Blank lines and lines
//! starting with `#` are ignored. Rows that do not parse are skipped rather
//! than failing the whole load; only a table with no usable row is an error.
//!
//! ```text
//! # cutoff, label, acronym
//! 10, Critical Success, S4
//! 50, Full Success, S3
//! 999, Critical Failure, F4
//! ```

use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use super::{SENTINEL_PERCENT, ThresholdEntry, ThresholdTable};
use crate::error::{AleaError, AleaResult};

/// Why a single row was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RowSkip {
    TooFewFields,
    BadCutoff,
    Negative,
    MissingText,
}

/// A row that parsed.
struct ParsedRow {
    entry: ThresholdEntry,
    terminal: bool,
}

impl ThresholdTable {
    /// Load a table from a file.
    ///
    /// Files ending in `.json` are read as an array of row arrays; anything
    /// else is read as delimited text.
    pub fn from_path(path: &Path) -> AleaResult<Self> {
        if !path.exists() {
            return Err(AleaError::TableNotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let table = if is_json {
            Self::from_json(&text)?
        } else {
            Self::parse(&text)?
        };
        debug!(path = %path.display(), levels = table.len(), "loaded threshold table");
        Ok(table)
    }

    /// Parse a table from delimited text.
    pub fn parse(text: &str) -> AleaResult<Self> {
        if text.trim().is_empty() {
            return Err(AleaError::EmptyTable);
        }
        let rows = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
            .map(|(n, line)| (n, split_row(line)));
        collect_rows(rows)
    }

    /// Parse a table from a JSON array of rows, e.g. `[[10, "Critical Success", "S4"]]`.
    pub fn from_json(text: &str) -> AleaResult<Self> {
        if text.trim().is_empty() {
            return Err(AleaError::EmptyTable);
        }
        let rows: Vec<Vec<Value>> = serde_json::from_str(text)?;
        let rows = rows.into_iter().enumerate().map(|(i, row)| {
            let fields = row
                .into_iter()
                .map(|v| match v {
                    Value::String(s) => s,
                    Value::Number(n) => n.to_string(),
                    _ => String::new(),
                })
                .collect();
            (i + 1, fields)
        });
        collect_rows(rows)
    }
}

/// Split a row on the first separator it contains.
fn split_row(line: &str) -> Vec<String> {
    let sep = ['\t', ';', ','].into_iter().find(|c| line.contains(*c));
    match sep {
        Some(sep) => line.split(sep).map(str::to_string).collect(),
        None => vec![line.to_string()],
    }
}

fn collect_rows(rows: impl Iterator<Item = (usize, Vec<String>)>) -> AleaResult<ThresholdTable> {
    let mut entries = Vec::new();
    for (line, fields) in rows {
        match parse_row(&fields) {
            Ok(row) => {
                entries.push(row.entry);
                if row.terminal {
                    debug!(line, "sentinel row reached, ignoring the rest");
                    break;
                }
            }
            Err(reason) => debug!(line, ?reason, "skipping threshold row"),
        }
    }
    if entries.is_empty() {
        return Err(AleaError::NoValidRows);
    }
    ThresholdTable::new(entries)
}

fn parse_row(fields: &[String]) -> Result<ParsedRow, RowSkip> {
    let [cutoff, label, acronym, ..] = fields else {
        return Err(RowSkip::TooFewFields);
    };
    let percent = parse_cutoff(cutoff.trim())?;
    let label = label.trim();
    let acronym = acronym.trim();
    if label.is_empty() || acronym.is_empty() {
        return Err(RowSkip::MissingText);
    }
    let clamped = if percent > i64::from(SENTINEL_PERCENT) {
        warn!(percent, max = SENTINEL_PERCENT, "cutoff clamped to sentinel");
        SENTINEL_PERCENT
    } else {
        percent as u32
    };
    Ok(ParsedRow {
        entry: ThresholdEntry::from_percent(clamped, label, acronym),
        terminal: clamped == SENTINEL_PERCENT,
    })
}

/// Accepts integers and integer-valued floats ("50", "50.0", "1e3").
fn parse_cutoff(field: &str) -> Result<i64, RowSkip> {
    let value = match field.parse::<i64>() {
        Ok(n) => n,
        Err(_) => {
            let f = field.parse::<f64>().map_err(|_| RowSkip::BadCutoff)?;
            if !f.is_finite() || f.fract() != 0.0 {
                return Err(RowSkip::BadCutoff);
            }
            // Saturating cast; anything this large is clamped anyway.
            f as i64
        }
    };
    if value < 0 {
        return Err(RowSkip::Negative);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn acronyms(table: &ThresholdTable) -> Vec<&str> {
        table.entries().iter().map(|e| e.acronym.as_str()).collect()
    }

    #[test]
    fn parse_basic() {
        let table = ThresholdTable::parse("10,Great,G\n100,Fine,F\n999,Bad,B\n").unwrap();
        assert_eq!(acronyms(&table), vec!["G", "F", "B"]);
        assert!((table.first().cutoff_ratio - 0.10).abs() < f64::EPSILON);
        assert!((table.sentinel().cutoff_ratio - 9.99).abs() < 1e-9);
    }

    #[test]
    fn fields_are_trimmed() {
        let table = ThresholdTable::parse("  50 ;  Full Success ; S3  ;extra").unwrap();
        assert_eq!(table.first().label, "Full Success");
        assert_eq!(table.first().acronym, "S3");
    }

    #[test]
    fn tabs_and_comments() {
        let text = "# cutoff\tlabel\tacronym\n\n10\tGreat\tG\n100\tFine\tF\n";
        let table = ThresholdTable::parse(text).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn header_row_skipped() {
        let table = ThresholdTable::parse("cutoff,label,acronym\n50,Fine,F\n").unwrap();
        assert_eq!(acronyms(&table), vec!["F"]);
    }

    #[test]
    fn float_cutoffs() {
        let table = ThresholdTable::parse("50.0,Fine,F\n75.5,Odd,O\n100,Bad,B").unwrap();
        assert_eq!(acronyms(&table), vec!["F", "B"]);
    }

    #[test]
    fn negative_rows_skipped() {
        let table = ThresholdTable::parse("-10,Nope,N\n50,Fine,F").unwrap();
        assert_eq!(acronyms(&table), vec!["F"]);
    }

    #[test]
    fn short_rows_skipped() {
        let table = ThresholdTable::parse("10,Great\n50,Fine,F\n90,,X").unwrap();
        assert_eq!(acronyms(&table), vec!["F"]);
    }

    #[test]
    fn clamps_and_stops_at_sentinel() {
        let table = ThresholdTable::parse("10,Great,G\n5000,Bad,B\n20,Late,L\n").unwrap();
        assert_eq!(acronyms(&table), vec!["G", "B"]);
        assert_eq!(table.sentinel().percent(), SENTINEL_PERCENT);
    }

    #[test]
    fn exact_sentinel_stops() {
        let table = ThresholdTable::parse("999,Bad,B\n10,Great,G\n").unwrap();
        assert_eq!(acronyms(&table), vec!["B"]);
    }

    #[test]
    fn unordered_rows_sorted() {
        let table = ThresholdTable::parse("100,Fine,F\n10,Great,G\n").unwrap();
        assert_eq!(acronyms(&table), vec!["G", "F"]);
    }

    #[test]
    fn empty_source() {
        assert!(matches!(
            ThresholdTable::parse("  \n"),
            Err(AleaError::EmptyTable)
        ));
    }

    #[test]
    fn no_valid_rows() {
        assert!(matches!(
            ThresholdTable::parse("a,b,c\n-1,x,y\n"),
            Err(AleaError::NoValidRows)
        ));
    }

    #[test]
    fn json_rows() {
        let text = r#"[[10, "Great", "G"], [-5, "Nope", "N"], ["100", "Fine", "F"], [999, "Bad", "B"]]"#;
        let table = ThresholdTable::from_json(text).unwrap();
        assert_eq!(acronyms(&table), vec!["G", "F", "B"]);
    }

    #[test]
    fn json_malformed() {
        assert!(matches!(
            ThresholdTable::from_json("{not json"),
            Err(AleaError::TableJson(_))
        ));
    }

    #[test]
    fn from_path_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.csv");
        assert!(matches!(
            ThresholdTable::from_path(&path),
            Err(AleaError::TableNotFound(_))
        ));
    }

    #[test]
    fn from_path_csv_and_json() {
        let dir = TempDir::new().unwrap();
        let csv = dir.path().join("table.csv");
        fs::write(&csv, "10,Great,G\n999,Bad,B\n").unwrap();
        assert_eq!(ThresholdTable::from_path(&csv).unwrap().len(), 2);

        let json = dir.path().join("table.JSON");
        fs::write(&json, r#"[[10, "Great", "G"]]"#).unwrap();
        assert_eq!(ThresholdTable::from_path(&json).unwrap().len(), 1);
    }

    #[test]
    fn split_row_prefers_first_separator() {
        assert_eq!(split_row("1\ta,b\tc"), vec!["1", "a,b", "c"]);
        assert_eq!(split_row("solo"), vec!["solo"]);
    }
}
