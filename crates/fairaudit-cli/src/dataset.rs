//! CSV loading with per-column type inference.
//!
//! Every column is read in full, then typed from its non-missing cells:
//! integers, then floats, then booleans, falling back to text. The typed
//! cells become [`Label`]s ready for the report builder.

use anyhow::{anyhow, bail, Context, Result};
use fairaudit_core::Label;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Cell text treated as a missing value.
const MISSING_TOKENS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null", "NULL", "None"];

/// Inferred type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Int,
    Float,
    Bool,
    Text,
}

impl ColumnKind {
    /// Returns true for integer and float columns.
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKind::Int | ColumnKind::Float)
    }
}

/// One typed CSV column.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub values: Vec<Label>,
}

impl Column {
    fn from_cells(name: String, cells: Vec<String>) -> Self {
        let present: Vec<&str> = cells
            .iter()
            .map(String::as_str)
            .filter(|c| !is_missing(c))
            .collect();

        let kind = if present.is_empty() {
            ColumnKind::Float
        } else if present.iter().all(|c| c.parse::<i64>().is_ok()) {
            ColumnKind::Int
        } else if present.iter().all(|c| c.parse::<f64>().is_ok()) {
            ColumnKind::Float
        } else if present.iter().all(|c| parse_bool(c).is_some()) {
            ColumnKind::Bool
        } else {
            ColumnKind::Text
        };

        let values = cells.iter().map(|cell| parse_cell(cell, kind)).collect();
        Self { name, kind, values }
    }

    /// Numeric view of the column for use as scores.
    ///
    /// Missing cells become NaN, which never passes a threshold.
    pub fn scores(&self) -> Result<Vec<f64>> {
        if !self.kind.is_numeric() {
            bail!(
                "Column '{}' must be numeric to be used as scores (found {:?} values)",
                self.name,
                self.kind
            );
        }
        Ok(self
            .values
            .iter()
            .map(|v| v.as_f64().unwrap_or(f64::NAN))
            .collect())
    }
}

fn is_missing(cell: &str) -> bool {
    MISSING_TOKENS.contains(&cell)
}

pub fn parse_bool(cell: &str) -> Option<bool> {
    if cell.eq_ignore_ascii_case("true") {
        Some(true)
    } else if cell.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_cell(cell: &str, kind: ColumnKind) -> Label {
    if is_missing(cell) {
        return Label::Missing;
    }
    let parsed = match kind {
        ColumnKind::Int => cell.parse::<i64>().ok().map(Label::Int),
        ColumnKind::Float => cell.parse::<f64>().ok().map(Label::from),
        ColumnKind::Bool => parse_bool(cell).map(Label::Bool),
        ColumnKind::Text => None,
    };
    parsed.unwrap_or_else(|| Label::from(cell))
}

/// A CSV file loaded into typed columns.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<Column>,
    rows: usize,
}

impl Dataset {
    /// Loads a CSV file with a header row.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
        let dataset = Self::from_reader(file)
            .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;
        debug!(
            "Loaded {} rows x {} columns from {}",
            dataset.rows,
            dataset.columns.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Loads CSV data with a header row from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()
            .context("Failed to read CSV header")?
            .iter()
            .map(str::to_string)
            .collect();

        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        let mut rows = 0;
        for record in reader.records() {
            let record = record.with_context(|| format!("Malformed CSV record {}", rows + 1))?;
            for (column, cell) in cells.iter_mut().zip(record.iter()) {
                column.push(cell.to_string());
            }
            rows += 1;
        }

        let columns = headers
            .into_iter()
            .zip(cells)
            .map(|(name, cells)| Column::from_cells(name, cells))
            .collect();

        Ok(Self { columns, rows })
    }

    /// Looks up a column by header name.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns.iter().find(|c| c.name == name).ok_or_else(|| {
            let available: Vec<&str> = self.columns.iter().map(|c| c.name.as_str()).collect();
            anyhow!(
                "Column '{}' not found in CSV (available: {})",
                name,
                available.join(", ")
            )
        })
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
label,pred,score,group,flag,ratio
1,1,0.9,A,true,1.5
0,1,0.6,B,False,2
1,0,,A,TRUE,
0,0,0.1,,false,0.25
";

    fn sample() -> Dataset {
        Dataset::from_reader(SAMPLE.as_bytes()).unwrap()
    }

    #[test]
    fn test_infers_column_kinds() {
        let data = sample();
        assert_eq!(data.len(), 4);
        assert_eq!(data.column("label").unwrap().kind, ColumnKind::Int);
        assert_eq!(data.column("score").unwrap().kind, ColumnKind::Float);
        assert_eq!(data.column("group").unwrap().kind, ColumnKind::Text);
        assert_eq!(data.column("flag").unwrap().kind, ColumnKind::Bool);
        assert_eq!(data.column("ratio").unwrap().kind, ColumnKind::Float);
    }

    #[test]
    fn test_missing_cells() {
        let data = sample();
        let group = data.column("group").unwrap();
        assert!(group.values[3].is_missing());
        assert_eq!(group.values[0], Label::from("A"));

        let scores = data.column("score").unwrap().scores().unwrap();
        assert!(scores[2].is_nan());
        assert_eq!(scores[0], 0.9);
    }

    #[test]
    fn test_text_column_is_not_a_score() {
        let data = sample();
        let err = data.column("group").unwrap().scores().unwrap_err();
        assert!(err.to_string().contains("must be numeric"));
    }

    #[test]
    fn test_unknown_column_lists_available() {
        let data = sample();
        let err = data.column("nope").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'nope' not found"));
        assert!(msg.contains("label, pred, score"));
    }

    #[test]
    fn test_all_missing_column_is_float() {
        let data = Dataset::from_reader("a,b\n1,\n2,NA\n".as_bytes()).unwrap();
        let b = data.column("b").unwrap();
        assert_eq!(b.kind, ColumnKind::Float);
        assert!(b.values.iter().all(Label::is_missing));
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let result = Dataset::from_reader("a,b\n1,2\n3\n".as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let data = Dataset::from_path(file.path()).unwrap();
        assert_eq!(data.len(), 4);
        assert_eq!(data.column("group").unwrap().values.len(), 4);
    }

    #[test]
    fn test_from_missing_path_fails() {
        let err = Dataset::from_path(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(err.to_string().contains("Failed to open CSV file"));
    }
}
