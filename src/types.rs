use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;
use std::fmt;

//==============================================================================
// Cell Values
//==============================================================================

/// A single typed spreadsheet cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Text cell
    Text(String),
    /// Integer cell
    Int(i64),
    /// Floating-point cell
    Float(f64),
    /// Boolean cell
    Bool(bool),
    /// Date/datetime cell (converted from the Excel serial representation)
    Date(NaiveDateTime),
    /// Missing / blank cell
    Empty,
}

impl CellValue {
    /// Numeric view of the cell, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Date(dt) => {
                // Pure dates come out of Excel with a midnight time component
                if dt.hour() == 0 && dt.minute() == 0 && dt.second() == 0 {
                    write!(f, "{}", dt.format("%Y-%m-%d"))
                } else {
                    write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S"))
                }
            }
            CellValue::Empty => Ok(()),
        }
    }
}

//==============================================================================
// Tables
//==============================================================================

/// One ingested worksheet: ordered column headers plus row-major data.
///
/// Headers are stored with surrounding whitespace stripped; cell values are
/// kept exactly as read. Header lookup is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Build a table, trimming surrounding whitespace from every header.
    ///
    /// Rows shorter than the header row are padded with empty cells so that
    /// every row has exactly one cell per column.
    pub fn new(name: String, columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let columns: Vec<String> = columns.into_iter().map(|c| c.trim().to_string()).collect();
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.truncate(width);
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self {
            name,
            columns,
            rows,
        }
    }

    /// The sheet name this table was read from
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when the table holds no data rows (a header alone is empty)
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Exact, case-sensitive header lookup
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterate one column's cells top to bottom
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &CellValue>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Table {
        Table::new(
            "Health Camps".to_string(),
            vec!["  District ".to_string(), "Screened".to_string()],
            vec![
                vec![
                    CellValue::Text("Angul".to_string()),
                    CellValue::Int(120),
                ],
                vec![CellValue::Text("Barbil".to_string())],
            ],
        )
    }

    #[test]
    fn headers_are_trimmed_values_are_not() {
        let table = Table::new(
            "t".to_string(),
            vec!["  Age ".to_string()],
            vec![vec![CellValue::Text("  spaced  ".to_string())]],
        );
        assert_eq!(table.columns(), ["Age"]);
        assert_eq!(
            table.rows()[0][0],
            CellValue::Text("  spaced  ".to_string())
        );
    }

    #[test]
    fn short_rows_are_padded() {
        let table = sample();
        assert_eq!(table.rows()[1], vec![
            CellValue::Text("Barbil".to_string()),
            CellValue::Empty,
        ]);
    }

    #[test]
    fn column_lookup_is_case_sensitive() {
        let table = sample();
        assert!(table.column_index("District").is_some());
        assert!(table.column_index("district").is_none());
    }

    #[test]
    fn column_iterates_cells_in_row_order() {
        let table = sample();
        let screened: Vec<&CellValue> = table.column("Screened").unwrap().collect();
        assert_eq!(screened, [&CellValue::Int(120), &CellValue::Empty]);
    }

    #[test]
    fn date_display_drops_midnight_time() {
        let date = CellValue::Date(
            chrono::NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        );
        assert_eq!(date.to_string(), "2024-03-15");
    }
}
