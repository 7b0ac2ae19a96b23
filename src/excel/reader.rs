//! Workbook reader - one open .xlsx file, read sheet by sheet

use crate::error::{BoardError, BoardResult};
use crate::types::{CellValue, Table};
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::{Path, PathBuf};

/// An open Excel workbook
pub struct WorkbookReader {
    path: PathBuf,
    workbook: Xlsx<std::io::BufReader<std::fs::File>>,
}

impl WorkbookReader {
    /// Open a workbook for reading.
    ///
    /// A missing path and an unreadable file are distinct, equally fatal
    /// failures: the caller gets either `SourceNotFound` or `Workbook`.
    pub fn open<P: AsRef<Path>>(path: P) -> BoardResult<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(BoardError::SourceNotFound { path });
        }
        let workbook = open_workbook(&path).map_err(|source| BoardError::Workbook {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, workbook })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sheet names in workbook storage order
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// Parse one sheet: row 1 is the header row, the rest are data rows.
    ///
    /// A sheet with a header but no data rows comes back as an empty table;
    /// the store layer decides what to do with it.
    pub fn read_sheet(&mut self, sheet_name: &str) -> BoardResult<Table> {
        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(|e| self.sheet_error(sheet_name, e.to_string()))?;

        if range.is_empty() {
            return Ok(Table::new(sheet_name.to_string(), Vec::new(), Vec::new()));
        }

        let (height, width) = range.get_size();

        let mut columns = Vec::with_capacity(width);
        for col in 0..width {
            columns.push(header_name(range.get((0, col)), col));
        }

        let mut rows = Vec::with_capacity(height.saturating_sub(1));
        for row in 1..height {
            let mut cells = Vec::with_capacity(width);
            for col in 0..width {
                let data = range.get((row, col)).unwrap_or(&Data::Empty);
                cells.push(self.convert_cell(sheet_name, data)?);
            }
            rows.push(cells);
        }

        Ok(Table::new(sheet_name.to_string(), columns, rows))
    }

    fn convert_cell(&self, sheet_name: &str, data: &Data) -> BoardResult<CellValue> {
        match data {
            Data::Empty => Ok(CellValue::Empty),
            Data::String(s) => Ok(CellValue::Text(s.clone())),
            Data::Int(i) => Ok(CellValue::Int(*i)),
            Data::Float(f) => Ok(CellValue::Float(*f)),
            Data::Bool(b) => Ok(CellValue::Bool(*b)),
            Data::DateTime(dt) => dt.as_datetime().map(CellValue::Date).ok_or_else(|| {
                self.sheet_error(
                    sheet_name,
                    format!("datetime serial {} out of range", dt.as_f64()),
                )
            }),
            // ISO strings only appear in non-xlsx sources; keep the text
            Data::DateTimeIso(s) | Data::DurationIso(s) => Ok(CellValue::Text(s.clone())),
            Data::Error(e) => Err(self.sheet_error(sheet_name, format!("error cell: {}", e))),
        }
    }

    fn sheet_error(&self, sheet_name: &str, detail: String) -> BoardError {
        BoardError::SheetParse {
            path: self.path.clone(),
            sheet: sheet_name.to_string(),
            detail,
        }
    }
}

/// Stringify a header cell; blank headers get a positional name
fn header_name(cell: Option<&Data>, col: usize) -> String {
    match cell {
        Some(Data::String(s)) => s.clone(),
        Some(Data::Empty) | None => format!("col_{}", col),
        Some(other) => other.to_string(),
    }
}
