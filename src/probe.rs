//! Schema probing and optional aggregates.
//!
//! The dashboard never knows a sheet's schema up front: column names are
//! human-authored and vary between programs. These helpers answer "which
//! columns look like X" and "what is the total of Y" with explicit
//! optional results - an aggregate either exists or is not applicable,
//! never a swallowed failure.

use crate::types::{CellValue, Table};
use serde::Serialize;
use std::collections::HashMap;

/// Header names containing `fragment`, case-insensitively, in header order
pub fn find_columns_by_fragment<'a>(table: &'a Table, fragment: &str) -> Vec<&'a str> {
    let needle = fragment.to_lowercase();
    table
        .columns()
        .iter()
        .filter(|c| c.to_lowercase().contains(&needle))
        .map(|c| c.as_str())
        .collect()
}

/// True when the column exists, has at least one non-empty cell, and every
/// non-empty cell is numeric
pub fn is_numeric_column(table: &Table, column: &str) -> bool {
    let Some(cells) = table.column(column) else {
        return false;
    };
    let mut seen = false;
    for cell in cells {
        if cell.is_empty() {
            continue;
        }
        if cell.as_f64().is_none() {
            return false;
        }
        seen = true;
    }
    seen
}

/// Sum of a numeric column; `None` when the column is missing or not numeric
pub fn sum_column(table: &Table, column: &str) -> Option<f64> {
    if !is_numeric_column(table, column) {
        return None;
    }
    Some(
        table
            .column(column)?
            .filter_map(CellValue::as_f64)
            .sum(),
    )
}

/// Mean over a numeric column's non-empty cells
pub fn mean_column(table: &Table, column: &str) -> Option<f64> {
    if !is_numeric_column(table, column) {
        return None;
    }
    let values: Vec<f64> = table.column(column)?.filter_map(CellValue::as_f64).collect();
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Count of distinct non-empty values, compared by display form
pub fn distinct_count(table: &Table, column: &str) -> Option<usize> {
    let cells = table.column(column)?;
    let distinct: std::collections::HashSet<String> = cells
        .filter(|c| !c.is_empty())
        .map(|c| c.to_string())
        .collect();
    Some(distinct.len())
}

/// Occurrence counts of non-empty display values, highest first.
/// Values with equal counts keep first-seen order.
pub fn value_counts(table: &Table, column: &str) -> Option<Vec<(String, usize)>> {
    let cells = table.column(column)?;
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    for cell in cells {
        if cell.is_empty() {
            continue;
        }
        let value = cell.to_string();
        if !counts.contains_key(&value) {
            order.push(value.clone());
        }
        *counts.entry(value).or_insert(0) += 1;
    }
    let mut result: Vec<(String, usize)> = order
        .into_iter()
        .map(|v| {
            let n = counts[&v];
            (v, n)
        })
        .collect();
    result.sort_by(|a, b| b.1.cmp(&a.1));
    Some(result)
}

/// Headline figures for one program's table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramSummary {
    pub records: usize,
    pub numeric_columns: Vec<String>,
    /// Sum over numeric columns whose header mentions beneficiaries or
    /// screenings; `None` when the sheet has no such column
    pub beneficiary_total: Option<f64>,
}

/// Compute the overview-page figures for one program
pub fn program_summary(table: &Table) -> ProgramSummary {
    let numeric_columns: Vec<String> = table
        .columns()
        .iter()
        .filter(|c| is_numeric_column(table, c))
        .cloned()
        .collect();

    // A header can mention both fragments; count each column once
    let mut matched: Vec<&str> = Vec::new();
    for fragment in ["beneficiary", "screened"] {
        for column in find_columns_by_fragment(table, fragment) {
            if !matched.contains(&column) {
                matched.push(column);
            }
        }
    }
    let mut beneficiary_total = None;
    for column in matched {
        if let Some(sum) = sum_column(table, column) {
            *beneficiary_total.get_or_insert(0.0) += sum;
        }
    }

    ProgramSummary {
        records: table.row_count(),
        numeric_columns,
        beneficiary_total,
    }
}
