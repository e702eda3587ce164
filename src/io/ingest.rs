//! Table cleaning and schema resolution.
//!
//! This module turns the scraped `RawTable` into a `ReturnTable` that is safe to
//! aggregate:
//! - column labels are trimmed
//! - the `Year` column is located (case-insensitive exact match)
//! - rows whose year does not coerce to a number are dropped (averages, notes, blanks)
//! - the table is cut to the most recent N-year window
//!
//! No return arithmetic happens here.

use log::{debug, info, warn};

use crate::domain::{AssetClass, ColumnSchema, RawTable, ReturnTable, YearRow, YearWindow};
use crate::error::AppError;
use crate::math::coerce_numeric;

/// Asset-class → column label, as resolved against a concrete table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub columns: Vec<(AssetClass, String)>,
}

impl ResolvedColumns {
    pub fn get(&self, class: AssetClass) -> Option<&str> {
        self.columns
            .iter()
            .find(|(c, _)| *c == class)
            .map(|(_, name)| name.as_str())
    }
}

/// Normalize labels and keep only rows with a numeric year.
pub fn clean_table(raw: &RawTable) -> Result<ReturnTable, AppError> {
    let columns: Vec<String> = raw.headers.iter().map(|h| normalize_label(h)).collect();

    let year_idx = columns
        .iter()
        .position(|c| c.eq_ignore_ascii_case("year"))
        .ok_or_else(|| AppError::table("Unable to find Year column in returns table."))?;

    let mut rows = Vec::with_capacity(raw.rows.len());
    let mut dropped = 0usize;
    for cells in &raw.rows {
        let year_cell = cells.get(year_idx).map(String::as_str).unwrap_or("");
        match parse_year(year_cell) {
            Some(year) => rows.push(YearRow {
                year,
                cells: cells.clone(),
            }),
            None => {
                debug!("Dropping row with non-numeric year '{year_cell}'");
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        warn!("Dropped {dropped} row(s) without a numeric year");
    }
    if rows.is_empty() {
        return Err(AppError::table("No rows with a numeric Year value in returns table."));
    }

    info!("Kept {} year rows", rows.len());
    Ok(ReturnTable { columns, rows })
}

/// Restrict to the `years` most recent years: `[max_year - years + 1, max_year]`.
pub fn select_window(table: &ReturnTable, years: usize) -> Result<(ReturnTable, YearWindow), AppError> {
    if years == 0 {
        return Err(AppError::config("Window length must be at least one year."));
    }
    let end_year = table
        .max_year()
        .ok_or_else(|| AppError::table("Returns table has no year rows."))?;
    let window = YearWindow::ending_at(end_year, years);
    let windowed = table.restrict_to(window);
    info!(
        "Using {}-{} window ({} rows)",
        window.start_year,
        window.end_year,
        windowed.rows.len()
    );
    Ok((windowed, window))
}

/// Locate every schema field in `table`.
///
/// All missing fields are reported together so one run shows the full extent
/// of a source layout change.
pub fn resolve_columns(table: &ReturnTable, schema: &ColumnSchema) -> Result<ResolvedColumns, AppError> {
    let unmapped: Vec<&str> = AssetClass::ALL
        .iter()
        .filter(|class| !schema.fields.iter().any(|(c, _)| c == *class))
        .map(|class| class.label())
        .collect();
    if !unmapped.is_empty() {
        return Err(AppError::config(format!(
            "Column schema has no entry for: {}",
            unmapped.join(", ")
        )));
    }

    let mut columns = Vec::with_capacity(schema.fields.len());
    let mut missing = Vec::new();

    for (class, needle) in &schema.fields {
        match find_column(&table.columns, needle) {
            Some(name) => {
                debug!("{} -> '{name}'", class.label());
                columns.push((*class, name.to_string()));
            }
            None => missing.push(format!("{needle} ({})", class.label())),
        }
    }

    if !missing.is_empty() {
        return Err(AppError::table(format!(
            "Unable to find column containing: {}",
            missing.join(", ")
        )));
    }

    Ok(ResolvedColumns { columns })
}

/// First column whose label contains `needle`, ignoring case.
pub fn find_column<'a>(columns: &'a [String], needle: &str) -> Option<&'a str> {
    let needle = needle.to_lowercase();
    columns
        .iter()
        .find(|c| c.to_lowercase().contains(&needle))
        .map(String::as_str)
}

fn normalize_label(name: &str) -> String {
    name.trim_start_matches('\u{feff}').trim().to_string()
}

fn parse_year(cell: &str) -> Option<i32> {
    let v = coerce_numeric(cell)?;
    if v.abs() > i32::MAX as f64 {
        return None;
    }
    Some(v.trunc() as i32)
}
