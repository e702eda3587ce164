//! Shared domain types.
//!
//! The pipeline moves through these in order:
//!
//! - `RawTable`: header + string cells exactly as scraped
//! - `ReturnTable`: rows keyed by a numeric year, restricted to a `YearWindow`
//! - `BaselineReturns`: one CAGR per `AssetClass`
//! - `AssetRecord` / `AssetsPayload`: the serialized output document

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::data::damodaran::DAMODARAN_URL;

pub const DEFAULT_OUTPUT: &str = "data/assets.json";
pub const DEFAULT_YEARS: usize = 50;

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source_url: String,
    /// Read a saved copy of the source page instead of fetching it.
    pub html_path: Option<PathBuf>,
    pub output: PathBuf,
    pub years: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            source_url: DAMODARAN_URL.to_string(),
            html_path: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            years: DEFAULT_YEARS,
        }
    }
}

/// First HTML table of the source page, as text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    /// One entry per data row; each row has exactly `headers.len()` cells.
    pub rows: Vec<Vec<String>>,
}

/// A data row whose year cell coerced to a number.
#[derive(Debug, Clone, PartialEq)]
pub struct YearRow {
    pub year: i32,
    pub cells: Vec<String>,
}

/// Inclusive range of years used for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    pub start_year: i32,
    pub end_year: i32,
}

impl YearWindow {
    /// The `years`-long window ending at `end_year`.
    pub fn ending_at(end_year: i32, years: usize) -> Self {
        let span = i32::try_from(years).unwrap_or(i32::MAX).max(1);
        Self {
            start_year: end_year.saturating_sub(span - 1),
            end_year,
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.start_year && year <= self.end_year
    }
}

/// Cleaned return table: trimmed column labels and numeric-year rows only.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnTable {
    pub columns: Vec<String>,
    pub rows: Vec<YearRow>,
}

impl ReturnTable {
    pub fn max_year(&self) -> Option<i32> {
        self.rows.iter().map(|r| r.year).max()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cells of one column, in row order.
    pub fn column_cells(&self, idx: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |r| r.cells.get(idx).map(String::as_str).unwrap_or(""))
    }

    /// Keep only rows inside `window`.
    pub fn restrict_to(&self, window: YearWindow) -> ReturnTable {
        ReturnTable {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .filter(|r| window.contains(r.year))
                .cloned()
                .collect(),
        }
    }
}

/// Historical return series available in the source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetClass {
    LargeCapStock,
    SmallCapStock,
    Bond,
    Cash,
    RealEstate,
    Gold,
}

impl AssetClass {
    pub const ALL: [AssetClass; 6] = [
        AssetClass::LargeCapStock,
        AssetClass::SmallCapStock,
        AssetClass::Bond,
        AssetClass::Cash,
        AssetClass::RealEstate,
        AssetClass::Gold,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AssetClass::LargeCapStock => "large-cap stocks",
            AssetClass::SmallCapStock => "small-cap stocks",
            AssetClass::Bond => "bonds",
            AssetClass::Cash => "cash",
            AssetClass::RealEstate => "real estate",
            AssetClass::Gold => "gold",
        }
    }
}

/// Maps each asset class to the column-label fragment that identifies it.
///
/// Matching is a case-insensitive substring test; the first matching column wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    pub fields: Vec<(AssetClass, String)>,
}

impl ColumnSchema {
    /// Column labels used by the Damodaran historical returns table.
    pub fn damodaran() -> Self {
        let fields = [
            (AssetClass::LargeCapStock, "S&P 500"),
            (AssetClass::SmallCapStock, "Small-cap"),
            (AssetClass::Bond, "US T. Bond"),
            (AssetClass::Cash, "US T. Bill"),
            (AssetClass::RealEstate, "Real Estate"),
            (AssetClass::Gold, "Gold"),
        ];
        Self {
            fields: fields
                .into_iter()
                .map(|(class, needle)| (class, needle.to_string()))
                .collect(),
        }
    }
}

/// Annualized return per asset class over the chosen window (decimal, e.g. `0.10`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineReturns {
    pub large_cap: f64,
    pub small_cap: f64,
    pub bond: f64,
    pub cash: f64,
    pub real_estate: f64,
    pub gold: f64,
}

impl BaselineReturns {
    pub fn get(&self, class: AssetClass) -> f64 {
        match class {
            AssetClass::LargeCapStock => self.large_cap,
            AssetClass::SmallCapStock => self.small_cap,
            AssetClass::Bond => self.bond,
            AssetClass::Cash => self.cash,
            AssetClass::RealEstate => self.real_estate,
            AssetClass::Gold => self.gold,
        }
    }
}

/// One ticker in the output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub ticker: String,
    pub name: String,
    pub dividend_yield: f64,
    pub conservative: f64,
    pub moderate: f64,
    pub aggressive: f64,
    pub baseline_50y_avg: f64,
    pub proxy_note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketConditionMultipliers {
    pub conservative: f64,
    pub moderate: f64,
    pub aggressive: f64,
}

/// The complete `assets.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetsPayload {
    pub source_as_of: String,
    pub methodology: String,
    pub market_condition_multipliers: MarketConditionMultipliers,
    pub sources: Vec<String>,
    pub assets: Vec<AssetRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: i32) -> YearRow {
        YearRow {
            year,
            cells: vec![year.to_string()],
        }
    }

    #[test]
    fn window_spans_requested_years_inclusive() {
        let w = YearWindow::ending_at(2024, 50);
        assert_eq!(w.start_year, 1975);
        assert_eq!(w.end_year, 2024);
        assert!(w.contains(1975));
        assert!(w.contains(2024));
        assert!(!w.contains(1974));
    }

    #[test]
    fn restrict_to_drops_rows_outside_window() {
        let table = ReturnTable {
            columns: vec!["Year".to_string()],
            rows: (1970..=2024).map(row).collect(),
        };
        let w = YearWindow::ending_at(table.max_year().unwrap(), 50);
        let windowed = table.restrict_to(w);
        assert_eq!(windowed.rows.len(), 50);
        assert_eq!(windowed.rows.first().unwrap().year, 1975);
    }

    #[test]
    fn baseline_lookup_covers_every_class() {
        let b = BaselineReturns {
            large_cap: 1.0,
            small_cap: 2.0,
            bond: 3.0,
            cash: 4.0,
            real_estate: 5.0,
            gold: 6.0,
        };
        let values: Vec<f64> = AssetClass::ALL.iter().map(|c| b.get(*c)).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
