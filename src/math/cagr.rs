//! Compound annual growth rate from a series of annual percent returns.
//!
//! ```text
//! CAGR = (Π (1 + r_i))^(1/n) - 1
//! ```
//!
//! The product is order-independent, so only the set of valid returns inside the
//! window matters.

use log::{debug, info, warn};

use crate::domain::{AssetClass, BaselineReturns, ReturnTable};
use crate::error::AppError;
use crate::io::ingest::ResolvedColumns;
use crate::math::coerce_numeric;

/// Coerce percent cells to decimal returns, dropping anything non-numeric.
pub fn annual_returns<'a>(cells: impl IntoIterator<Item = &'a str>) -> Vec<f64> {
    cells
        .into_iter()
        .filter_map(coerce_numeric)
        .map(|pct| pct / 100.0)
        .collect()
}

/// Geometric-mean annualized return. `None` for an empty series.
pub fn cagr(returns: &[f64]) -> Option<f64> {
    if returns.is_empty() {
        return None;
    }
    let growth: f64 = returns.iter().map(|r| 1.0 + r).product();
    Some(growth.powf(1.0 / returns.len() as f64) - 1.0)
}

/// CAGR of one named column of `table`.
pub fn column_cagr(table: &ReturnTable, column: &str) -> Result<f64, AppError> {
    let idx = table
        .column_index(column)
        .ok_or_else(|| AppError::table(format!("Unable to find column: {column}")))?;

    let total = table.rows.len();
    let returns = annual_returns(table.column_cells(idx));
    if returns.len() < total {
        warn!(
            "Column '{column}': ignored {} non-numeric cell(s)",
            total - returns.len()
        );
    }

    let value = cagr(&returns).ok_or_else(|| {
        AppError::source(format!(
            "No valid returns found for CAGR calculation (column '{column}')."
        ))
    })?;
    if !value.is_finite() {
        return Err(AppError::source(format!(
            "CAGR calculation for column '{column}' is not finite (cumulative growth < 0)."
        )));
    }

    debug!("Column '{column}': n={} cagr={value:.6}", returns.len());
    Ok(value)
}

/// CAGR for every asset class, each from its resolved column.
pub fn compute_baselines(table: &ReturnTable, columns: &ResolvedColumns) -> Result<BaselineReturns, AppError> {
    let get = |class: AssetClass| -> Result<f64, AppError> {
        let column = columns
            .get(class)
            .ok_or_else(|| AppError::table(format!("No column resolved for {}.", class.label())))?;
        let value = column_cagr(table, column)?;
        info!("{} CAGR: {value:.4}", class.label());
        Ok(value)
    };

    Ok(BaselineReturns {
        large_cap: get(AssetClass::LargeCapStock)?,
        small_cap: get(AssetClass::SmallCapStock)?,
        bond: get(AssetClass::Bond)?,
        cash: get(AssetClass::Cash)?,
        real_estate: get(AssetClass::RealEstate)?,
        gold: get(AssetClass::Gold)?,
    })
}
