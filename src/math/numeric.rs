//! Lenient numeric coercion for scraped table cells.

/// Parse a table cell as a finite number.
///
/// Accepts surrounding whitespace, a trailing `%`, and `,` thousands separators.
/// Anything else (blank, text, `NaN`, `inf`) yields `None` and is treated as missing.
pub fn coerce_numeric(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    if trimmed.is_empty() {
        return None;
    }
    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
    let v = cleaned.parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

/// Round to 4 decimal places from the exact decimal value of `x`.
///
/// `0.00035` is stored just below the tie, so it rounds down to `0.0003`.
pub fn round4(x: f64) -> f64 {
    format!("{x:.4}").parse().unwrap_or(x)
}
