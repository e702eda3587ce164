//! Numeric utilities: cell coercion, rounding, and compound annual growth.

pub mod cagr;
pub mod numeric;

pub use cagr::*;
pub use numeric::*;
