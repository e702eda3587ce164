//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - table shapes (`RawTable`, `ReturnTable`, `YearWindow`)
//! - asset classes and the column schema that locates them (`AssetClass`, `ColumnSchema`)
//! - the ticker catalog (`AssetCatalog`)
//! - output records (`AssetRecord`, `AssetsPayload`)

pub mod catalog;
pub mod types;

pub use catalog::*;
pub use types::*;
