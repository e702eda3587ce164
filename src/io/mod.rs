//! Input/output helpers.
//!
//! - table cleaning + schema resolution (`ingest`)
//! - assets JSON export (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
