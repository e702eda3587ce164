//! Source data access.

pub mod damodaran;

pub use damodaran::{DAMODARAN_URL, ReturnsClient, SCHWAB_URL, load_raw_table, parse_first_table};
