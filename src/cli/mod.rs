//! Command-line parsing.
//!
//! Every option has a default, so running with no arguments fetches the live
//! table and writes `data/assets.json`.

use std::path::PathBuf;

use clap::Parser;

use crate::data::DAMODARAN_URL;
use crate::domain::{DEFAULT_OUTPUT, DEFAULT_YEARS, RunConfig};

#[derive(Debug, Parser, Clone)]
#[command(
    name = "fetch-returns",
    version,
    about = "Build ETF expected-return scenarios from long-run historical asset-class returns"
)]
pub struct Cli {
    /// Page holding the historical annual returns table.
    #[arg(long, env = "ASSET_RETURNS_SOURCE_URL", default_value = DAMODARAN_URL)]
    pub source_url: String,

    /// Read a saved copy of the page instead of fetching it.
    #[arg(long, value_name = "HTML", env = "ASSET_RETURNS_HTML")]
    pub html: Option<PathBuf>,

    /// Output JSON path (overwritten).
    #[arg(short, long, env = "ASSET_RETURNS_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Length of the trailing window, in years.
    #[arg(long, env = "ASSET_RETURNS_YEARS", default_value_t = DEFAULT_YEARS)]
    pub years: usize,
}

impl Cli {
    pub fn into_config(self) -> RunConfig {
        RunConfig {
            source_url: self.source_url,
            html_path: self.html,
            output: self.output,
            years: self.years,
        }
    }
}
