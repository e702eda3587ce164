//! Top-level application orchestration.
//!
//! `src/main.rs` only maps errors to exit codes; this module:
//! - loads `.env` and initializes logging
//! - parses CLI arguments
//! - runs the pipeline
//! - writes `assets.json` and prints the confirmation line

use clap::Parser;
use log::info;

use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `fetch-returns` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = crate::cli::Cli::parse().into_config();
    info!(
        "Starting run: window={}y output={}",
        config.years,
        config.output.display()
    );

    let reference = pipeline::ReferenceData::standard();
    let run = pipeline::run_pipeline(&config, &reference)?;

    crate::io::export::write_assets_json(&config.output, &run.payload)?;
    println!("{}", crate::report::format_confirmation(&config.output, run.window));
    Ok(())
}
