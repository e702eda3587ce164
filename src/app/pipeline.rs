//! The batch workflow, free of argument parsing and console output:
//!
//! fetch -> clean -> window -> resolve columns -> CAGR -> multipliers -> payload
//!
//! Nothing is written here; `app::run` owns the output file.

use chrono::{Local, NaiveDate};

use crate::data::load_raw_table;
use crate::domain::{AssetCatalog, AssetsPayload, BaselineReturns, ColumnSchema, RawTable, RunConfig, YearWindow};
use crate::error::AppError;
use crate::io::ingest::{clean_table, resolve_columns, select_window};
use crate::math::compute_baselines;
use crate::report::{PayloadContext, build_payload};
use crate::scenario::{AllocationProfiles, derive_multipliers};

/// Static inputs: where to find each series, how to blend, and what to publish.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub schema: ColumnSchema,
    pub profiles: AllocationProfiles,
    pub catalog: AssetCatalog,
}

impl ReferenceData {
    pub fn standard() -> Self {
        Self {
            schema: ColumnSchema::damodaran(),
            profiles: AllocationProfiles::SCHWAB,
            catalog: AssetCatalog::standard(),
        }
    }
}

/// All computed outputs of one run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub window: YearWindow,
    pub baselines: BaselineReturns,
    pub payload: AssetsPayload,
}

/// Fetch the source table and compute the payload, dated today.
pub fn run_pipeline(config: &RunConfig, reference: &ReferenceData) -> Result<RunOutput, AppError> {
    let raw = load_raw_table(config)?;
    run_with_table(config, reference, &raw, Local::now().date_naive())
}

/// Compute the payload from an already-loaded table.
pub fn run_with_table(
    config: &RunConfig,
    reference: &ReferenceData,
    raw: &RawTable,
    as_of: NaiveDate,
) -> Result<RunOutput, AppError> {
    let table = clean_table(raw)?;
    let (windowed, window) = select_window(&table, config.years)?;
    let columns = resolve_columns(&windowed, &reference.schema)?;

    let baselines = compute_baselines(&windowed, &columns)?;
    let multipliers = derive_multipliers(&reference.profiles, &baselines)?;

    let ctx = PayloadContext {
        as_of,
        window,
        source_url: &config.source_url,
        profiles: &reference.profiles,
        catalog: &reference.catalog,
    };
    let payload = build_payload(&ctx, &baselines, &multipliers);

    Ok(RunOutput {
        window,
        baselines,
        payload,
    })
}
