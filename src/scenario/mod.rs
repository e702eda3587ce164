//! Risk-profile scenarios.
//!
//! Three model portfolios (stock/bond/cash weights) are blended from the baseline
//! CAGRs. The conservative and aggressive blends, taken relative to the moderate
//! blend, give two global multipliers that scale every asset's baseline return.

use log::info;

use crate::domain::{BaselineReturns, MarketConditionMultipliers};
use crate::error::AppError;
use crate::math::round4;

/// Stock/bond/cash allocation weights of one model portfolio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileWeights {
    pub stock: f64,
    pub bond: f64,
    pub cash: f64,
}

impl ProfileWeights {
    /// Expected return of this allocation given baseline CAGRs.
    pub fn blend(&self, baselines: &BaselineReturns) -> f64 {
        self.stock * baselines.large_cap + self.bond * baselines.bond + self.cash * baselines.cash
    }

    /// Whole-percent label, e.g. `60/35/5`.
    pub fn label(&self) -> String {
        format!(
            "{:.0}/{:.0}/{:.0}",
            self.stock * 100.0,
            self.bond * 100.0,
            self.cash * 100.0
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationProfiles {
    pub conservative: ProfileWeights,
    pub moderate: ProfileWeights,
    pub aggressive: ProfileWeights,
}

impl AllocationProfiles {
    /// Schwab MoneyWise asset-allocation profiles.
    pub const SCHWAB: AllocationProfiles = AllocationProfiles {
        conservative: ProfileWeights {
            stock: 0.20,
            bond: 0.50,
            cash: 0.30,
        },
        moderate: ProfileWeights {
            stock: 0.60,
            bond: 0.35,
            cash: 0.05,
        },
        aggressive: ProfileWeights {
            stock: 0.95,
            bond: 0.00,
            cash: 0.05,
        },
    };
}

/// Global scaling applied to every asset's baseline. Moderate is implicitly `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Multipliers {
    pub conservative: f64,
    pub aggressive: f64,
}

impl Multipliers {
    /// Rounded form published in the output document.
    pub fn published(&self) -> MarketConditionMultipliers {
        MarketConditionMultipliers {
            conservative: round4(self.conservative),
            moderate: 1.0,
            aggressive: round4(self.aggressive),
        }
    }
}

/// Derive conservative/aggressive multipliers relative to the moderate blend.
///
/// A non-positive or non-finite moderate blend has no meaningful ratio and is an error.
pub fn derive_multipliers(profiles: &AllocationProfiles, baselines: &BaselineReturns) -> Result<Multipliers, AppError> {
    let conservative = profiles.conservative.blend(baselines);
    let moderate = profiles.moderate.blend(baselines);
    let aggressive = profiles.aggressive.blend(baselines);

    if !(moderate.is_finite() && moderate > 0.0) {
        return Err(AppError::source(format!(
            "Moderate portfolio blend must be positive to derive scenario multipliers (got {moderate})."
        )));
    }

    let multipliers = Multipliers {
        conservative: conservative / moderate,
        aggressive: aggressive / moderate,
    };
    info!(
        "Blends: conservative={conservative:.4} moderate={moderate:.4} aggressive={aggressive:.4}; multipliers {:.4}/{:.4}",
        multipliers.conservative, multipliers.aggressive
    );
    Ok(multipliers)
}

/// Scenario values for one asset (decimal returns, floored at zero, 4 decimals).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub conservative: f64,
    pub moderate: f64,
    pub aggressive: f64,
}

pub fn scenario_from_profile(base_return: f64, multipliers: &Multipliers) -> Scenario {
    Scenario {
        conservative: round4((base_return * multipliers.conservative).max(0.0)),
        moderate: round4(base_return.max(0.0)),
        aggressive: round4((base_return * multipliers.aggressive).max(0.0)),
    }
}
