//! Output assembly: per-ticker records, the payload document, and console text.

use chrono::NaiveDate;

use crate::data::SCHWAB_URL;
use crate::domain::{AssetCatalog, AssetRecord, AssetsPayload, BaselineReturns, YearWindow};
use crate::math::round4;
use crate::scenario::{AllocationProfiles, Multipliers, scenario_from_profile};

/// One record per catalog entry, in catalog order.
pub fn build_assets(catalog: &AssetCatalog, baselines: &BaselineReturns, multipliers: &Multipliers) -> Vec<AssetRecord> {
    catalog
        .entries
        .iter()
        .map(|entry| {
            let base = baselines.get(entry.proxy);
            let scenario = scenario_from_profile(base, multipliers);
            AssetRecord {
                ticker: entry.ticker.clone(),
                name: entry.name.clone(),
                dividend_yield: catalog.dividend_yield(&entry.ticker),
                conservative: scenario.conservative,
                moderate: scenario.moderate,
                aggressive: scenario.aggressive,
                baseline_50y_avg: round4(base),
                proxy_note: entry.proxy_note.clone(),
            }
        })
        .collect()
}

pub fn methodology(window: YearWindow, profiles: &AllocationProfiles) -> String {
    format!(
        "{}-year annualized historical averages ({}-{}) from Aswath Damodaran historical total returns \
(dividends included). Conservative/Moderate/Aggressive are scaled using Schwab allocation profiles \
(Conservative {}, Moderate {}, Aggressive {} for stocks/bonds/cash).",
        window.end_year - window.start_year + 1,
        window.start_year,
        window.end_year,
        profiles.conservative.label(),
        profiles.moderate.label(),
        profiles.aggressive.label(),
    )
}

/// Everything the payload needs besides the computed numbers.
#[derive(Debug, Clone)]
pub struct PayloadContext<'a> {
    pub as_of: NaiveDate,
    pub window: YearWindow,
    pub source_url: &'a str,
    pub profiles: &'a AllocationProfiles,
    pub catalog: &'a AssetCatalog,
}

pub fn build_payload(ctx: &PayloadContext<'_>, baselines: &BaselineReturns, multipliers: &Multipliers) -> AssetsPayload {
    AssetsPayload {
        source_as_of: ctx.as_of.format("%Y-%m-%d").to_string(),
        methodology: methodology(ctx.window, ctx.profiles),
        market_condition_multipliers: multipliers.published(),
        sources: vec![ctx.source_url.to_string(), SCHWAB_URL.to_string()],
        assets: build_assets(ctx.catalog, baselines, multipliers),
    }
}

/// Confirmation printed after a successful write.
pub fn format_confirmation(path: &std::path::Path, window: YearWindow) -> String {
    format!(
        "Wrote {} using {}-{} return window.",
        path.display(),
        window.start_year,
        window.end_year
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DAMODARAN_URL;

    fn baselines() -> BaselineReturns {
        BaselineReturns {
            large_cap: 0.10,
            small_cap: 0.12,
            bond: 0.04,
            cash: 0.02,
            real_estate: 0.05,
            gold: -0.01,
        }
    }

    fn multipliers() -> Multipliers {
        Multipliers {
            conservative: 0.6,
            aggressive: 1.3,
        }
    }

    #[test]
    fn tickers_sharing_a_proxy_share_values() {
        let assets = build_assets(&AssetCatalog::standard(), &baselines(), &multipliers());
        let vti = assets.iter().find(|a| a.ticker == "VTI").unwrap();
        let schd = assets.iter().find(|a| a.ticker == "SCHD").unwrap();
        assert_eq!(vti.moderate, 0.10);
        assert_eq!(vti.conservative, schd.conservative);
        assert_eq!(vti.aggressive, schd.aggressive);
        assert_eq!(schd.dividend_yield, 0.034);
    }

    #[test]
    fn negative_proxy_keeps_raw_baseline_but_floors_scenarios() {
        let assets = build_assets(&AssetCatalog::standard(), &baselines(), &multipliers());
        let gld = assets.iter().find(|a| a.ticker == "GLD").unwrap();
        assert_eq!(gld.baseline_50y_avg, -0.01);
        assert_eq!(gld.moderate, 0.0);
        assert_eq!(gld.aggressive, 0.0);
    }

    #[test]
    fn methodology_embeds_window_and_weights() {
        let text = methodology(
            YearWindow {
                start_year: 1975,
                end_year: 2024,
            },
            &AllocationProfiles::SCHWAB,
        );
        assert!(text.starts_with("50-year annualized historical averages (1975-2024) from Aswath Damodaran"));
        assert!(text.contains("(Conservative 20/50/30, Moderate 60/35/5, Aggressive 95/0/5 for stocks/bonds/cash)."));
    }

    #[test]
    fn payload_lists_sources_and_fixed_moderate_multiplier() {
        let catalog = AssetCatalog::standard();
        let ctx = PayloadContext {
            as_of: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            window: YearWindow {
                start_year: 1976,
                end_year: 2025,
            },
            source_url: DAMODARAN_URL,
            profiles: &AllocationProfiles::SCHWAB,
            catalog: &catalog,
        };
        let payload = build_payload(&ctx, &baselines(), &multipliers());
        assert_eq!(payload.source_as_of, "2026-01-05");
        assert_eq!(payload.sources, vec![DAMODARAN_URL.to_string(), SCHWAB_URL.to_string()]);
        assert_eq!(payload.market_condition_multipliers.moderate, 1.0);
        assert_eq!(payload.assets.len(), 9);
    }

    #[test]
    fn confirmation_names_path_and_window() {
        let line = format_confirmation(
            std::path::Path::new("data/assets.json"),
            YearWindow {
                start_year: 1975,
                end_year: 2024,
            },
        );
        assert_eq!(line, "Wrote data/assets.json using 1975-2024 return window.");
    }
}
