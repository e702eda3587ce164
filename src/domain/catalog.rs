//! Ticker catalog: which historical series stands in for each ETF.
//!
//! The catalog is plain data handed to the report builder, so callers (and tests)
//! can swap in a different ticker list without touching the pipeline.

use std::collections::HashMap;

use crate::domain::AssetClass;

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub ticker: String,
    pub name: String,
    pub proxy: AssetClass,
    pub proxy_note: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssetCatalog {
    pub entries: Vec<CatalogEntry>,
    pub dividend_yields: HashMap<String, f64>,
}

const SP500_NOTE: &str = "Proxy: US stocks (S&P 500 total return).";

impl AssetCatalog {
    /// The nine ETFs published in `assets.json`.
    pub fn standard() -> Self {
        let entries = [
            ("VTI", "US Total Market ETF", AssetClass::LargeCapStock, SP500_NOTE),
            ("VOO", "S&P 500 ETF", AssetClass::LargeCapStock, SP500_NOTE),
            (
                "QQQ",
                "Nasdaq-100 ETF",
                AssetClass::SmallCapStock,
                "Proxy: US small-cap stocks (long-horizon growth equity proxy).",
            ),
            (
                "VXUS",
                "International Stocks ETF",
                AssetClass::LargeCapStock,
                "Proxy: US stocks due consistent 50-year total-return series availability in selected source.",
            ),
            (
                "BND",
                "US Aggregate Bond ETF",
                AssetClass::Bond,
                "Proxy: US Treasury bond return series.",
            ),
            ("SCHD", "Dividend Equity ETF", AssetClass::LargeCapStock, SP500_NOTE),
            (
                "VNQ",
                "US REIT ETF",
                AssetClass::RealEstate,
                "Proxy: Damodaran real-estate return series.",
            ),
            ("GLD", "Gold ETF", AssetClass::Gold, "Proxy: Gold return series."),
            (
                "SLV",
                "Silver ETF",
                AssetClass::Gold,
                "Proxy: Gold return series when using this dataset.",
            ),
        ];

        let dividend_yields = [
            ("VTI", 0.014),
            ("VOO", 0.013),
            ("QQQ", 0.006),
            ("VXUS", 0.029),
            ("BND", 0.037),
            ("SCHD", 0.034),
            ("VNQ", 0.038),
            ("GLD", 0.0),
            ("SLV", 0.0),
        ];

        Self {
            entries: entries
                .into_iter()
                .map(|(ticker, name, proxy, note)| CatalogEntry {
                    ticker: ticker.to_string(),
                    name: name.to_string(),
                    proxy,
                    proxy_note: note.to_string(),
                })
                .collect(),
            dividend_yields: dividend_yields
                .into_iter()
                .map(|(ticker, y)| (ticker.to_string(), y))
                .collect(),
        }
    }

    /// Trailing dividend yield; unlisted tickers yield `0.0`.
    pub fn dividend_yield(&self, ticker: &str) -> f64 {
        self.dividend_yields.get(ticker).copied().unwrap_or(0.0)
    }
}
