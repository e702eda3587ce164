//! Write the assets document to disk.
//!
//! The file is replaced wholesale on every run: pretty JSON with 2-space indent
//! and a trailing newline.

use std::path::Path;

use log::info;

use crate::domain::AssetsPayload;
use crate::error::AppError;

/// Render the payload exactly as it is written to disk.
pub fn render_assets_json(payload: &AssetsPayload) -> Result<String, AppError> {
    let mut text = serde_json::to_string_pretty(payload)
        .map_err(|e| AppError::config(format!("Failed to serialize assets JSON: {e}")))?;
    text.push('\n');
    Ok(text)
}

/// Overwrite `path` with the payload, creating the parent directory if needed.
pub fn write_assets_json(path: &Path, payload: &AssetsPayload) -> Result<(), AppError> {
    let text = render_assets_json(payload)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::config(format!("Failed to create output directory '{}': {e}", parent.display()))
        })?;
    }

    std::fs::write(path, text)
        .map_err(|e| AppError::config(format!("Failed to write assets JSON '{}': {e}", path.display())))?;
    info!("Wrote {} assets to {}", payload.assets.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssetRecord, MarketConditionMultipliers};

    fn payload() -> AssetsPayload {
        AssetsPayload {
            source_as_of: "2026-01-05".to_string(),
            methodology: "m".to_string(),
            market_condition_multipliers: MarketConditionMultipliers {
                conservative: 0.61,
                moderate: 1.0,
                aggressive: 1.2732,
            },
            sources: vec!["a".to_string()],
            assets: vec![AssetRecord {
                ticker: "GLD".to_string(),
                name: "Gold ETF".to_string(),
                dividend_yield: 0.0,
                conservative: 0.0,
                moderate: 0.05,
                aggressive: 0.06,
                baseline_50y_avg: 0.05,
                proxy_note: "Proxy: Gold return series.".to_string(),
            }],
        }
    }

    #[test]
    fn rendered_json_is_two_space_indented_with_trailing_newline() {
        let text = render_assets_json(&payload()).unwrap();
        assert!(text.starts_with("{\n  \"source_as_of\": \"2026-01-05\",\n  \"methodology\""));
        assert!(text.contains("\n    \"moderate\": 1.0,"));
        assert!(text.ends_with("}\n"));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn asset_keys_keep_declared_order() {
        let text = render_assets_json(&payload()).unwrap();
        let keys = [
            "\"ticker\"",
            "\"name\"",
            "\"dividend_yield\"",
            "\"conservative\": 0.0",
            "\"moderate\": 0.05",
            "\"aggressive\": 0.06",
            "\"baseline_50y_avg\"",
            "\"proxy_note\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| text.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = std::env::temp_dir().join(format!("asset-returns-export-{}", std::process::id()));
        let path = dir.join("nested").join("assets.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "stale content that is much longer than nothing").unwrap();

        write_assets_json(&path, &payload()).unwrap();
        let back: AssetsPayload = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, payload());

        std::fs::remove_dir_all(&dir).ok();
    }
}
