//! Historical returns page (Aswath Damodaran, NYU Stern).
//!
//! The page publishes one HTML table of annual total returns by asset class.
//! We only need the first `<table>`; everything else on the page is ignored.

use std::path::Path;

use log::{debug, info};
use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};

use crate::domain::{RawTable, RunConfig};
use crate::error::AppError;

pub const DAMODARAN_URL: &str = "https://pages.stern.nyu.edu/~adamodar/New_Home_Page/datafile/histretSP.html";
pub const SCHWAB_URL: &str = "https://www.schwabmoneywise.com/investment-planning/what-is-asset-allocation";

const USER_AGENT: &str = concat!("asset-returns/", env!("CARGO_PKG_VERSION"));

pub struct ReturnsClient {
    client: Client,
}

impl ReturnsClient {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::source(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// GET the page body. Any transport error or non-success status is fatal.
    pub fn fetch_page(&self, url: &str) -> Result<String, AppError> {
        info!("Fetching historical returns table from {url}");
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| AppError::source(format!("Request to {url} failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::source(format!(
                "Returns page request failed with status {}.",
                resp.status()
            )));
        }

        resp.text()
            .map_err(|e| AppError::source(format!("Failed to read returns page body: {e}")))
    }
}

/// Load the source page per `config` (saved file if given, else HTTP) and extract its first table.
pub fn load_raw_table(config: &RunConfig) -> Result<RawTable, AppError> {
    let html = match &config.html_path {
        Some(path) => read_saved_page(path)?,
        None => ReturnsClient::new()?.fetch_page(&config.source_url)?,
    };
    parse_first_table(&html)
}

fn read_saved_page(path: &Path) -> Result<String, AppError> {
    info!("Reading historical returns table from {}", path.display());
    std::fs::read_to_string(path)
        .map_err(|e| AppError::config(format!("Failed to read HTML file '{}': {e}", path.display())))
}

/// Parse the first `<table>` of an HTML document.
///
/// The first row with any `th`/`td` cells is the header. Data rows are padded
/// with empty cells (or truncated) to the header width.
pub fn parse_first_table(html: &str) -> Result<RawTable, AppError> {
    let document = Html::parse_document(html);
    let table_sel = selector("table")?;
    let row_sel = selector("tr")?;
    let cell_sel = selector("th, td")?;

    let table = document
        .select(&table_sel)
        .next()
        .ok_or_else(|| AppError::table("No HTML table found in returns page."))?;

    let mut rows = table
        .select(&row_sel)
        .map(|tr| tr.select(&cell_sel).map(cell_text).collect::<Vec<_>>())
        .filter(|cells| !cells.is_empty());

    let headers = rows
        .next()
        .ok_or_else(|| AppError::table("Returns table has no rows."))?;

    let width = headers.len();
    let rows: Vec<Vec<String>> = rows
        .map(|mut cells| {
            cells.resize(width, String::new());
            cells
        })
        .collect();

    debug!("Parsed table: {} columns, {} data rows", width, rows.len());
    Ok(RawTable { headers, rows })
}

fn selector(css: &str) -> Result<Selector, AppError> {
    Selector::parse(css).map_err(|e| AppError::source(format!("Invalid selector '{css}': {e:?}")))
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
