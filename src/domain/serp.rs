use serde::{Deserialize, Serialize};
use url::Url;

pub const NO_RESULTS_SENTINEL: &str = "NO_RESULTS";
pub const ERROR_SENTINEL: &str = "ERROR";

/// A single organic result as returned by the search API.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SerpResult {
    pub position: u32,
    pub url: String,
    pub domain: String,
    pub title: String,
    pub snippet: String,
    pub cache_url: String,
}

/// One row of the SERP results table.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SerpRow {
    #[serde(rename = "Search Query")]
    pub query: String,
    #[serde(rename = "Search Volume", default)]
    pub volume: Option<f64>,
    #[serde(rename = "Категория", default)]
    pub category: Option<String>,
    #[serde(rename = "Position", default)]
    pub position: Option<u32>,
    #[serde(rename = "URL", default)]
    pub url: String,
    #[serde(rename = "Domain", default)]
    pub domain: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Snippet", default)]
    pub snippet: String,
    #[serde(rename = "Cache URL", default)]
    pub cache_url: String,
}

/// Columns every step that reads SERP rows relies on.
pub const REQUIRED_SERP_COLUMNS: [&str; 5] = ["Search Query", "Position", "URL", "Domain", "Title"];

pub const SERP_HEADERS: [&str; 9] = [
    "Search Query",
    "Search Volume",
    "Категория",
    "Position",
    "URL",
    "Domain",
    "Title",
    "Snippet",
    "Cache URL",
];

/// Lower-cased host of a result URL, used when the API leaves the domain out.
pub fn domain_from_url(url: &str) -> Option<String> {
    Url::parse(url.trim())
        .ok()
        .and_then(|parsed| parsed.host_str().map(|h| h.to_lowercase()))
        .filter(|h| !h.is_empty())
}

/// Outcome of fetching one keyword, before it is flattened into rows.
#[derive(Debug, Clone, PartialEq)]
pub enum SerpOutcome {
    Results(Vec<SerpResult>),
    NoResults,
    Failed(String),
}

impl SerpRow {
    fn sentinel(query: &str, volume: Option<f64>, category: Option<String>, url: &str) -> Self {
        SerpRow {
            query: query.to_string(),
            volume,
            category,
            position: None,
            url: url.to_string(),
            domain: String::new(),
            title: String::new(),
            snippet: String::new(),
            cache_url: String::new(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.url == NO_RESULTS_SENTINEL || self.url == ERROR_SENTINEL
    }

    /// Cell values in `SERP_HEADERS` order.
    pub fn fields(&self) -> Vec<String> {
        vec![
            self.query.clone(),
            self.volume.map(|v| v.to_string()).unwrap_or_default(),
            self.category.clone().unwrap_or_default(),
            self.position.map(|p| p.to_string()).unwrap_or_default(),
            self.url.clone(),
            self.domain.clone(),
            self.title.clone(),
            self.snippet.clone(),
            self.cache_url.clone(),
        ]
    }

    /// Position when the row takes part in CTR weighting.
    pub fn weighted_position(&self) -> Option<u32> {
        self.position.filter(|p| super::ctr::is_weighted(*p))
    }
}

pub fn make_rows(
    query: &str,
    volume: Option<f64>,
    category: Option<String>,
    outcome: SerpOutcome,
) -> Vec<SerpRow> {
    match outcome {
        SerpOutcome::Results(results) if !results.is_empty() => results
            .into_iter()
            .map(|r| SerpRow {
                query: query.to_string(),
                volume,
                category: category.clone(),
                position: Some(r.position),
                url: r.url,
                domain: r.domain,
                title: r.title,
                snippet: r.snippet,
                cache_url: r.cache_url,
            })
            .collect(),
        SerpOutcome::Results(_) | SerpOutcome::NoResults => {
            vec![SerpRow::sentinel(query, volume, category, NO_RESULTS_SENTINEL)]
        }
        SerpOutcome::Failed(reason) => {
            let mut row = SerpRow::sentinel(query, volume, category, ERROR_SENTINEL);
            row.title = reason;
            vec![row]
        }
    }
}
