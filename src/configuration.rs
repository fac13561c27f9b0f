use std::{path::PathBuf, time::Duration};

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

const DEFAULT_CONFIGURATION_FILE: &str = "configuration/base.yaml";

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub files: FileSettings,
    pub serp: SerpSettings,
    pub wordstat: WordstatSettings,
    pub forecast: ForecastSettings,
    pub search_volume: SearchVolumeSettings,
    pub site: SiteSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct FileSettings {
    pub keywords: PathBuf,
    pub serp_results: PathBuf,
    pub domain_audit: PathBuf,
    pub site_structure: PathBuf,
    pub forecast_progress: PathBuf,
    pub search_volume: PathBuf,
    pub expand_seed_cache: PathBuf,
    pub expand_progress: PathBuf,
    pub negative_keywords: PathBuf,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SerpSettings {
    pub api_url: String,
    pub user: String,
    pub key: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub region: u32,
    pub groups_on_page: u8,
    pub workers: usize,
    pub save_every: usize,
    pub max_retries: u32,
    pub timeout_secs: u64,
}

#[derive(Deserialize, Clone, Debug)]
pub struct WordstatSettings {
    pub api_url: String,
    pub user: String,
    pub key: String,
    pub seed: String,
    pub workers: usize,
    pub save_every: usize,
    pub max_retries: u32,
    pub timeout_secs: u64,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ForecastSettings {
    pub api_url: String,
    pub token: String,
    pub region_ids: Vec<u32>,
    pub currency: String,
    pub batch_size: usize,
    pub poll_interval_secs: u64,
    pub max_poll_attempts: u32,
    pub max_retries: u32,
    pub timeout_secs: u64,
}

/// Direct v5 `keywordsresearch` service.
#[derive(Deserialize, Clone, Debug)]
pub struct SearchVolumeSettings {
    pub api_url: String,
    pub token: String,
    pub region_ids: Vec<u32>,
    pub batch_size: usize,
    pub requests_per_minute: u32,
    pub max_retries: u32,
    pub timeout_secs: u64,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SiteSettings {
    pub brand: String,
    pub city: String,
    pub city_full: String,
    pub address_short: String,
    pub district: String,
    pub min_commercialization: f64,
}

impl SerpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl WordstatSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ForecastSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

impl SearchVolumeSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Pause between requests that keeps within `requests_per_minute`.
    pub fn request_interval(&self) -> Duration {
        Duration::from_secs(60) / self.requests_per_minute.max(1)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    get_configuration_from(None)
}

pub fn get_configuration_from(path: Option<PathBuf>) -> Result<Settings, config::ConfigError> {
    let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIGURATION_FILE));

    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .build()?;

    settings.try_deserialize::<Settings>()
}
