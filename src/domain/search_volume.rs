use std::collections::HashMap;

use serde::Deserialize;

use super::{keyword::Keyword, serp::ERROR_SENTINEL};

pub const SEARCH_VOLUME_HEADERS: [&str; 7] = [
    "Search Query",
    "Search Volume",
    "Категория",
    "All Devices",
    "Desktops",
    "Mobile Phones",
    "Tablets",
];

/// One phrase of a `hasSearchVolume` answer. Device flags are `YES`/`NO`.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct SearchVolumeResult {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub all_devices: String,
    #[serde(default)]
    pub desktops: String,
    #[serde(default)]
    pub mobile_phones: String,
    #[serde(default)]
    pub tablets: String,
}

/// One row of the search volume table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchVolumeRow {
    #[serde(rename = "Search Query")]
    pub query: String,
    #[serde(rename = "Search Volume", default)]
    pub volume: Option<f64>,
    #[serde(rename = "Категория", default)]
    pub category: Option<String>,
    #[serde(rename = "All Devices", default)]
    pub all_devices: String,
    #[serde(rename = "Desktops", default)]
    pub desktops: String,
    #[serde(rename = "Mobile Phones", default)]
    pub mobile_phones: String,
    #[serde(rename = "Tablets", default)]
    pub tablets: String,
}

impl SearchVolumeRow {
    pub fn is_error(&self) -> bool {
        self.all_devices == ERROR_SENTINEL
    }

    /// Cell values in `SEARCH_VOLUME_HEADERS` order.
    pub fn fields(&self) -> Vec<String> {
        vec![
            self.query.clone(),
            self.volume.map(|v| v.to_string()).unwrap_or_default(),
            self.category.clone().unwrap_or_default(),
            self.all_devices.clone(),
            self.desktops.clone(),
            self.mobile_phones.clone(),
            self.tablets.clone(),
        ]
    }
}

/// Rows for the phrases the API answered about, carrying the base volume and
/// category of the matching keyword. Phrases the API left out get no row and
/// are asked about again on the next run.
pub fn volume_rows(batch: &[Keyword], results: Vec<SearchVolumeResult>) -> Vec<SearchVolumeRow> {
    let by_query: HashMap<&str, &Keyword> = batch.iter().map(|k| (k.query.trim(), k)).collect();

    results
        .into_iter()
        .map(|r| {
            let keyword = by_query.get(r.keyword.as_str());
            SearchVolumeRow {
                volume: keyword.and_then(|k| k.volume),
                category: keyword.and_then(|k| k.category.clone()),
                query: r.keyword,
                all_devices: r.all_devices,
                desktops: r.desktops,
                mobile_phones: r.mobile_phones,
                tablets: r.tablets,
            }
        })
        .collect()
}

/// Every phrase of a failed batch, with `ERROR` in each device column.
pub fn error_rows(batch: &[Keyword]) -> Vec<SearchVolumeRow> {
    batch
        .iter()
        .map(|k| SearchVolumeRow {
            query: k.query.trim().to_string(),
            volume: k.volume,
            category: k.category.clone(),
            all_devices: ERROR_SENTINEL.to_string(),
            desktops: ERROR_SENTINEL.to_string(),
            mobile_phones: ERROR_SENTINEL.to_string(),
            tablets: ERROR_SENTINEL.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{error_rows, volume_rows, SearchVolumeResult};
    use crate::domain::keyword::Keyword;

    fn batch() -> Vec<Keyword> {
        let mut manicure = Keyword::new("маникюр спб", Some(1520.0));
        manicure.category = Some("услуги".to_string());
        vec![manicure, Keyword::new("педикюр", Some(300.0))]
    }

    #[test]
    fn api_results_carry_keyword_metadata() {
        let results: Vec<SearchVolumeResult> = serde_json::from_str(
            r#"[
                {"Keyword": "маникюр спб", "RegionIds": [2], "AllDevices": "YES",
                 "Desktops": "YES", "MobilePhones": "YES", "Tablets": "NO"},
                {"Keyword": "маникюр спб недорого", "AllDevices": "NO"}
            ]"#,
        )
        .unwrap();

        let rows = volume_rows(&batch(), results);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].volume, Some(1520.0));
        assert_eq!(rows[0].category.as_deref(), Some("услуги"));
        assert_eq!(rows[0].tablets, "NO");
        assert_eq!(rows[1].query, "маникюр спб недорого");
        assert_eq!(rows[1].volume, None);
        assert_eq!(rows[1].desktops, "");
        assert!(!rows[0].is_error());
    }

    #[test]
    fn failed_batch_marks_every_device_column() {
        let rows = error_rows(&batch());

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.is_error() && r.tablets == "ERROR"));
        assert_eq!(rows[1].volume, Some(300.0));
        assert_eq!(
            rows[0].fields(),
            vec!["маникюр спб", "1520", "услуги", "ERROR", "ERROR", "ERROR", "ERROR"]
        );
    }
}
