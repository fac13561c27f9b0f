use std::time::Duration;

use reqwest::{header::ACCEPT_LANGUAGE, Client, Response, StatusCode};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use serde_json::json;

use crate::{
    configuration::SearchVolumeSettings,
    domain::search_volume::SearchVolumeResult,
    errors::ApiError,
    services::retry::{retry, RetryPolicy},
};

/// Hard cap on phrases in one `hasSearchVolume` call.
pub const MAX_PHRASES_PER_REQUEST: usize = 10_000;

const LOCALE: &str = "ru";
const UNITS_HEADER: &str = "Units";
const LOW_UNITS: u64 = 100;
const LOW_UNITS_PAUSE: Duration = Duration::from_secs(60);
const RETRY_BASE_DELAY: Duration = Duration::from_secs(1);
const FIELD_NAMES: [&str; 6] = [
    "Keyword",
    "RegionIds",
    "AllDevices",
    "MobilePhones",
    "Tablets",
    "Desktops",
];

#[derive(Deserialize)]
struct V5Error {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    error_code: i64,
    #[serde(default)]
    error_string: String,
    #[serde(default)]
    error_detail: String,
}

#[derive(Deserialize)]
struct V5Result {
    #[serde(rename = "HasSearchVolumeResults", default)]
    results: Vec<SearchVolumeResult>,
}

#[derive(Deserialize)]
struct V5Response {
    result: Option<V5Result>,
    error: Option<V5Error>,
}

/// Maps a Direct v5 error code onto the retry taxonomy.
pub fn classify_v5_error(code: i64, message: String) -> ApiError {
    match code {
        52 => ApiError::RateLimited {
            reason: format!("not enough units: {}", message),
            cool_down: Duration::from_secs(60),
        },
        53 => ApiError::RateLimited {
            reason: format!("concurrent request limit: {}", message),
            cool_down: Duration::from_secs(5),
        },
        506 => ApiError::Rejected {
            code,
            message: format!("too many phrases in one request: {}", message),
        },
        c if c >= 1000 => ApiError::Unauthorized { code, message },
        _ => ApiError::Rejected { code, message },
    }
}

/// Points spent by a call and what is left of the daily limit, as reported
/// in the `Units` header (`spent/remaining/limit`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Units {
    pub spent: u64,
    pub remaining: u64,
    pub daily_limit: u64,
}

impl Units {
    pub fn parse(header: &str) -> Option<Units> {
        let mut parts = header.trim().split('/').map(|p| p.trim().parse::<u64>());
        let units = Units {
            spent: parts.next()?.ok()?,
            remaining: parts.next()?.ok()?,
            daily_limit: parts.next()?.ok()?,
        };
        parts.next().is_none().then_some(units)
    }
}

fn unpack(status: StatusCode, response: V5Response) -> Result<Vec<SearchVolumeResult>, ApiError> {
    if let Some(error) = response.error {
        let message = match error.error_detail.is_empty() {
            true => error.error_string,
            false => error.error_detail,
        };
        return Err(classify_v5_error(error.error_code, message));
    }
    if !status.is_success() {
        return Err(ApiError::Rejected {
            code: i64::from(status.as_u16()),
            message: "request failed without an error body".to_string(),
        });
    }

    response
        .result
        .map(|r| r.results)
        .ok_or_else(|| ApiError::Malformed("response has neither result nor error".to_string()))
}

/// Client for the Yandex Direct v5 `keywordsresearch` service.
pub struct SearchVolumeClient {
    client: Client,
    settings: SearchVolumeSettings,
    retry_policy: RetryPolicy,
}

impl SearchVolumeClient {
    pub fn new(settings: SearchVolumeSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(settings.timeout()).build()?;
        let retry_policy = RetryPolicy::exponential(settings.max_retries, RETRY_BASE_DELAY);

        Ok(SearchVolumeClient {
            client,
            settings,
            retry_policy,
        })
    }

    async fn watch_units(response: &Response) {
        let Some(units) = response
            .headers()
            .get(UNITS_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(Units::parse)
        else {
            return;
        };

        log::info!(
            "Units: -{}, {}/{} left",
            units.spent,
            units.remaining,
            units.daily_limit
        );
        if units.remaining < LOW_UNITS {
            log::warn!("Running low on units, pausing for {:?}", LOW_UNITS_PAUSE);
            tokio::time::sleep(LOW_UNITS_PAUSE).await;
        }
    }

    async fn check_once(&self, phrases: &[String]) -> Result<Vec<SearchVolumeResult>, ApiError> {
        let body = json!({
            "method": "hasSearchVolume",
            "params": {
                "SelectionCriteria": {
                    "Keywords": phrases,
                    "RegionIds": self.settings.region_ids,
                },
                "FieldNames": FIELD_NAMES,
            },
        });

        let response = self
            .client
            .post(&self.settings.api_url)
            .bearer_auth(&self.settings.token)
            .header(ACCEPT_LANGUAGE, LOCALE)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_server_error() {
            return Err(ApiError::Transient(format!("server error {}", status)));
        }
        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            return Err(ApiError::Unauthorized {
                code: i64::from(status.as_u16()),
                message: response.text().await.unwrap_or_default(),
            });
        }

        Self::watch_units(&response).await;
        let parsed = response.json::<V5Response>().await?;

        unpack(status, parsed)
    }

    /// Which of `phrases` have any search volume in the configured regions,
    /// broken down by device type.
    pub async fn has_search_volume(
        &self,
        phrases: &[String],
    ) -> Result<Vec<SearchVolumeResult>, ApiError> {
        let label = format!("hasSearchVolume ({} phrases)", phrases.len());
        retry(&self.retry_policy, &label, || self.check_once(phrases)).await
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::{classify_v5_error, unpack, Units, V5Response};
    use crate::errors::ApiError;

    fn response(body: &str) -> V5Response {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn v5_error_codes_follow_taxonomy() {
        assert!(matches!(
            classify_v5_error(52, String::new()),
            ApiError::RateLimited { cool_down, .. } if cool_down.as_secs() == 60
        ));
        assert!(matches!(
            classify_v5_error(53, String::new()),
            ApiError::RateLimited { cool_down, .. } if cool_down.as_secs() == 5
        ));

        let too_many = classify_v5_error(506, "limit 10000".to_string());
        assert!(!too_many.is_retryable() && !too_many.is_fatal());
        assert!(too_many.to_string().contains("too many phrases"));

        assert!(classify_v5_error(1001, String::new()).is_fatal());
        assert!(matches!(
            classify_v5_error(8000, String::new()),
            ApiError::Unauthorized { .. }
        ));
        assert!(matches!(classify_v5_error(71, String::new()), ApiError::Rejected { .. }));
    }

    #[test]
    fn error_body_wins_over_status() {
        let parsed = response(
            r#"{"error": {"request_id": "1", "error_code": "52",
                "error_string": "Not enough units", "error_detail": ""}}"#,
        );

        match unpack(StatusCode::BAD_REQUEST, parsed) {
            Err(ApiError::RateLimited { reason, .. }) => {
                assert_eq!(reason, "not enough units: Not enough units")
            }
            _ => panic!("expected a cool-down"),
        }
    }

    #[test]
    fn results_are_parsed_per_device() {
        let parsed = response(
            r#"{"result": {"HasSearchVolumeResults": [
                {"Keyword": "маникюр спб", "RegionIds": [2], "AllDevices": "YES",
                 "MobilePhones": "YES", "Tablets": "NO", "Desktops": "YES"}
            ]}}"#,
        );

        let results = unpack(StatusCode::OK, parsed).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].keyword, "маникюр спб");
        assert_eq!(results[0].mobile_phones, "YES");
        assert_eq!(results[0].tablets, "NO");

        assert!(matches!(
            unpack(StatusCode::OK, response("{}")),
            Err(ApiError::Malformed(_))
        ));
    }

    #[test]
    fn units_header_is_parsed() {
        assert_eq!(
            Units::parse("10/20828/64000"),
            Some(Units {
                spent: 10,
                remaining: 20828,
                daily_limit: 64000
            })
        );
        assert_eq!(Units::parse("10/20828"), None);
        assert_eq!(Units::parse("10/x/64000"), None);
        assert_eq!(Units::parse("1/2/3/4"), None);
    }
}
