use std::{collections::HashMap, future::Future, time::Duration};

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    configuration::ForecastSettings,
    domain::keyword::strip_match_operators,
    errors::ApiError,
    services::retry::{retry, RetryPolicy},
};

const LOCALE: &str = "ru";
const RETRY_BASE_DELAY: Duration = Duration::from_secs(1);
const CLEANUP_PAUSE: Duration = Duration::from_secs(2);

const STATUS_DONE: &str = "Done";
const STATUS_FAILED: &str = "Failed";

#[derive(Serialize)]
struct ApiRequest<'a> {
    method: &'a str,
    locale: &'a str,
    token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    param: Option<Value>,
}

#[derive(Deserialize)]
struct ApiResponse {
    data: Option<Value>,
    error_code: Option<i64>,
    error_str: Option<String>,
    error_detail: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ForecastInfo {
    #[serde(rename = "ForecastID")]
    forecast_id: u64,
    #[serde(rename = "StatusForecast", default)]
    status: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ForecastPhrase {
    #[serde(rename = "Phrase", default)]
    pub phrase: String,
    #[serde(rename = "Shows", default)]
    pub shows: u64,
}

#[derive(Deserialize)]
struct ForecastData {
    #[serde(rename = "Phrases", default)]
    phrases: Vec<ForecastPhrase>,
}

/// Maps a Direct API error code onto the retry taxonomy.
pub fn classify_error_code(code: i64, message: String) -> ApiError {
    match code {
        31 => ApiError::ReportLimit,
        152 => ApiError::RateLimited {
            reason: format!("not enough points: {}", message),
            cool_down: Duration::from_secs(60),
        },
        52 => ApiError::RateLimited {
            reason: format!("server busy: {}", message),
            cool_down: Duration::from_secs(60),
        },
        53 => ApiError::RateLimited {
            reason: format!("too many requests: {}", message),
            cool_down: Duration::from_secs(5),
        },
        500 | 502 | 503 => ApiError::Transient(format!("server error {}: {}", code, message)),
        c if c >= 1000 => ApiError::Unauthorized { code, message },
        _ => ApiError::Rejected { code, message },
    }
}

fn unpack(response: ApiResponse) -> Result<Value, ApiError> {
    if let Some(code) = response.error_code {
        let message = response
            .error_detail
            .filter(|d| !d.is_empty())
            .or(response.error_str)
            .unwrap_or_default();
        return Err(classify_error_code(code, message));
    }

    response
        .data
        .ok_or_else(|| ApiError::Malformed("response has neither data nor error_code".to_string()))
}

/// Client for the Yandex Direct v4 Live forecast methods.
pub struct ForecastClient {
    client: Client,
    settings: ForecastSettings,
    retry_policy: RetryPolicy,
}

impl ForecastClient {
    pub fn new(settings: ForecastSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(settings.timeout()).build()?;
        let retry_policy = RetryPolicy::exponential(settings.max_retries, RETRY_BASE_DELAY);

        Ok(ForecastClient {
            client,
            settings,
            retry_policy,
        })
    }

    async fn call_once(&self, method: &str, param: &Option<Value>) -> Result<Value, ApiError> {
        let request = ApiRequest {
            method,
            locale: LOCALE,
            token: &self.settings.token,
            param: param.clone(),
        };

        let response = self
            .client
            .post(&self.settings.api_url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<ApiResponse>()
            .await?;

        unpack(response)
    }

    async fn call(&self, method: &str, param: Option<Value>) -> Result<Value, ApiError> {
        retry(&self.retry_policy, method, || self.call_once(method, &param)).await
    }

    async fn try_create(&self, phrases: &[String]) -> Result<u64, ApiError> {
        let param = json!({
            "Phrases": phrases,
            "GeoID": self.settings.region_ids,
            "Currency": self.settings.currency,
        });
        let data = self.call("CreateNewForecast", Some(param)).await?;

        data.as_u64()
            .ok_or_else(|| ApiError::Malformed(format!("forecast id is not a number: {}", data)))
    }

    /// Starts a forecast report. When the server already holds the maximum
    /// number of reports they are all deleted and creation is tried once more.
    pub async fn create_forecast(&self, phrases: &[String]) -> Result<u64, ApiError> {
        match self.try_create(phrases).await {
            Err(ApiError::ReportLimit) => {
                log::warn!("Report limit reached, deleting existing reports");
                self.cleanup_reports().await?;
                self.try_create(phrases).await
            }
            other => other,
        }
    }

    async fn list_forecasts(&self) -> Result<Vec<ForecastInfo>, ApiError> {
        let data = self.call("GetForecastList", None).await?;
        serde_json::from_value(data).map_err(|e| ApiError::Malformed(e.to_string()))
    }

    /// `Ok(true)` once the report is done, `Ok(false)` if it failed or never
    /// finished within the polling budget.
    pub async fn wait_for_forecast(&self, forecast_id: u64) -> Result<bool, ApiError> {
        poll_forecast(
            forecast_id,
            self.settings.max_poll_attempts,
            self.settings.poll_interval(),
            move || async move {
                Ok(self
                    .list_forecasts()
                    .await?
                    .into_iter()
                    .find(|f| f.forecast_id == forecast_id)
                    .map(|f| f.status))
            },
        )
        .await
    }

    pub async fn get_forecast(&self, forecast_id: u64) -> Result<Vec<ForecastPhrase>, ApiError> {
        let data = self.call("GetForecast", Some(json!(forecast_id))).await?;
        let data: ForecastData =
            serde_json::from_value(data).map_err(|e| ApiError::Malformed(e.to_string()))?;

        Ok(data.phrases)
    }

    pub async fn delete_forecast(&self, forecast_id: u64) -> Result<(), ApiError> {
        self.call("DeleteForecastReport", Some(json!(forecast_id)))
            .await
            .map(|_| ())
    }

    pub async fn cleanup_reports(&self) -> Result<(), ApiError> {
        for forecast in self.list_forecasts().await? {
            if let Err(e) = self.delete_forecast(forecast.forecast_id).await {
                if e.is_fatal() {
                    return Err(e);
                }
                log::warn!("Could not delete forecast {}: {}", forecast.forecast_id, e);
            }
        }
        tokio::time::sleep(CLEANUP_PAUSE).await;
        Ok(())
    }
}

/// Asks `status` for the report status up to `attempts` times, `interval`
/// apart. A report missing from the list counts as still running.
pub async fn poll_forecast<F, Fut>(
    forecast_id: u64,
    attempts: u32,
    interval: Duration,
    mut status: F,
) -> Result<bool, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<String>, ApiError>>,
{
    for _ in 0..attempts {
        match status().await?.as_deref() {
            Some(STATUS_DONE) => return Ok(true),
            Some(STATUS_FAILED) => {
                log::error!("Forecast {} failed", forecast_id);
                return Ok(false);
            }
            _ => tokio::time::sleep(interval).await,
        }
    }

    log::error!("Forecast {} timed out", forecast_id);
    Ok(false)
}

/// Matches API phrases back to the phrases of the batch.
///
/// `sent` maps the exact-match phrase we sent to the original keyword. The API
/// sometimes normalizes phrases, so unmatched ones are compared with operators
/// stripped. Keywords the API said nothing about get zero.
pub fn match_forecast_phrases(
    sent: &[(String, String)],
    phrases: &[ForecastPhrase],
) -> HashMap<String, u64> {
    let by_exact: HashMap<&str, &str> = sent
        .iter()
        .map(|(exact, original)| (exact.as_str(), original.as_str()))
        .collect();
    let mut volumes: HashMap<String, u64> = HashMap::new();

    for item in phrases {
        if let Some(original) = by_exact.get(item.phrase.as_str()) {
            volumes.insert(original.to_string(), item.shows);
            continue;
        }

        let cleaned = strip_match_operators(&item.phrase);
        let fuzzy = sent.iter().find(|(_, original)| {
            !volumes.contains_key(original) && strip_match_operators(original) == cleaned
        });
        if let Some((_, original)) = fuzzy {
            volumes.insert(original.clone(), item.shows);
        }
    }

    for (_, original) in sent {
        volumes.entry(original.clone()).or_insert(0);
    }

    volumes
}
