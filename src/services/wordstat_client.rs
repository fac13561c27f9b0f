use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::{
    configuration::WordstatSettings,
    errors::ApiError,
    services::retry::{retry, RetryPolicy},
};

const RETRY_BASE_DELAY: Duration = Duration::from_secs(2);

#[derive(Serialize)]
struct WordstatQuery<'a> {
    query: &'a str,
    key: &'a str,
    user: &'a str,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct WordstatPhrase {
    pub text: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub value: u64,
}

#[derive(Deserialize, Debug)]
pub struct WordstatResponse {
    #[serde(default)]
    pub popular: Vec<WordstatPhrase>,
}

/// Client for the Wordstat "popular phrases" endpoint (via XMLRiver).
pub struct WordstatClient {
    client: Client,
    settings: WordstatSettings,
    retry_policy: RetryPolicy,
}

impl WordstatClient {
    pub fn new(settings: WordstatSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(settings.timeout()).build()?;
        let retry_policy = RetryPolicy::linear(settings.max_retries, RETRY_BASE_DELAY);

        Ok(WordstatClient {
            client,
            settings,
            retry_policy,
        })
    }

    async fn fetch_once(&self, query: &str) -> Result<Vec<WordstatPhrase>, ApiError> {
        let response = self
            .client
            .get(&self.settings.api_url)
            .query(&WordstatQuery {
                query,
                key: &self.settings.key,
                user: &self.settings.user,
            })
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        parse_wordstat_response(&body)
    }

    pub async fn popular_phrases(&self, query: &str) -> Result<Vec<WordstatPhrase>, ApiError> {
        let label = format!("Wordstat '{}'", query);
        retry(&self.retry_policy, &label, || self.fetch_once(query)).await
    }
}

pub fn parse_wordstat_response(body: &str) -> Result<Vec<WordstatPhrase>, ApiError> {
    serde_json::from_str::<WordstatResponse>(body)
        .map(|r| r.popular)
        .map_err(|e| ApiError::Malformed(format!("wordstat response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::parse_wordstat_response;
    use crate::errors::ApiError;

    #[test]
    fn values_may_arrive_as_strings() {
        let body = r#"{"popular": [
            {"text": "маникюр спб", "value": "1520"},
            {"text": "маникюр фото", "value": 830}
        ]}"#;

        let phrases = parse_wordstat_response(body).unwrap();

        assert_eq!(phrases.len(), 2);
        assert_eq!(phrases[0].value, 1520);
        assert_eq!(phrases[1].text, "маникюр фото");
        assert_eq!(phrases[1].value, 830);
    }

    #[test]
    fn missing_popular_is_empty_and_garbage_is_malformed() {
        assert!(parse_wordstat_response("{}").unwrap().is_empty());
        assert!(matches!(
            parse_wordstat_response("<html>502</html>"),
            Err(ApiError::Malformed(_))
        ));
    }
}
