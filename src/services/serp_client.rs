use std::time::Duration;

use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::{
    configuration::SerpSettings,
    domain::serp::{domain_from_url, SerpOutcome, SerpResult},
    errors::ApiError,
    services::retry::{retry, RetryPolicy},
};

const DOCS_IN_GROUP: u8 = 1;
const RETRY_BASE_DELAY: Duration = Duration::from_secs(2);
const TRANSIENT_ERROR_CODE: &str = "500";
const TRANSIENT_ERROR_HINT: &str = "перезапрос";

/// Client for the Yandex XML results API (via XMLRiver).
pub struct SerpClient {
    client: Client,
    settings: SerpSettings,
    retry_policy: RetryPolicy,
}

impl SerpClient {
    pub fn new(settings: SerpSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(settings.timeout()).build()?;
        let retry_policy = RetryPolicy::linear(settings.max_retries, RETRY_BASE_DELAY);

        Ok(SerpClient {
            client,
            settings,
            retry_policy,
        })
    }

    pub fn build_url(&self, query: &str) -> Result<Url, url::ParseError> {
        let groupby = format!(
            "attr=d.mode=deep.groups-on-page={}.docs-in-group={}",
            self.settings.groups_on_page, DOCS_IN_GROUP
        );

        Url::parse_with_params(
            &self.settings.api_url,
            &[
                ("user", self.settings.user.as_str()),
                ("key", self.settings.key.as_str()),
                ("query", query),
                ("lr", self.settings.region.to_string().as_str()),
                ("groupby", groupby.as_str()),
            ],
        )
    }

    async fn fetch_once(&self, url: &Url) -> Result<SerpOutcome, ApiError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        parse_serp_response(&body)
    }

    /// Transient failures are retried; whatever is left after the last attempt
    /// is returned to the caller.
    pub async fn fetch(&self, query: &str) -> Result<SerpOutcome, ApiError> {
        let url = self
            .build_url(query)
            .map_err(|e| ApiError::Malformed(format!("bad api url: {}", e)))?;
        let label = format!("SERP '{}'", query);

        retry(&self.retry_policy, &label, || self.fetch_once(&url)).await
    }
}

fn selector(css: &str) -> Result<Selector, ApiError> {
    Selector::parse(css).map_err(|e| ApiError::Malformed(format!("selector {}: {:?}", css, e)))
}

fn strip_hlword(text: &str) -> String {
    text.replace("<hlword>", "")
        .replace("</hlword>", "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn first_text(doc: &ElementRef, selector: &Selector) -> Option<String> {
    doc.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

pub fn parse_serp_response(body: &str) -> Result<SerpOutcome, ApiError> {
    let document = Html::parse_document(body);

    let error_selector = selector("error")?;
    if let Some(error) = document.select(&error_selector).next() {
        let code = error.value().attr("code").unwrap_or_default();
        let text: String = error.text().collect();

        if code == TRANSIENT_ERROR_CODE || text.to_lowercase().contains(TRANSIENT_ERROR_HINT) {
            return Err(ApiError::Transient(format!("serp api error {}: {}", code, text.trim())));
        }
        log::warn!("SERP api returned error {}: {}", code, text.trim());
        return Ok(SerpOutcome::NoResults);
    }

    let group_selector = selector("group")?;
    let doc_selector = selector("doc")?;
    let url_selector = selector("url")?;
    let domain_selector = selector("domain")?;
    let title_selector = selector("title")?;
    let passage_selector = selector("passage")?;
    let headline_selector = selector("headline")?;
    let cache_selector = selector("saved-copy-url")?;

    let mut results = vec![];

    for (index, group) in document.select(&group_selector).enumerate() {
        let Some(doc) = group.select(&doc_selector).next() else {
            continue;
        };

        let url = first_text(&doc, &url_selector).unwrap_or_default();
        let domain = first_text(&doc, &domain_selector)
            .filter(|d| !d.is_empty())
            .or_else(|| domain_from_url(&url))
            .unwrap_or_default();

        let passages: Vec<String> = doc
            .select(&passage_selector)
            .map(|p| p.text().collect::<String>())
            .collect();
        let snippet = match passages.join(" ") {
            s if s.trim().is_empty() => first_text(&doc, &headline_selector).unwrap_or_default(),
            s => s,
        };

        results.push(SerpResult {
            position: index as u32 + 1,
            url,
            domain,
            title: strip_hlword(&first_text(&doc, &title_selector).unwrap_or_default()),
            snippet: strip_hlword(&snippet),
            cache_url: first_text(&doc, &cache_selector).unwrap_or_default(),
        });
    }

    match results.is_empty() {
        true => Ok(SerpOutcome::NoResults),
        false => Ok(SerpOutcome::Results(results)),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_serp_response, SerpClient};
    use crate::{configuration::SerpSettings, domain::serp::SerpOutcome, errors::ApiError};

    const RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<yandexsearch version="1.0">
<response>
<results>
<grouping>
<group>
<doc>
<url>https://2gis.ru/spb/search/маникюр</url>
<domain>2gis.ru</domain>
<title>Маникюр в <hlword>Санкт-Петербурге</hlword> — 2ГИС</title>
<passages>
<passage>Лучшие <hlword>салоны</hlword>   маникюра</passage>
<passage>рядом с вами</passage>
</passages>
<saved-copy-url>https://yandexwebcache.net/2gis</saved-copy-url>
</doc>
</group>
<group>
</group>
<group>
<doc>
<url>https://www.pinterest.ru/ideas/manicure/</url>
<domain></domain>
<title>Идеи маникюра</title>
<headline>Подборка &amp; идеи</headline>
</doc>
</group>
</grouping>
</results>
</response>
</yandexsearch>"#;

    #[test]
    fn parses_groups_into_results() {
        let SerpOutcome::Results(results) = parse_serp_response(RESPONSE).unwrap() else {
            panic!("expected results");
        };

        assert_eq!(results.len(), 2);

        assert_eq!(results[0].position, 1);
        assert_eq!(results[0].domain, "2gis.ru");
        assert_eq!(results[0].title, "Маникюр в Санкт-Петербурге — 2ГИС");
        assert_eq!(results[0].snippet, "Лучшие салоны маникюра рядом с вами");
        assert_eq!(results[0].cache_url, "https://yandexwebcache.net/2gis");

        // empty group still takes a position
        assert_eq!(results[1].position, 3);
        assert_eq!(results[1].domain, "www.pinterest.ru");
        assert_eq!(results[1].snippet, "Подборка & идеи");
        assert_eq!(results[1].cache_url, "");
    }

    #[test]
    fn retryable_api_errors() {
        let body = r#"<yandexsearch><response><error code="500">Internal error</error></response></yandexsearch>"#;
        assert!(matches!(parse_serp_response(body), Err(ApiError::Transient(_))));

        let body = r#"<yandexsearch><response><error code="110">Сделайте перезапрос</error></response></yandexsearch>"#;
        assert!(matches!(parse_serp_response(body), Err(ApiError::Transient(_))));
    }

    #[test]
    fn other_api_errors_mean_no_results() {
        let body = r#"<yandexsearch><response><error code="15">Нет результатов</error></response></yandexsearch>"#;
        assert_eq!(parse_serp_response(body).unwrap(), SerpOutcome::NoResults);
        assert_eq!(parse_serp_response("<yandexsearch/>").unwrap(), SerpOutcome::NoResults);
    }

    #[test]
    fn url_carries_query_and_grouping() {
        let client = SerpClient::new(SerpSettings {
            api_url: "http://xmlriver.com/yandex/xml".to_string(),
            user: "1".to_string(),
            key: "k".to_string(),
            region: 2,
            groups_on_page: 10,
            workers: 10,
            save_every: 100,
            max_retries: 3,
            timeout_secs: 30,
        })
        .unwrap();

        let url = client.build_url("маникюр спб").unwrap();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        assert!(pairs.contains(&("query".to_string(), "маникюр спб".to_string())));
        assert!(pairs.contains(&("lr".to_string(), "2".to_string())));
        assert!(pairs.contains(&(
            "groupby".to_string(),
            "attr=d.mode=deep.groups-on-page=10.docs-in-group=1".to_string()
        )));
    }
}
