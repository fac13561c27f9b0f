//! Rule-based classification of SERP results.
//!
//! Stages run in order and the first one to return a category wins. URL rules
//! come first because one host can serve both listings and articles.

mod tables;

use std::collections::HashSet;

use once_cell::sync::Lazy;

use super::category::Category;
use tables::{
    COMMERCIAL_DOMAINS, COMMERCIAL_DOMAIN_SUFFIXES, COMMERCIAL_URL_PATTERNS, ECOMMERCE_DOMAINS,
    INFORMATIONAL_DOMAINS, INFORMATIONAL_DOMAIN_SUFFIXES, INFORMATIONAL_URL_PATTERNS,
};

const SOCIAL_DOMAIN: &str = "vk.com";

/// Title fragments that mark a social network page as a salon or master.
const SERVICE_TITLE_KEYWORDS: [&str; 7] = [
    "студи",
    "салон",
    "мастер маникюр",
    "мастер педикюр",
    "ногтев",
    "запись на маникюр",
    "запись на педикюр",
];

const AGGREGATOR_FRAGMENT: &str = "pinterest.";

static COMMERCIAL_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| COMMERCIAL_DOMAINS.iter().copied().collect());
static ECOMMERCE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ECOMMERCE_DOMAINS.iter().copied().collect());
static INFORMATIONAL_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| INFORMATIONAL_DOMAINS.iter().copied().collect());

/// Normalized view of one search result.
pub struct ResultSubject {
    pub domain: String,
    pub url: String,
    pub title: String,
}

impl ResultSubject {
    pub fn new(domain: &str, url: &str, title: &str) -> Self {
        ResultSubject {
            domain: domain.trim().to_lowercase(),
            url: url.trim().to_lowercase(),
            title: title.trim().to_lowercase(),
        }
    }
}

type Stage = fn(&ResultSubject) -> Option<Category>;

const STAGES: [Stage; 5] = [
    by_url_pattern,
    by_social_title,
    by_exact_domain,
    by_domain_suffix,
    by_aggregator_fragment,
];

pub fn classify(domain: &str, url: &str, title: &str) -> Category {
    let subject = ResultSubject::new(domain, url, title);

    STAGES
        .iter()
        .find_map(|stage| stage(&subject))
        .unwrap_or(Category::Unknown)
}

fn by_url_pattern(subject: &ResultSubject) -> Option<Category> {
    if COMMERCIAL_URL_PATTERNS
        .iter()
        .any(|pattern| subject.url.contains(pattern))
    {
        return Some(Category::Commercial);
    }

    INFORMATIONAL_URL_PATTERNS
        .iter()
        .any(|pattern| subject.url.contains(pattern))
        .then_some(Category::Informational)
}

fn by_social_title(subject: &ResultSubject) -> Option<Category> {
    if subject.domain != SOCIAL_DOMAIN {
        return None;
    }

    match SERVICE_TITLE_KEYWORDS
        .iter()
        .any(|kw| subject.title.contains(kw))
    {
        true => Some(Category::Commercial),
        false => Some(Category::Informational),
    }
}

fn by_exact_domain(subject: &ResultSubject) -> Option<Category> {
    let domain = subject.domain.as_str();

    if COMMERCIAL_SET.contains(domain) {
        Some(Category::Commercial)
    } else if ECOMMERCE_SET.contains(domain) {
        Some(Category::Ecommerce)
    } else if INFORMATIONAL_SET.contains(domain) {
        Some(Category::Informational)
    } else {
        None
    }
}

fn by_domain_suffix(subject: &ResultSubject) -> Option<Category> {
    if COMMERCIAL_DOMAIN_SUFFIXES
        .iter()
        .any(|suffix| subject.domain.ends_with(suffix))
    {
        return Some(Category::Commercial);
    }

    INFORMATIONAL_DOMAIN_SUFFIXES
        .iter()
        .any(|suffix| subject.domain.ends_with(suffix))
        .then_some(Category::Informational)
}

fn by_aggregator_fragment(subject: &ResultSubject) -> Option<Category> {
    subject
        .domain
        .contains(AGGREGATOR_FRAGMENT)
        .then_some(Category::Informational)
}

#[cfg(test)]
mod tests {
    use super::classify;
    use crate::domain::category::Category;

    #[test]
    fn social_domain_with_service_title_is_commercial() {
        assert_eq!(
            classify("vk.com", "https://vk.com/nails_spb", "Ногтевая студия Маникюр СПб"),
            Category::Commercial
        );
    }

    #[test]
    fn social_domain_without_service_title_is_informational() {
        assert_eq!(
            classify("vk.com", "https://vk.com/wall-1_2", "Фото маникюра"),
            Category::Informational
        );
    }

    #[test]
    fn url_pattern_beats_exact_domain() {
        // nails-up.ru is a listed salon but its blog is editorial
        assert_eq!(classify("nails-up.ru", "https://nails-up.ru/", ""), Category::Commercial);
        assert_eq!(
            classify("nails-up.ru", "https://nails-up.ru/blog/kak-uhazhivat", ""),
            Category::Informational
        );
    }

    #[test]
    fn yandex_maps_and_images_split_by_path() {
        assert_eq!(
            classify("yandex.ru", "https://yandex.ru/maps/2/saint-petersburg/search/маникюр", ""),
            Category::Commercial
        );
        assert_eq!(
            classify("yandex.ru", "https://yandex.ru/images/search?text=маникюр", ""),
            Category::Informational
        );
    }

    #[test]
    fn exact_lists_resolve() {
        assert_eq!(classify("2gis.ru", "", ""), Category::Commercial);
        assert_eq!(classify("www.ozon.ru", "", ""), Category::Ecommerce);
        assert_eq!(classify("market.yandex.ru", "", ""), Category::Ecommerce);
    }

    #[test]
    fn input_is_normalized() {
        assert_eq!(classify("  2GIS.ru ", "", ""), Category::Commercial);
        assert_eq!(
            classify("VK.com", "", "САЛОН красоты"),
            Category::Commercial
        );
    }

    #[test]
    fn suffixes_cover_platform_subdomains() {
        assert_eq!(classify("my-salon.clients.site", "", ""), Category::Commercial);
        assert_eq!(classify("ru.pinterest.com", "", ""), Category::Informational);
        assert_eq!(classify("spb.kp.ru", "", ""), Category::Informational);
    }

    #[test]
    fn aggregator_fragment_is_informational() {
        assert_eq!(classify("pinterest.de", "", ""), Category::Informational);
    }

    #[test]
    fn unmatched_is_unknown() {
        assert_eq!(classify("", "", ""), Category::Unknown);
        assert_eq!(
            classify("never-seen-before.example", "https://never-seen-before.example/a", "Title"),
            Category::Unknown
        );
    }

    #[test]
    fn classification_is_repeatable() {
        let first = classify("vk.com", "https://vk.com/x", "Салон на Комендантском");
        for _ in 0..10 {
            assert_eq!(classify("vk.com", "https://vk.com/x", "Салон на Комендантском"), first);
        }
    }
}
