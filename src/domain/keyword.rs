use serde::{Deserialize, Serialize};

pub const QUERY_COLUMN: &str = "Search Query";
pub const EXACT_VOLUME_COLUMN: &str = "Search Volume (Exact Match Type)";
pub const COMMERCIALIZATION_COLUMN: &str = "Commercialization Level";

/// One row of the keyword table. Only `Search Query` is required.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Keyword {
    #[serde(rename = "Search Query")]
    pub query: String,
    #[serde(rename = "Search Volume", default)]
    pub volume: Option<f64>,
    #[serde(rename = "Категория", default)]
    pub category: Option<String>,
    #[serde(rename = "Search Volume (Exact Match Type)", default)]
    pub exact_volume: Option<f64>,
    #[serde(rename = "Hub", default)]
    pub hub: Option<String>,
    #[serde(rename = "Commercialization Level", default)]
    pub commercialization: Option<f64>,
}

impl Keyword {
    pub fn new(query: &str, volume: Option<f64>) -> Self {
        Keyword {
            query: query.trim().to_string(),
            volume,
            category: None,
            exact_volume: None,
            hub: None,
            commercialization: None,
        }
    }

    pub fn key(&self) -> String {
        normalize_phrase(&self.query)
    }

    /// Exact-match volume when known and positive.
    pub fn positive_exact_volume(&self) -> Option<f64> {
        self.exact_volume.filter(|v| *v > 0.0)
    }
}

pub fn normalize_phrase(phrase: &str) -> String {
    phrase.trim().to_lowercase()
}

/// `маникюр на ногти` -> `"!маникюр !на !ногти"`
pub fn to_exact_match(phrase: &str) -> String {
    let words: Vec<String> = phrase
        .split_whitespace()
        .map(|w| format!("!{}", w))
        .collect();

    format!("\"{}\"", words.join(" "))
}

/// Strips match operators so a phrase echoed back by the API can be compared
/// with the one we sent.
pub fn strip_match_operators(phrase: &str) -> String {
    normalize_phrase(&phrase.replace(['"', '!'], ""))
}

#[cfg(test)]
mod tests {
    use super::{strip_match_operators, to_exact_match, Keyword};

    #[test]
    fn exact_match_prefixes_every_word() {
        assert_eq!(
            to_exact_match(" маникюр на  короткие ногти "),
            "\"!маникюр !на !короткие !ногти\""
        );
    }

    #[test]
    fn stripped_phrase_matches_original() {
        let sent = to_exact_match("Маникюр СПб");
        assert_eq!(strip_match_operators(&sent), "маникюр спб");
        assert_eq!(strip_match_operators("!маникюр !спб"), "маникюр спб");
    }

    #[test]
    fn positive_exact_volume_filters_zero() {
        let mut keyword = Keyword::new("маникюр", Some(10.0));
        assert_eq!(keyword.positive_exact_volume(), None);

        keyword.exact_volume = Some(0.0);
        assert_eq!(keyword.positive_exact_volume(), None);

        keyword.exact_volume = Some(42.0);
        assert_eq!(keyword.positive_exact_volume(), Some(42.0));
    }
}
