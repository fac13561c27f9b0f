//! Per-domain rollup of SERP appearances, weighted by keyword volume and slot CTR.
//!
//! The output is reviewed by hand to correct the classification tables.

use std::collections::HashMap;

use itertools::Itertools;
use serde::Serialize;

use super::{category::Category, classification::classify, ctr::ctr_weight};

pub const MAPS_PSEUDO_DOMAIN: &str = "yandex.ru/maps";
const MAPS_PARENT_DOMAIN: &str = "yandex.ru";
const MAPS_PATH: &str = "/maps";

const MAX_SAMPLE_TITLES: usize = 3;
const MAX_SAMPLE_SNIPPETS: usize = 2;
const TITLE_SAMPLE_LEN: usize = 120;
const SNIPPET_SAMPLE_LEN: usize = 200;

/// A SERP appearance already joined with its keyword volume.
pub struct Appearance<'a> {
    pub volume: f64,
    pub position: u32,
    pub domain: &'a str,
    pub url: &'a str,
    pub title: &'a str,
    pub snippet: &'a str,
}

/// Map listings have nothing in common with the engine's web results, so they
/// get their own bucket.
pub fn resolve_domain(domain: &str, url: &str) -> String {
    let domain = domain.trim().to_lowercase();
    if domain == MAPS_PARENT_DOMAIN && url.contains(MAPS_PATH) {
        return MAPS_PSEUDO_DOMAIN.to_string();
    }
    domain
}

#[derive(Debug, Default)]
struct DomainAccumulator {
    adjusted_volume: f64,
    appearances: u32,
    // first-seen order, used for tie-breaks
    category_counts: Vec<(Category, u32)>,
    titles: Vec<String>,
    snippets: Vec<String>,
}

impl DomainAccumulator {
    fn count(&mut self, category: Category) {
        match self.category_counts.iter_mut().find(|(c, _)| *c == category) {
            Some((_, n)) => *n += 1,
            None => self.category_counts.push((category, 1)),
        }
    }

    /// Highest count, earliest seen on ties.
    fn dominant(&self) -> Category {
        self.category_counts
            .iter()
            .fold(None::<&(Category, u32)>, |best, entry| match best {
                Some(b) if b.1 >= entry.1 => Some(b),
                _ => Some(entry),
            })
            .map(|(c, _)| *c)
            .unwrap_or(Category::Unknown)
    }

    fn category_display(&self) -> String {
        if self.category_counts.len() <= 1 {
            return self.dominant().to_string();
        }

        let total: u32 = self.category_counts.iter().map(|(_, n)| n).sum();
        // stable sort keeps first-seen order among equal counts
        self.category_counts
            .iter()
            .sorted_by(|a, b| b.1.cmp(&a.1))
            .map(|(c, n)| format!("{} ({}%)", c, n * 100 / total))
            .join(" / ")
    }
}

fn push_sample(samples: &mut Vec<String>, text: &str, max_len: usize) {
    let text = text.trim();
    if text.is_empty() || text == "None" {
        return;
    }
    let truncated: String = text.chars().take(max_len).collect();
    if !samples.contains(&truncated) {
        samples.push(truncated);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainAggregate {
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "Adjusted Search Volume")]
    pub adjusted_volume: f64,
    #[serde(rename = "Appearances")]
    pub appearances: u32,
    #[serde(skip)]
    pub dominant_category: Category,
    #[serde(rename = "Current Script Category")]
    pub category_display: String,
    #[serde(rename = "Sample Titles")]
    pub sample_titles: String,
    #[serde(rename = "Sample Snippets")]
    pub sample_snippets: String,
}

pub fn aggregate_domains<'a, I>(appearances: I) -> Vec<DomainAggregate>
where
    I: IntoIterator<Item = Appearance<'a>>,
{
    let mut accumulators: HashMap<String, DomainAccumulator> = HashMap::new();

    for appearance in appearances {
        let Some(weight) = ctr_weight(appearance.position) else {
            continue;
        };
        let domain = resolve_domain(appearance.domain, appearance.url);
        if domain.is_empty() {
            continue;
        }

        let category = match domain.as_str() {
            MAPS_PSEUDO_DOMAIN => classify(MAPS_PARENT_DOMAIN, appearance.url, appearance.title),
            d => classify(d, appearance.url, appearance.title),
        };

        let acc = accumulators.entry(domain).or_default();
        acc.count(category);
        acc.adjusted_volume += appearance.volume * weight;
        acc.appearances += 1;

        if acc.titles.len() < MAX_SAMPLE_TITLES {
            push_sample(&mut acc.titles, appearance.title, TITLE_SAMPLE_LEN);
        }
        if acc.snippets.len() < MAX_SAMPLE_SNIPPETS {
            push_sample(&mut acc.snippets, appearance.snippet, SNIPPET_SAMPLE_LEN);
        }
    }

    accumulators
        .into_iter()
        .sorted_by(|(da, a), (db, b)| {
            b.adjusted_volume
                .total_cmp(&a.adjusted_volume)
                .then_with(|| da.cmp(db))
        })
        .map(|(domain, acc)| DomainAggregate {
            adjusted_volume: (acc.adjusted_volume * 10.0).round() / 10.0,
            appearances: acc.appearances,
            dominant_category: acc.dominant(),
            category_display: acc.category_display(),
            sample_titles: acc.titles.join(" | "),
            sample_snippets: acc.snippets.join(" | "),
            domain,
        })
        .collect()
}
