use std::collections::{HashMap, HashSet};

use itertools::Itertools;

use super::{category::Category, classification::classify, keyword::Keyword, serp::SerpRow};

const MAX_EXAMPLES: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownDomain {
    pub domain: String,
    pub count: usize,
    /// (keyword, position) pairs
    pub examples: Vec<(String, u32)>,
}

#[derive(Debug, Default, PartialEq)]
pub struct UnknownScan {
    pub selected: usize,
    pub category_counts: Vec<(Category, usize)>,
    pub unknown_domains: Vec<UnknownDomain>,
}

impl UnknownScan {
    pub fn total(&self) -> usize {
        self.category_counts.iter().map(|(_, n)| n).sum()
    }

    pub fn unknown(&self) -> usize {
        self.category_counts
            .iter()
            .find(|(c, _)| *c == Category::Unknown)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    pub fn known_share(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => 1.0 - self.unknown() as f64 / total as f64,
        }
    }
}

/// Keywords ranked by exact volume, highest first. Missing volumes rank as zero.
pub fn rank_by_exact_volume(mut keywords: Vec<Keyword>) -> Vec<Keyword> {
    keywords.sort_by(|a, b| {
        b.exact_volume
            .unwrap_or(0.0)
            .total_cmp(&a.exact_volume.unwrap_or(0.0))
    });
    keywords
}

/// 1-indexed inclusive slice, clamped to the list.
pub fn select_range(ranked: &[Keyword], start: usize, end: usize) -> &[Keyword] {
    let from = start.saturating_sub(1).min(ranked.len());
    let to = end.min(ranked.len()).max(from);
    &ranked[from..to]
}

pub fn scan_unknowns(selected: &[Keyword], serp_rows: &[SerpRow]) -> UnknownScan {
    let queries: HashSet<&str> = selected.iter().map(|k| k.query.trim()).collect();

    let mut category_counts: HashMap<Category, usize> = HashMap::new();
    let mut unknown: HashMap<String, UnknownDomain> = HashMap::new();

    for row in serp_rows {
        let query = row.query.trim();
        if !queries.contains(query) {
            continue;
        }
        let Some(position) = row.weighted_position() else {
            continue;
        };

        let domain = row.domain.trim();
        let category = classify(domain, &row.url, &row.title);
        *category_counts.entry(category).or_default() += 1;

        if category == Category::Unknown {
            let entry = unknown
                .entry(domain.to_string())
                .or_insert_with(|| UnknownDomain {
                    domain: domain.to_string(),
                    count: 0,
                    examples: vec![],
                });
            entry.count += 1;
            if entry.examples.len() < MAX_EXAMPLES {
                entry.examples.push((query.to_string(), position));
            }
        }
    }

    UnknownScan {
        selected: selected.len(),
        category_counts: category_counts
            .into_iter()
            .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())))
            .collect(),
        unknown_domains: unknown
            .into_values()
            .sorted_by(|a, b| b.count.cmp(&a.count).then_with(|| a.domain.cmp(&b.domain)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::{rank_by_exact_volume, scan_unknowns, select_range};
    use crate::domain::{category::Category, keyword::Keyword, serp::SerpRow};

    fn keyword(query: &str, exact: Option<f64>) -> Keyword {
        Keyword {
            exact_volume: exact,
            ..Keyword::new(query, None)
        }
    }

    fn row(query: &str, position: Option<u32>, domain: &str) -> SerpRow {
        SerpRow {
            query: query.to_string(),
            volume: None,
            category: None,
            position,
            url: format!("https://{}/", domain),
            domain: domain.to_string(),
            title: String::new(),
            snippet: String::new(),
            cache_url: String::new(),
        }
    }

    #[test]
    fn ranking_and_range_are_one_indexed() {
        let ranked = rank_by_exact_volume(vec![
            keyword("b", Some(5.0)),
            keyword("a", Some(50.0)),
            keyword("c", None),
        ]);
        let queries: Vec<&str> = ranked.iter().map(|k| k.query.as_str()).collect();
        assert_eq!(queries, vec!["a", "b", "c"]);

        assert_eq!(select_range(&ranked, 2, 3).len(), 2);
        assert_eq!(select_range(&ranked, 2, 3)[0].query, "b");
        assert!(select_range(&ranked, 301, 2000).is_empty());
        assert_eq!(select_range(&ranked, 0, 1).len(), 1);
    }

    #[test]
    fn unknowns_are_counted_with_examples() {
        let selected = vec![keyword("маникюр", Some(10.0)), keyword("педикюр", Some(5.0))];
        let rows = vec![
            row("маникюр", Some(1), "2gis.ru"),
            row("маникюр", Some(2), "mystery.example"),
            row("маникюр", Some(9), "mystery.example"),
            row("педикюр", Some(3), "mystery.example"),
            row("педикюр", None, "mystery.example"),
            row("маникюр спб", Some(1), "mystery.example"),
            row("педикюр", Some(4), "mystery.example"),
            row("педикюр", Some(0), "mystery.example"),
        ];

        let scan = scan_unknowns(&selected, &rows);

        assert_eq!(scan.total(), 4);
        assert_eq!(scan.unknown(), 3);
        assert_eq!(scan.category_counts[0], (Category::Unknown, 3));
        assert_eq!(scan.unknown_domains.len(), 1);
        assert_eq!(scan.unknown_domains[0].count, 3);
        assert_eq!(
            scan.unknown_domains[0].examples,
            vec![("маникюр".to_string(), 2), ("педикюр".to_string(), 3)]
        );
        assert!((scan.known_share() - 0.25).abs() < 1e-9);
    }
}
