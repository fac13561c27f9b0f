use std::{collections::HashMap, path::Path};

use crate::{
    configuration::Settings,
    dal::{load_serp_rows, write_keyword_column},
    domain::{
        category::Category,
        classification::classify,
        keyword::{normalize_phrase, COMMERCIALIZATION_COLUMN},
        scoring::{commercialization_score, summarize, ScoreSummary},
        serp::SerpRow,
    },
};

/// Score per normalized query. Queries with no weighted rows are absent;
/// queries whose weighted rows are all unknown score `None`.
pub fn score_keywords(rows: &[SerpRow]) -> HashMap<String, Option<f64>> {
    let mut results: HashMap<String, Vec<(u32, Category)>> = HashMap::new();

    for row in rows {
        let query = normalize_phrase(&row.query);
        let Some(position) = row.weighted_position() else {
            continue;
        };
        if query.is_empty() {
            continue;
        }
        let category = classify(&row.domain, &row.url, &row.title);
        results.entry(query).or_default().push((position, category));
    }

    results
        .into_iter()
        .map(|(query, results)| (query, commercialization_score(results)))
        .collect()
}

pub fn commercialize_files(serp_path: &Path, keywords_path: &Path) -> anyhow::Result<ScoreSummary> {
    let rows = load_serp_rows(serp_path)?;
    let scores = score_keywords(&rows);
    log::info!("Calculated scores for {} keywords", scores.len());

    let summary = summarize(scores.values());
    log::info!("Average commercialization: {:.1}%", summary.mean * 100.0);
    log::info!("Fully commercial (>= 0.8): {}", summary.fully_commercial);
    log::info!("High commercial (0.5-0.8): {}", summary.high);
    log::info!("Medium (0.2-0.5): {}", summary.medium);
    log::info!("Low (< 0.2): {}", summary.low);
    log::info!("Undefined (all unknown): {}", summary.undefined);

    let column: HashMap<String, String> = scores
        .into_iter()
        .map(|(query, score)| (query, score.map(|s| s.to_string()).unwrap_or_default()))
        .collect();
    write_keyword_column(keywords_path, COMMERCIALIZATION_COLUMN, &column)?;

    Ok(summary)
}

pub async fn commercialize(settings: &Settings) -> anyhow::Result<()> {
    commercialize_files(&settings.files.serp_results, &settings.files.keywords)?;
    Ok(())
}
