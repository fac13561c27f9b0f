use std::{collections::HashMap, path::Path};

use itertools::Itertools;

use crate::{
    configuration::Settings,
    dal::{load_keywords, load_serp_rows, write_records},
    domain::{
        domain_audit::{aggregate_domains, Appearance, DomainAggregate},
        keyword::Keyword,
        serp::SerpRow,
    },
};

const TOP_DOMAINS_LOGGED: usize = 20;

/// Exact volumes of keywords that have a positive one.
pub fn positive_volumes(keywords: &[Keyword]) -> HashMap<String, f64> {
    keywords
        .iter()
        .filter_map(|k| k.positive_exact_volume().map(|v| (k.key(), v)))
        .collect()
}

pub fn audit(rows: &[SerpRow], volumes: &HashMap<String, f64>) -> Vec<DomainAggregate> {
    let appearances = rows.iter().filter_map(|row| {
        let position = row.weighted_position()?;
        let volume = *volumes.get(&row.query.trim().to_lowercase())?;

        Some(Appearance {
            volume,
            position,
            domain: &row.domain,
            url: &row.url,
            title: &row.title,
            snippet: &row.snippet,
        })
    });

    aggregate_domains(appearances)
}

pub fn audit_files(
    keywords_path: &Path,
    serp_path: &Path,
    output: &Path,
) -> anyhow::Result<Vec<DomainAggregate>> {
    let volumes = positive_volumes(&load_keywords(keywords_path)?);
    log::info!("Loaded {} keywords with exact volume > 0", volumes.len());

    let rows = load_serp_rows(serp_path)?;
    let domains = audit(&rows, &volumes);

    let total: f64 = domains.iter().map(|d| d.adjusted_volume).sum();
    log::info!(
        "Aggregated {} domains, {:.0} adjusted volume in total",
        domains.len(),
        total
    );

    let mut by_category: Vec<(String, f64)> = domains
        .iter()
        .into_group_map_by(|d| d.dominant_category)
        .into_iter()
        .map(|(category, group)| {
            (category.to_string(), group.iter().map(|d| d.adjusted_volume).sum())
        })
        .collect();
    by_category.sort_by(|a, b| b.1.total_cmp(&a.1));
    for (category, volume) in by_category {
        log::info!(
            "  {:<14} {:>10.1} ({:.1}%)",
            category,
            volume,
            volume / total.max(f64::EPSILON) * 100.0
        );
    }
    for d in domains.iter().take(TOP_DOMAINS_LOGGED) {
        log::info!("  {:<40} {:>10.1}  {}", d.domain, d.adjusted_volume, d.category_display);
    }

    write_records(output, &domains)?;
    log::info!("Saved domain audit to {}", output.display());

    Ok(domains)
}

pub async fn audit_domains(settings: &Settings) -> anyhow::Result<()> {
    let files = &settings.files;
    audit_files(&files.keywords, &files.serp_results, &files.domain_audit)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::audit_files;

    #[test]
    fn audit_joins_volumes_and_writes_table() {
        let dir = tempfile::tempdir().unwrap();
        let keywords = dir.path().join("keywords.csv");
        let serp = dir.path().join("serp.csv");
        let output = dir.path().join("audit.csv");

        fs::write(
            &keywords,
            "Search Query,Search Volume (Exact Match Type)\nманикюр спб,100\nпедикюр,0\n",
        )
        .unwrap();
        fs::write(
            &serp,
            "Search Query,Search Volume,Категория,Position,URL,Domain,Title,Snippet,Cache URL\n\
             маникюр спб,,,1,https://yandex.ru/maps/2/spb,yandex.ru,Карты,,\n\
             маникюр спб,,,2,https://2gis.ru/spb,2gis.ru,2ГИС,Салоны,\n\
             маникюр спб,,,6,https://vk.com/x,vk.com,Салон,,\n\
             педикюр,,,1,https://2gis.ru/spb,2gis.ru,2ГИС,,\n\
             гель лак,,,,NO_RESULTS,,,,\n",
        )
        .unwrap();

        let domains = audit_files(&keywords, &serp, &output).unwrap();

        assert_eq!(domains.len(), 2);
        assert_eq!(domains[0].domain, "yandex.ru/maps");
        assert_eq!(domains[0].adjusted_volume, 40.0);
        assert_eq!(domains[1].domain, "2gis.ru");
        assert_eq!(domains[1].adjusted_volume, 23.0);

        let content = fs::read_to_string(&output).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("Domain,Adjusted Search Volume,Appearances,Current Script Category,Sample Titles,Sample Snippets")
        );
        assert_eq!(lines.next(), Some("yandex.ru/maps,40.0,1,commercial,Карты,"));
    }
}
