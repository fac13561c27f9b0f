use std::path::Path;

use itertools::Itertools;

use crate::{
    configuration::Settings,
    dal::{load_keywords, load_serp_rows},
    domain::unknown_scan::{rank_by_exact_volume, scan_unknowns, select_range, UnknownScan},
};

pub const DEFAULT_START: usize = 301;
pub const DEFAULT_END: usize = 2000;

pub fn report_lines(scan: &UnknownScan) -> Vec<String> {
    let mut lines = vec!["Classification summary (top 5 positions):".to_string()];
    lines.extend(
        scan.category_counts
            .iter()
            .map(|(category, n)| format!("  {}: {}", category, n)),
    );

    lines.push(format!(
        "Known: {:.1}% ({}/{})",
        scan.known_share() * 100.0,
        scan.total() - scan.unknown(),
        scan.total()
    ));
    lines.push(format!(
        "Unknown domains ({} unique, {} total):",
        scan.unknown_domains.len(),
        scan.unknown()
    ));
    lines.extend(scan.unknown_domains.iter().map(|d| {
        let examples = d
            .examples
            .iter()
            .map(|(query, position)| format!("'{}' pos={}", query, position))
            .join(" | ");
        format!("  {} ({}x) - {}", d.domain, d.count, examples)
    }));

    lines
}

pub fn scan_files(
    keywords_path: &Path,
    serp_path: &Path,
    start: usize,
    end: usize,
) -> anyhow::Result<UnknownScan> {
    let ranked = rank_by_exact_volume(load_keywords(keywords_path)?);
    let selected = select_range(&ranked, start, end);

    log::info!("Keywords {}-{}: {} keywords", start, end, selected.len());
    if let (Some(top), Some(bottom)) = (selected.first(), selected.last()) {
        log::info!(
            "Top volume: {}, Bottom volume: {}",
            top.exact_volume.unwrap_or(0.0),
            bottom.exact_volume.unwrap_or(0.0)
        );
    }

    let rows = load_serp_rows(serp_path)?;
    Ok(scan_unknowns(selected, &rows))
}

pub async fn scan_unknown_domains(
    settings: &Settings,
    start: usize,
    end: usize,
) -> anyhow::Result<()> {
    let scan = scan_files(&settings.files.keywords, &settings.files.serp_results, start, end)?;
    for line in report_lines(&scan) {
        log::info!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{report_lines, scan_files};

    #[test]
    fn scans_selected_slice_only() {
        let dir = tempfile::tempdir().unwrap();
        let keywords = dir.path().join("keywords.csv");
        let serp = dir.path().join("serp.csv");

        fs::write(
            &keywords,
            "Search Query,Search Volume (Exact Match Type)\nпедикюр,5\nманикюр спб,100\nгель лак,50\n",
        )
        .unwrap();
        fs::write(
            &serp,
            "Search Query,Position,URL,Domain,Title\n\
             маникюр спб,1,https://2gis.ru/a,2gis.ru,\n\
             гель лак,2,https://nail-shop.example/x,nail-shop.example,\n\
             гель лак,3,https://nail-shop.example/y,nail-shop.example,\n\
             гель лак,,NO_RESULTS,,\n\
             педикюр,1,https://other.example/,other.example,\n",
        )
        .unwrap();

        // ranks: маникюр спб (1), гель лак (2), педикюр (3)
        let scan = scan_files(&keywords, &serp, 1, 2).unwrap();

        assert_eq!(scan.selected, 2);
        assert_eq!(scan.total(), 3);
        assert_eq!(scan.unknown(), 2);
        assert_eq!(scan.unknown_domains.len(), 1);
        assert_eq!(scan.unknown_domains[0].domain, "nail-shop.example");
        assert_eq!(
            scan.unknown_domains[0].examples,
            vec![("гель лак".to_string(), 2), ("гель лак".to_string(), 3)]
        );

        let lines = report_lines(&scan);
        assert!(lines.contains(&"Known: 33.3% (1/3)".to_string()));
        assert_eq!(
            lines.last().unwrap(),
            "  nail-shop.example (2x) - 'гель лак' pos=2 | 'гель лак' pos=3"
        );
    }
}
