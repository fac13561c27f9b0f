use std::{collections::HashMap, fs, io::ErrorKind, path::Path};

use anyhow::Context;
use serde::Serialize;

use crate::{
    dal::table::{write_records, Table},
    domain::{
        keyword::{Keyword, QUERY_COLUMN},
        negative_keywords::NegativeKeywords,
    },
};

pub fn load_keywords(path: &Path) -> anyhow::Result<Vec<Keyword>> {
    let table = Table::read(path)?;
    table.require_column(QUERY_COLUMN)?;

    let keywords: Vec<Keyword> = table
        .deserialize::<Keyword>()?
        .into_iter()
        .filter(|k| !k.query.trim().is_empty())
        .collect();

    log::info!("Loaded {} keywords from {}", keywords.len(), path.display());
    Ok(keywords)
}

/// Writes one value per keyword into `column`, keyed by normalized query.
/// Rows without a value keep what they had.
pub fn write_keyword_column(
    path: &Path,
    column: &str,
    values: &HashMap<String, String>,
) -> anyhow::Result<usize> {
    let mut table = Table::read(path)?;
    let updated = table.upsert_column(column, QUERY_COLUMN, values)?;
    table.write(path)?;

    log::info!(
        "Updated '{}' for {} of {} rows in {}",
        column,
        updated,
        table.len(),
        path.display()
    );
    Ok(updated)
}

/// One phrase per line. A missing file means no negatives.
pub fn load_negative_keywords(path: &Path) -> anyhow::Result<NegativeKeywords> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let negatives = NegativeKeywords::new(content.lines());
            log::info!("Loaded {} negative keywords", negatives.len());
            Ok(negatives)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!(
                "Negative keywords file {} not found, nothing will be filtered",
                path.display()
            );
            Ok(NegativeKeywords::default())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}

#[derive(Serialize)]
struct ExpandedRow<'a> {
    #[serde(rename = "Search Query")]
    query: &'a str,
    #[serde(rename = "Search Volume")]
    volume: u64,
}

/// Writes expanded phrases, highest volume first.
pub fn write_expanded_keywords(path: &Path, phrases: &HashMap<String, u64>) -> anyhow::Result<()> {
    let mut sorted: Vec<(&String, &u64)> = phrases.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    let rows: Vec<ExpandedRow> = sorted
        .into_iter()
        .map(|(query, volume)| ExpandedRow {
            query,
            volume: *volume,
        })
        .collect();

    write_records(path, &rows)
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, fs};

    use super::{
        load_keywords, load_negative_keywords, write_expanded_keywords, write_keyword_column,
    };

    #[test]
    fn loads_keywords_with_optional_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keywords.csv");
        fs::write(
            &path,
            "Hub,Search Query,Search Volume (Exact Match Type)\nманикюр (главная),маникюр спб,120\n,  ,\n,педикюр,\n",
        )
        .unwrap();

        let keywords = load_keywords(&path).unwrap();

        assert_eq!(keywords.len(), 2);
        assert_eq!(keywords[0].exact_volume, Some(120.0));
        assert_eq!(keywords[0].hub.as_deref(), Some("маникюр (главная)"));
        assert_eq!(keywords[0].volume, None);
        assert_eq!(keywords[1].exact_volume, None);
    }

    #[test]
    fn keyword_table_without_query_column_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keywords.csv");
        fs::write(&path, "Query,Search Volume\nманикюр,10\n").unwrap();

        assert!(load_keywords(&path).is_err());
    }

    #[test]
    fn column_write_keeps_other_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keywords.csv");
        fs::write(&path, "Search Query,Search Volume\nманикюр,10\nпедикюр,5\n").unwrap();

        let values = HashMap::from([("педикюр".to_string(), "0.5".to_string())]);
        let updated = write_keyword_column(&path, "Commercialization Level", &values).unwrap();

        assert_eq!(updated, 1);
        let keywords = load_keywords(&path).unwrap();
        assert_eq!(keywords[0].commercialization, None);
        assert_eq!(keywords[1].commercialization, Some(0.5));
        assert_eq!(keywords[1].volume, Some(5.0));
    }

    #[test]
    fn missing_negatives_file_filters_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let negatives = load_negative_keywords(&dir.path().join("nope.txt")).unwrap();
        assert!(negatives.is_empty());

        let path = dir.path().join("neg.txt");
        fs::write(&path, "фото\nсвоими руками\n\n").unwrap();
        let negatives = load_negative_keywords(&path).unwrap();
        assert_eq!(negatives.len(), 2);
        assert!(negatives.matches("маникюр фото"));
    }

    #[test]
    fn expanded_keywords_sorted_by_volume() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/expanded.csv");
        let phrases = HashMap::from([
            ("маникюр".to_string(), 5u64),
            ("маникюр спб".to_string(), 50),
        ]);

        write_expanded_keywords(&path, &phrases).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Search Query,Search Volume\nманикюр спб,50\nманикюр,5\n"
        );
    }
}
