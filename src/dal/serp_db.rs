use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::{
    dal::table::{append_rows, Table},
    domain::serp::{SerpRow, REQUIRED_SERP_COLUMNS, SERP_HEADERS},
    services::batch_job::CheckpointStore,
};

pub fn load_serp_rows(path: &Path) -> anyhow::Result<Vec<SerpRow>> {
    let table = Table::read(path)?;
    for column in REQUIRED_SERP_COLUMNS {
        table.require_column(column)?;
    }

    let rows = table.deserialize::<SerpRow>()?;
    log::info!(
        "Loaded {} SERP rows from {} ({} without results)",
        rows.len(),
        path.display(),
        rows.iter().filter(|r| r.is_sentinel()).count()
    );
    Ok(rows)
}

/// The SERP results file doubles as the checkpoint: every query that has at
/// least one row, sentinel rows included, counts as done.
pub struct SerpCsvStore {
    path: PathBuf,
}

impl SerpCsvStore {
    pub fn new(path: PathBuf) -> Self {
        SerpCsvStore { path }
    }
}

impl CheckpointStore<Vec<SerpRow>> for SerpCsvStore {
    fn completed_keys(&self) -> anyhow::Result<HashSet<String>> {
        if !self.path.exists() {
            return Ok(HashSet::new());
        }

        let rows = load_serp_rows(&self.path)?;
        Ok(rows
            .into_iter()
            .map(|r| r.query.trim().to_string())
            .filter(|q| !q.is_empty())
            .collect())
    }

    fn flush(&mut self, items: Vec<Vec<SerpRow>>) -> anyhow::Result<()> {
        append_rows(
            &self.path,
            &SERP_HEADERS,
            &REQUIRED_SERP_COLUMNS,
            items.iter().flatten().map(SerpRow::fields),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{load_serp_rows, SerpCsvStore};
    use crate::{
        domain::serp::{make_rows, SerpOutcome, SerpResult},
        services::batch_job::CheckpointStore,
    };

    fn result(position: u32, domain: &str) -> SerpResult {
        SerpResult {
            position,
            url: format!("https://{}/", domain),
            domain: domain.to_string(),
            title: format!("Маникюр на {}", domain),
            ..Default::default()
        }
    }

    #[test]
    fn appends_across_flushes_and_reports_completed_queries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("serp.csv");
        let mut store = SerpCsvStore::new(path.clone());

        assert!(store.completed_keys().unwrap().is_empty());

        store
            .flush(vec![make_rows(
                "маникюр спб",
                Some(100.0),
                Some("услуги".to_string()),
                SerpOutcome::Results(vec![result(1, "2gis.ru"), result(2, "avito.ru")]),
            )])
            .unwrap();
        store
            .flush(vec![
                make_rows("педикюр", None, None, SerpOutcome::NoResults),
                make_rows("гель лак", None, None, SerpOutcome::Failed("timeout".to_string())),
            ])
            .unwrap();

        let done = store.completed_keys().unwrap();
        assert_eq!(done.len(), 3);
        assert!(done.contains("гель лак"));

        let rows = load_serp_rows(&path).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].position, Some(1));
        assert_eq!(rows[0].volume, Some(100.0));
        assert_eq!(rows[2].url, "NO_RESULTS");
        assert_eq!(rows[2].position, None);
        assert_eq!(rows[3].url, "ERROR");
        assert_eq!(rows[3].title, "timeout");

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("Search Query").count(), 1);
    }

    #[test]
    fn appends_under_a_reordered_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("serp.csv");
        fs::write(
            &path,
            "Domain,URL,Position,Title,Search Query,Snippet\n\
             2gis.ru,https://2gis.ru/spb,1,2ГИС,маникюр спб,\n",
        )
        .unwrap();
        let mut store = SerpCsvStore::new(path.clone());

        store
            .flush(vec![make_rows(
                "педикюр",
                Some(40.0),
                None,
                SerpOutcome::Results(vec![result(1, "zoon.ru")]),
            )])
            .unwrap();

        let rows = load_serp_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].query, "педикюр");
        assert_eq!(rows[1].url, "https://zoon.ru/");
        assert_eq!(rows[1].domain, "zoon.ru");
        assert_eq!(rows[1].position, Some(1));
        // the file has no volume column, so the volume is dropped
        assert_eq!(rows[1].volume, None);
        assert!(store.completed_keys().unwrap().contains("педикюр"));
    }

    #[test]
    fn refuses_to_append_without_query_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("serp.csv");
        fs::write(&path, "Keyword,Position,URL,Domain,Title\n").unwrap();
        let mut store = SerpCsvStore::new(path.clone());

        let err = store
            .flush(vec![make_rows("педикюр", None, None, SerpOutcome::NoResults)])
            .unwrap_err();

        assert!(err.to_string().contains("Search Query"));
    }
}
