use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::{
    dal::table::{append_rows, Table},
    domain::{
        keyword::QUERY_COLUMN,
        search_volume::{SearchVolumeRow, SEARCH_VOLUME_HEADERS},
    },
    services::batch_job::CheckpointStore,
};

pub fn load_search_volume_rows(path: &Path) -> anyhow::Result<Vec<SearchVolumeRow>> {
    let table = Table::read(path)?;
    table.require_column(QUERY_COLUMN)?;
    table.deserialize()
}

/// Appends each batch to the search volume table. Any phrase already in the
/// table, error rows included, counts as done.
pub struct SearchVolumeCsvStore {
    path: PathBuf,
}

impl SearchVolumeCsvStore {
    pub fn new(path: PathBuf) -> Self {
        SearchVolumeCsvStore { path }
    }
}

impl CheckpointStore<Vec<SearchVolumeRow>> for SearchVolumeCsvStore {
    fn completed_keys(&self) -> anyhow::Result<HashSet<String>> {
        if !self.path.exists() {
            return Ok(HashSet::new());
        }

        Ok(load_search_volume_rows(&self.path)?
            .into_iter()
            .map(|r| r.query.trim().to_string())
            .filter(|q| !q.is_empty())
            .collect())
    }

    fn flush(&mut self, items: Vec<Vec<SearchVolumeRow>>) -> anyhow::Result<()> {
        append_rows(
            &self.path,
            &SEARCH_VOLUME_HEADERS,
            &[QUERY_COLUMN],
            items.iter().flatten().map(SearchVolumeRow::fields),
        )
    }
}
