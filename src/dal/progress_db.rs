use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    dal::table::ensure_parent,
    domain::negative_keywords::merge_max,
    services::batch_job::CheckpointStore,
};

/// `None` when the file does not exist yet.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(Some(value))
}

/// Writes through a sibling temp file so an interrupted save never leaves a
/// truncated checkpoint behind.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    ensure_parent(path)?;
    let tmp = path.with_extension("json.tmp");
    let content = serde_json::to_string(value)?;

    fs::write(&tmp, content).with_context(|| format!("Failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}

/// Exact volumes by original query. `None` marks a batch that failed.
pub type ForecastProgress = BTreeMap<String, Option<u64>>;

pub fn load_forecast_progress(path: &Path) -> anyhow::Result<ForecastProgress> {
    Ok(load_json(path)?.unwrap_or_default())
}

pub fn save_forecast_progress(path: &Path, progress: &ForecastProgress) -> anyhow::Result<()> {
    save_json(path, progress)
}

/// Checkpoint for exact-volume fetching: one JSON map rewritten after every
/// batch.
pub struct ForecastProgressStore {
    path: PathBuf,
    progress: ForecastProgress,
}

impl ForecastProgressStore {
    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let progress = load_forecast_progress(&path)?;
        Ok(ForecastProgressStore { path, progress })
    }

    pub fn progress(&self) -> &ForecastProgress {
        &self.progress
    }
}

impl CheckpointStore<Vec<(String, Option<u64>)>> for ForecastProgressStore {
    fn completed_keys(&self) -> anyhow::Result<HashSet<String>> {
        Ok(self.progress.keys().cloned().collect())
    }

    fn flush(&mut self, items: Vec<Vec<(String, Option<u64>)>>) -> anyhow::Result<()> {
        self.progress.extend(items.into_iter().flatten());
        save_forecast_progress(&self.path, &self.progress)
    }
}

/// Seed phrases kept after negative filtering, with their volumes.
pub type SeedCache = Vec<(String, u64)>;

pub fn load_seed_cache(path: &Path) -> anyhow::Result<Option<SeedCache>> {
    load_json(path)
}

pub fn save_seed_cache(path: &Path, seeds: &SeedCache) -> anyhow::Result<()> {
    save_json(path, seeds)
}

#[derive(Serialize, Deserialize, Default, Debug)]
struct ExpandProgress {
    done: BTreeSet<String>,
    results: HashMap<String, u64>,
}

/// Checkpoint for keyword expansion: which seed phrases were expanded and the
/// merged phrase volumes found so far.
pub struct ExpandProgressStore {
    path: PathBuf,
    progress: ExpandProgress,
}

impl ExpandProgressStore {
    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let progress = load_json(&path)?.unwrap_or_default();
        Ok(ExpandProgressStore { path, progress })
    }

    pub fn results(&self) -> &HashMap<String, u64> {
        &self.progress.results
    }
}

impl CheckpointStore<(String, Vec<(String, u64)>)> for ExpandProgressStore {
    fn completed_keys(&self) -> anyhow::Result<HashSet<String>> {
        Ok(self.progress.done.iter().cloned().collect())
    }

    fn flush(&mut self, items: Vec<(String, Vec<(String, u64)>)>) -> anyhow::Result<()> {
        for (seed, phrases) in items {
            for (phrase, volume) in phrases {
                merge_max(&mut self.progress.results, &phrase, volume);
            }
            self.progress.done.insert(seed);
        }
        save_json(&self.path, &self.progress)
    }
}
