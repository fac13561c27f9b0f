use std::{future::Future, time::Duration};

use itertools::Itertools;

use crate::{
    configuration::Settings,
    dal::{load_keywords, SearchVolumeCsvStore},
    domain::{
        keyword::Keyword,
        search_volume::{error_rows, volume_rows, SearchVolumeResult},
    },
    errors::{ApiError, BatchError},
    services::{run_batches, BatchReport, ItemResult, SearchVolumeClient, MAX_PHRASES_PER_REQUEST},
};

/// Sends the keywords in batches to `check` and appends the answers to the
/// store. A non-fatal failure writes `ERROR` rows for the whole batch and
/// moves on; a fatal one stops the run.
pub async fn check_batches<F, Fut>(
    keywords: Vec<Keyword>,
    store: &mut SearchVolumeCsvStore,
    batch_size: usize,
    pause: Duration,
    check: F,
) -> Result<BatchReport, BatchError>
where
    F: Fn(Vec<String>) -> Fut,
    Fut: Future<Output = Result<Vec<SearchVolumeResult>, ApiError>>,
{
    let batch_size = batch_size.clamp(1, MAX_PHRASES_PER_REQUEST);

    run_batches(keywords, |k| k.query.trim().to_string(), store, batch_size, pause, |batch| {
        let phrases = batch.iter().map(|k| k.query.trim().to_string()).collect();
        let checked = check(phrases);
        async move {
            match checked.await {
                Ok(results) => Ok(ItemResult::Done(volume_rows(&batch, results))),
                Err(e) if e.is_fatal() => Err(e),
                Err(e) => {
                    log::error!("Search volume batch failed: {}", e);
                    Ok(ItemResult::Failed(error_rows(&batch)))
                }
            }
        }
    })
    .await
}

pub async fn check_search_volume(settings: &Settings) -> anyhow::Result<()> {
    let output = &settings.files.search_volume;
    let keywords: Vec<Keyword> = load_keywords(&settings.files.keywords)?
        .into_iter()
        .filter(|k| !k.query.trim().is_empty())
        .unique_by(|k| k.query.trim().to_string())
        .collect();

    let client = SearchVolumeClient::new(settings.search_volume.clone())?;
    let client = &client;
    let mut store = SearchVolumeCsvStore::new(output.clone());

    let report = check_batches(
        keywords,
        &mut store,
        settings.search_volume.batch_size,
        settings.search_volume.request_interval(),
        |phrases| async move { client.has_search_volume(&phrases).await },
    )
    .await?;

    log::info!(
        "Done! {} phrases checked ({} in failed batches), results in {}",
        report.already_done + report.completed,
        report.failed,
        output.display()
    );

    Ok(())
}
