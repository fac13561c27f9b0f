use std::{collections::HashMap, future::Future, time::Duration};

use itertools::Itertools;

use crate::{
    configuration::Settings,
    dal::{load_keywords, write_keyword_column, ForecastProgress, ForecastProgressStore},
    domain::keyword::{normalize_phrase, to_exact_match, EXACT_VOLUME_COLUMN},
    errors::{ApiError, BatchError},
    services::{match_forecast_phrases, run_batches, BatchReport, ForecastClient, ItemResult},
};

/// Runs one forecast report for a batch. `Ok(None)` when the report failed
/// or timed out on the server.
async fn forecast_batch(
    client: &ForecastClient,
    batch: &[String],
) -> Result<Option<HashMap<String, u64>>, ApiError> {
    let sent: Vec<(String, String)> = batch
        .iter()
        .map(|q| (to_exact_match(q), q.clone()))
        .collect();
    let phrases: Vec<String> = sent.iter().map(|(exact, _)| exact.clone()).collect();

    let forecast_id = client.create_forecast(&phrases).await?;

    if !client.wait_for_forecast(forecast_id).await? {
        delete_quietly(client, forecast_id).await?;
        return Ok(None);
    }

    let result = client.get_forecast(forecast_id).await;
    delete_quietly(client, forecast_id).await?;

    Ok(Some(match_forecast_phrases(&sent, &result?)))
}

async fn delete_quietly(client: &ForecastClient, forecast_id: u64) -> Result<(), ApiError> {
    match client.delete_forecast(forecast_id).await {
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            log::warn!("Could not delete forecast {}: {}", forecast_id, e);
            Ok(())
        }
        Ok(()) => Ok(()),
    }
}

/// Progress values keyed the way the keyword table is matched. Failed
/// batches become an empty cell.
pub fn progress_to_column(progress: &ForecastProgress) -> HashMap<String, String> {
    progress
        .iter()
        .map(|(query, shows)| {
            let value = shows.map(|s| s.to_string()).unwrap_or_default();
            (normalize_phrase(query), value)
        })
        .collect()
}

/// Runs `fetch` over the queries in batches and records every query in the
/// progress store. A batch whose report failed or hit a non-fatal error
/// leaves `None` for all of its queries; a fatal error stops the run with
/// every earlier batch already saved.
pub async fn forecast_batches<F, Fut>(
    queries: Vec<String>,
    store: &mut ForecastProgressStore,
    batch_size: usize,
    fetch: F,
) -> Result<BatchReport, BatchError>
where
    F: Fn(Vec<String>) -> Fut,
    Fut: Future<Output = Result<Option<HashMap<String, u64>>, ApiError>>,
{
    run_batches(queries, |q| q.clone(), store, batch_size, Duration::ZERO, |batch| {
        let fetched = fetch(batch.clone());
        async move {
            let volumes = match fetched.await {
                Ok(volumes) => volumes,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    log::error!("Forecast batch failed: {}", e);
                    None
                }
            };

            let rows: Vec<(String, Option<u64>)> = batch
                .into_iter()
                .map(|q| {
                    let shows = volumes.as_ref().and_then(|v| v.get(&q).copied());
                    (q, shows)
                })
                .collect();

            Ok(match volumes {
                Some(_) => ItemResult::Done(rows),
                None => ItemResult::Failed(rows),
            })
        }
    })
    .await
}

pub async fn fetch_forecast(settings: &Settings) -> anyhow::Result<()> {
    let files = &settings.files;
    let queries: Vec<String> = load_keywords(&files.keywords)?
        .iter()
        .map(|k| k.query.trim().to_string())
        .unique()
        .collect();

    let mut store = ForecastProgressStore::open(files.forecast_progress.clone())?;
    let client = ForecastClient::new(settings.forecast.clone())?;
    let client = &client;

    forecast_batches(queries, &mut store, settings.forecast.batch_size, |batch| async move {
        forecast_batch(client, &batch).await
    })
    .await?;

    let errors = store.progress().values().filter(|v| v.is_none()).count();
    log::info!("All batches done, {} keywords without volume", errors);

    let column = progress_to_column(store.progress());
    write_keyword_column(&files.keywords, EXACT_VOLUME_COLUMN, &column)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Mutex};

    use super::{forecast_batches, progress_to_column};
    use crate::{
        dal::{load_forecast_progress, ForecastProgress, ForecastProgressStore},
        errors::{ApiError, BatchError},
    };

    fn queries(names: &[&str]) -> Vec<String> {
        names.iter().map(|q| q.to_string()).collect()
    }

    #[tokio::test]
    async fn each_batch_outcome_is_saved_before_the_next() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("forecast_progress.json");
        let mut store = ForecastProgressStore::open(path.clone()).unwrap();
        let sent = &Mutex::new(vec![]);

        let result = forecast_batches(
            queries(&[
                "маникюр",
                "педикюр",
                "гель лак",
                "наращивание",
                "френч",
                "шеллак",
                "дизайн",
            ]),
            &mut store,
            2,
            move |batch| async move {
                sent.lock().unwrap().push(batch.clone());
                match batch[0].as_str() {
                    // only the first phrase comes back, the second gets nothing
                    "маникюр" => Ok(Some(HashMap::from([("маникюр".to_string(), 120)]))),
                    "гель лак" => Ok(None),
                    "френч" => Err(ApiError::Transient("502".to_string())),
                    _ => Err(ApiError::Unauthorized {
                        code: 1000,
                        message: "token expired".to_string(),
                    }),
                }
            },
        )
        .await;

        assert!(matches!(result, Err(BatchError::Fatal(_))));
        assert_eq!(sent.lock().unwrap().len(), 4);

        let saved = load_forecast_progress(&path).unwrap();
        assert_eq!(saved.len(), 6);
        assert_eq!(saved["маникюр"], Some(120));
        assert_eq!(saved["педикюр"], None);
        assert_eq!(saved["гель лак"], None);
        assert_eq!(saved["наращивание"], None);
        assert_eq!(saved["френч"], None);
        assert_eq!(saved["шеллак"], None);
        assert!(!saved.contains_key("дизайн"));
    }

    #[tokio::test]
    async fn resumed_run_only_sends_unsaved_queries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("forecast_progress.json");

        let mut store = ForecastProgressStore::open(path.clone()).unwrap();
        forecast_batches(queries(&["маникюр"]), &mut store, 10, |_| async {
            Ok(Some(HashMap::from([("маникюр".to_string(), 120)])))
        })
        .await
        .unwrap();

        let mut store = ForecastProgressStore::open(path.clone()).unwrap();
        let sent = &Mutex::new(vec![]);
        let report = forecast_batches(
            queries(&["маникюр", "педикюр"]),
            &mut store,
            10,
            move |batch| async move {
                sent.lock().unwrap().push(batch);
                Ok(Some(HashMap::from([("педикюр".to_string(), 40)])))
            },
        )
        .await
        .unwrap();

        assert_eq!(report.already_done, 1);
        assert_eq!(*sent.lock().unwrap(), vec![queries(&["педикюр"])]);
        assert_eq!(store.progress()["маникюр"], Some(120));
        assert_eq!(store.progress()["педикюр"], Some(40));
    }

    #[test]
    fn failed_batches_become_empty_cells() {
        let mut progress = ForecastProgress::new();
        progress.insert("Маникюр СПб".to_string(), Some(120));
        progress.insert("педикюр".to_string(), None);
        progress.insert("гель лак".to_string(), Some(0));

        let column = progress_to_column(&progress);

        assert_eq!(column["маникюр спб"], "120");
        assert_eq!(column["педикюр"], "");
        assert_eq!(column["гель лак"], "0");
    }
}
