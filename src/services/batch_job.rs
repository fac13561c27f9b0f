//! Resumable runs over independent network calls.
//!
//! Items whose key is already in the checkpoint are skipped. `run_resumable`
//! fans single items out to concurrent workers, buffers what they finish and
//! flushes it every `flush_every` completions, and once more at the end.
//! `run_batches` sends items in fixed-size batches one request at a time and
//! flushes after every batch. In both a fatal worker error stops the run
//! after everything finished so far has been flushed.

use std::{
    collections::HashSet,
    future::Future,
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use futures::{stream, TryStreamExt};
use itertools::Itertools;
use tokio::sync::Mutex;

use crate::errors::{ApiError, BatchError};

/// Where finished items go so an interrupted run can pick up again.
pub trait CheckpointStore<T> {
    fn completed_keys(&self) -> anyhow::Result<HashSet<String>>;
    fn flush(&mut self, items: Vec<T>) -> anyhow::Result<()>;
}

/// What a worker hands back for one item. `Failed` still carries the sentinel
/// output that gets written for that item.
pub enum ItemResult<T> {
    Done(T),
    Failed(T),
}

#[derive(Debug, Clone, Copy)]
pub struct BatchJobConfig {
    pub workers: usize,
    pub flush_every: usize,
    pub progress_every: usize,
}

impl BatchJobConfig {
    pub fn new(workers: usize, flush_every: usize) -> Self {
        BatchJobConfig {
            workers: workers.max(1),
            flush_every: flush_every.max(1),
            progress_every: 10,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct BatchReport {
    pub total: usize,
    pub already_done: usize,
    pub completed: usize,
    pub failed: usize,
}

struct JobState<'s, T, S> {
    buffer: Vec<T>,
    failed: usize,
    store: &'s mut S,
}

impl<T, S: CheckpointStore<T>> JobState<'_, T, S> {
    fn flush(&mut self) -> Result<(), BatchError> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let items = std::mem::take(&mut self.buffer);
        self.store.flush(items).map_err(BatchError::Checkpoint)
    }
}

pub async fn run_resumable<I, T, S, K, F, Fut>(
    items: Vec<I>,
    key: K,
    store: &mut S,
    config: BatchJobConfig,
    worker: F,
) -> Result<BatchReport, BatchError>
where
    S: CheckpointStore<T>,
    K: Fn(&I) -> String,
    F: Fn(I) -> Fut,
    Fut: Future<Output = Result<ItemResult<T>, ApiError>>,
{
    let done = store.completed_keys().map_err(BatchError::Checkpoint)?;
    let total = items.len();
    let remaining: Vec<I> = items
        .into_iter()
        .filter(|item| !done.contains(&key(item)))
        .collect();
    let already_done = total - remaining.len();
    let to_run = remaining.len();

    log::info!(
        "Already completed: {} | Remaining: {} | Workers: {}",
        already_done,
        to_run,
        config.workers
    );

    let state = Mutex::new(JobState {
        buffer: Vec::new(),
        failed: 0,
        store,
    });
    let completed = AtomicUsize::new(0);

    let state_ref = &state;
    let completed_ref = &completed;
    let worker_ref = &worker;

    let outcome = stream::iter(remaining.into_iter().map(Ok::<I, BatchError>))
        .try_for_each_concurrent(config.workers, |item| async move {
            let (output, is_failure) = match worker_ref(item).await {
                Ok(ItemResult::Done(output)) => (output, false),
                Ok(ItemResult::Failed(output)) => (output, true),
                Err(e) => return Err(BatchError::Fatal(e)),
            };

            let mut state = state_ref.lock().await;
            state.buffer.push(output);
            if is_failure {
                state.failed += 1;
            }
            let n = completed_ref.fetch_add(1, Ordering::SeqCst) + 1;

            if n % config.progress_every == 0 || n == to_run {
                let total_done = already_done + n;
                log::info!(
                    "[{}/{}] ({:.1}%) +{} done, {} errors",
                    total_done,
                    total,
                    total_done as f64 / total.max(1) as f64 * 100.0,
                    n,
                    state.failed
                );
            }

            if n % config.flush_every == 0 {
                state.flush()?;
                log::info!("Checkpoint saved ({} items total)", already_done + n);
            }

            Ok(())
        })
        .await;

    let mut state = state.into_inner();
    let flushed = state.flush();

    // A fatal error wins over a flush error when reporting.
    outcome?;
    flushed?;

    Ok(BatchReport {
        total,
        already_done,
        completed: completed.into_inner(),
        failed: state.failed,
    })
}

/// Batches are sent one after another with `pause` between requests. A
/// `Failed` batch counts every item in it as failed.
pub async fn run_batches<I, T, S, K, F, Fut>(
    items: Vec<I>,
    key: K,
    store: &mut S,
    batch_size: usize,
    pause: Duration,
    worker: F,
) -> Result<BatchReport, BatchError>
where
    S: CheckpointStore<T>,
    K: Fn(&I) -> String,
    F: Fn(Vec<I>) -> Fut,
    Fut: Future<Output = Result<ItemResult<T>, ApiError>>,
{
    let done = store.completed_keys().map_err(BatchError::Checkpoint)?;
    let total = items.len();
    let remaining: Vec<I> = items
        .into_iter()
        .filter(|item| !done.contains(&key(item)))
        .collect();
    let already_done = total - remaining.len();

    let chunks = remaining.into_iter().chunks(batch_size.max(1));
    let batches: Vec<Vec<I>> = chunks.into_iter().map(|chunk| chunk.collect()).collect();
    log::info!(
        "Already completed: {} | Remaining: {} in {} batches",
        already_done,
        total - already_done,
        batches.len()
    );

    let batch_count = batches.len();
    let mut report = BatchReport {
        total,
        already_done,
        ..Default::default()
    };

    for (index, batch) in batches.into_iter().enumerate() {
        if index > 0 && !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }

        let size = batch.len();
        log::info!(
            "[{}/{}] ({:.1}%) {} items",
            index + 1,
            batch_count,
            (already_done + report.completed) as f64 / total.max(1) as f64 * 100.0,
            size
        );

        let output = match worker(batch).await {
            Ok(ItemResult::Done(output)) => output,
            Ok(ItemResult::Failed(output)) => {
                log::error!("Batch {} failed, its items are marked as errors", index + 1);
                report.failed += size;
                output
            }
            Err(e) => return Err(BatchError::Fatal(e)),
        };

        store.flush(vec![output]).map_err(BatchError::Checkpoint)?;
        report.completed += size;
    }

    Ok(report)
}
