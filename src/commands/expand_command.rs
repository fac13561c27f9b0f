use std::collections::HashMap;

use crate::{
    configuration::Settings,
    dal::{
        load_negative_keywords, load_seed_cache, save_seed_cache, write_expanded_keywords,
        ExpandProgressStore, SeedCache,
    },
    domain::negative_keywords::{merge_max, NegativeKeywords},
    services::{run_resumable, BatchJobConfig, ItemResult, WordstatClient, WordstatPhrase},
};

/// Drops negative phrases and folds duplicates, keeping the highest volume.
pub fn keep_phrases(
    phrases: Vec<WordstatPhrase>,
    negatives: &NegativeKeywords,
) -> Vec<(String, u64)> {
    let mut kept: Vec<(String, u64)> = vec![];

    for phrase in phrases {
        let text = phrase.text.trim().to_lowercase();
        if text.is_empty() || negatives.matches(&text) {
            continue;
        }
        match kept.iter_mut().find(|(t, _)| *t == text) {
            Some(existing) => existing.1 = existing.1.max(phrase.value),
            None => kept.push((text, phrase.value)),
        }
    }

    kept
}

async fn seed_phrases(
    settings: &Settings,
    client: &WordstatClient,
    negatives: &NegativeKeywords,
) -> anyhow::Result<SeedCache> {
    let path = &settings.files.expand_seed_cache;
    if let Some(seeds) = load_seed_cache(path)? {
        log::info!("Loaded {} cached seed keywords", seeds.len());
        return Ok(seeds);
    }

    log::info!("Fetching seed: {}", settings.wordstat.seed);
    let phrases = client.popular_phrases(&settings.wordstat.seed).await?;
    log::info!("Seed returned {} keywords", phrases.len());

    let seeds = keep_phrases(phrases, negatives);
    save_seed_cache(path, &seeds)?;
    log::info!("After filtering: {} keywords to query deeper", seeds.len());

    Ok(seeds)
}

pub async fn expand(settings: &Settings) -> anyhow::Result<()> {
    let files = &settings.files;
    let negatives = load_negative_keywords(&files.negative_keywords)?;
    let client = WordstatClient::new(settings.wordstat.clone())?;

    let seeds = seed_phrases(settings, &client, &negatives).await?;

    let mut store = ExpandProgressStore::open(files.expand_progress.clone())?;
    let config = BatchJobConfig::new(settings.wordstat.workers, settings.wordstat.save_every);
    let client = &client;
    let negatives = &negatives;

    let report = run_resumable(
        seeds.clone(),
        |(seed, _)| seed.clone(),
        &mut store,
        config,
        |(seed, _)| async move {
            match client.popular_phrases(&seed).await {
                Ok(phrases) => {
                    let kept = keep_phrases(phrases, negatives);
                    Ok(ItemResult::Done((seed, kept)))
                }
                Err(e) if e.is_fatal() => Err(e),
                Err(e) => {
                    log::error!("Wordstat '{}' failed: {}", seed, e);
                    Ok(ItemResult::Failed((seed, vec![])))
                }
            }
        },
    )
    .await?;
    log::info!("Expansion finished with {} errors", report.failed);

    let mut results: HashMap<String, u64> = store.results().clone();
    for (seed, volume) in &seeds {
        merge_max(&mut results, seed, *volume);
    }

    write_expanded_keywords(&files.keywords, &results)?;
    log::info!(
        "Saved {} unique keywords to {}",
        results.len(),
        files.keywords.display()
    );

    Ok(())
}
