use itertools::Itertools;

use crate::{
    configuration::Settings,
    dal::{load_keywords, SerpCsvStore},
    domain::serp::{make_rows, SerpOutcome},
    services::{run_resumable, BatchJobConfig, ItemResult, SerpClient},
};

pub async fn fetch_serp(settings: &Settings) -> anyhow::Result<()> {
    let keywords: Vec<_> = load_keywords(&settings.files.keywords)?
        .into_iter()
        .unique_by(|k| k.query.trim().to_string())
        .collect();

    let client = SerpClient::new(settings.serp.clone())?;
    let client = &client;
    let mut store = SerpCsvStore::new(settings.files.serp_results.clone());
    let config = BatchJobConfig::new(settings.serp.workers, settings.serp.save_every);

    let report = run_resumable(
        keywords,
        |k| k.query.trim().to_string(),
        &mut store,
        config,
        |keyword| async move {
            let query = keyword.query.trim();
            let outcome = match client.fetch(query).await {
                Ok(outcome) => outcome,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    log::error!("SERP '{}' failed: {}", query, e);
                    SerpOutcome::Failed(e.to_string())
                }
            };

            let failed = matches!(outcome, SerpOutcome::Failed(_));
            let rows = make_rows(query, keyword.volume, keyword.category.clone(), outcome);

            Ok(match failed {
                true => ItemResult::Failed(rows),
                false => ItemResult::Done(rows),
            })
        },
    )
    .await?;

    log::info!(
        "Done! {} queries total ({} errors) in {}",
        report.already_done + report.completed,
        report.failed,
        settings.files.serp_results.display()
    );

    Ok(())
}
