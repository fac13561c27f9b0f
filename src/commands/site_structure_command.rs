use std::path::Path;

use crate::{
    configuration::{Settings, SiteSettings},
    dal::{load_keywords, write_records},
    domain::{
        keyword::Keyword,
        site_structure::{assemble_site_structure, HubKeyword, PageRow},
    },
};

/// Keywords that carry a hub label and are commercial enough for a page.
/// Exact volume wins over base volume when both are present.
pub fn hub_keywords(keywords: Vec<Keyword>, min_commercialization: f64) -> Vec<HubKeyword> {
    keywords
        .into_iter()
        .filter(|k| {
            k.commercialization
                .map_or(true, |level| level >= min_commercialization)
        })
        .filter_map(|k| {
            let hub = k.hub.as_deref().map(str::trim).filter(|h| !h.is_empty())?.to_string();
            let volume = k.exact_volume.or(k.volume).unwrap_or(0.0);

            Some(HubKeyword {
                query: k.query.trim().to_string(),
                volume,
                hub,
            })
        })
        .collect()
}

pub fn build_site_structure(
    keywords_path: &Path,
    output: &Path,
    site: &SiteSettings,
) -> anyhow::Result<Vec<PageRow>> {
    let keywords = hub_keywords(load_keywords(keywords_path)?, site.min_commercialization);
    log::info!("{} keywords carry a hub label", keywords.len());

    let pages = assemble_site_structure(keywords, site);
    let total: f64 = pages.iter().map(|p| p.combined_volume).sum();
    log::info!("Built {} pages, {} combined search volume", pages.len(), total);

    write_records(output, &pages)?;
    log::info!("Saved site structure to {}", output.display());

    Ok(pages)
}

pub async fn site_structure(settings: &Settings) -> anyhow::Result<()> {
    build_site_structure(
        &settings.files.keywords,
        &settings.files.site_structure,
        &settings.site,
    )?;
    Ok(())
}
