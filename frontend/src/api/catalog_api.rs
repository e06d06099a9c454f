//! Client API calls against the episode catalog service.

use anyhow::Context;
use common::api_const::{API_BASE_URL, EPISODES_PATH, FILTERS_PATH};
use common::episode::EpisodeSearchResult;
use common::episode_query::EpisodeQuery;
use common::facet_catalog::FacetCatalog;


/// Fetch the facet metadata snapshot. Called once at startup; a failure here is
/// recovered by the caller (the UI keeps empty facet lists).
pub async fn fetch_facet_catalog() -> anyhow::Result<FacetCatalog> {
    let url = format!("{API_BASE_URL}{FILTERS_PATH}");
    let catalog = reqwest::Client::new()
        .get(&url)
        .send()
        .await
        .context("facet catalog request failed")?
        .error_for_status()
        .context("facet catalog request rejected")?
        .json::<FacetCatalog>()
        .await
        .context("facet catalog response was not valid JSON")?;
    Ok(catalog)
}

/// Run one episode search for the given selection. The query string carries one
/// repeated parameter per selected value plus the mandatory `filter_type`.
pub async fn search_episodes(query: &EpisodeQuery) -> anyhow::Result<EpisodeSearchResult> {
    let url = format!("{API_BASE_URL}{EPISODES_PATH}");
    let result = reqwest::Client::new()
        .get(&url)
        .query(&query.to_query_pairs())
        .send()
        .await
        .context("episode search request failed")?
        .error_for_status()
        .context("episode search request rejected")?
        .json::<EpisodeSearchResult>()
        .await
        .context("episode search response was not valid JSON")?;
    Ok(result)
}
