//! Single-shot facet catalog cache, shared through context.

use common::facet_catalog::FacetCatalog;
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::api::catalog_api::fetch_facet_catalog;


/// Read-only handle to the facet metadata snapshot. `catalog` stays `None`
/// while the load is in flight and after a failed load, so every consumer has
/// to render sensibly with empty facet lists.
#[derive(Clone, Copy)]
pub struct FacetCatalogCache {
    pub catalog: ReadSignal<Option<FacetCatalog>>,
    pub load_failed: ReadSignal<bool>,
}

/// Kick off the one catalog load and provide the cache to all child
/// components. Must be called from a layout component that outlives the pages.
pub fn provide_facet_catalog_cache() -> FacetCatalogCache {
    let load = use_resource(move || fetch_facet_catalog());

    let catalog = use_memo(move || match load.read().as_ref() {
        Some(Ok(catalog)) => Some(catalog.clone()),
        Some(Err(_)) | None => None,
    });
    let load_failed = use_memo(move || matches!(load.read().as_ref(), Some(Err(_))));

    // a failed load is recovered locally: log it and leave the facet lists empty
    use_effect(move || {
        if let Some(Err(e)) = load.read().as_ref() {
            tracing::error!("facet catalog load failed, facet lists stay empty: {e:#}");
        }
    });

    use_context_provider(move || FacetCatalogCache {
        catalog: catalog.into(),
        load_failed: load_failed.into(),
    })
}

pub fn use_facet_catalog_cache() -> FacetCatalogCache {
    use_context::<FacetCatalogCache>()
}
