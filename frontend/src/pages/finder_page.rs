//! Finder page: facet selection on top, episode results below.
//!
//! The submitted query lives in the route; the panels edit a working copy and
//! the Search button navigates, which restarts the episode resource. Stale
//! searches are dropped on restart, so the rendered result always belongs to
//! the most recently submitted query.

use common::episode::EpisodeSearchResult;
use common::episode_query::EpisodeQuery;
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::api::catalog_api::search_episodes;
use crate::components::episode_components::episode_result_list::EpisodeResultList;
use crate::components::filter_components::combinator_select::CombinatorSelect;
use crate::components::filter_components::facet_tab_strip::FacetTabStrip;
use crate::components::suspend_boundary::{LoadingIndicator, SuspendWrapper};
use crate::data_definitions::route_query::RouteQuery;
use crate::routes::Route;


#[component]
pub fn FinderPage(query: RouteQuery<EpisodeQuery>) -> Element {
    rsx! {
        Title { "Episode Finder" }
        SuspendWrapper {
            FinderRootComponent { query: query.0.clone() }
        }
    }
}

#[component]
fn FinderRootComponent(query: ReadSignal<EpisodeQuery>) -> Element {
    // working selection, edited by the toggle panels. Navigation does not
    // remount this component, so re-sync whenever the routed query changes.
    let mut selection = use_signal(|| query.read().clone());
    use_effect(move || {
        let submitted = query.read().clone();
        selection.set(submitted);
    });

    let mut search = use_resource(move || {
        let q = query.read().clone();
        async move { search_episodes(&q).await }
    });
    // restarting drops the in-flight request for the previous query
    use_effect(move || {
        let _ = query.read();
        search.clear();
        search.restart();
    });

    // the last completed result survives a failed search, per the recovery
    // rule that a search error never clears what is already on screen
    let mut last_result = use_signal(|| None::<EpisodeSearchResult>);
    use_effect(move || {
        if let Some(Ok(result)) = search.read().as_ref() {
            last_result.set(Some(result.clone()));
        }
    });
    use_effect(move || {
        if let Some(Err(e)) = search.read().as_ref() {
            tracing::error!("episode search failed, keeping previous results: {e:#}");
        }
    });

    let busy = use_memo(move || search.read().is_none());
    let search_failed = use_memo(move || matches!(search.read().as_ref(), Some(Err(_))));
    // with no groups selected the query still runs and returns the full catalog
    let unfiltered = use_memo(move || query.read().is_empty());

    let trigger_search = Callback::new(move |_: ()| {
        navigator().push(Route::finder_from_query(selection.peek().clone()));
    });

    rsx! {
        div {
            id: "x-finder-page-root",
            style: "
                display: flex;
                flex-direction: column;
                gap: 24px;
                padding: 24px 32px;
                max-width: 1100px;
                margin: 0 auto;
                box-sizing: border-box;
            ",

            h1 {
                style: "margin: 0; font-size: 28px; font-weight: 600; color: #0F172A;",
                "Find episodes"
            }

            if unfiltered() {
                div {
                    style: "font-size: 14px; color: #6B7280;",
                    "No filters selected - showing every episode."
                }
            }

            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                    background: white;
                    border-radius: 12px;
                    padding: 20px;
                    box-shadow: 0 6px 16px rgba(0,0,0,0.06);
                ",
                CombinatorSelect { selection }
                FacetTabStrip { selection }
                SearchButton { busy: ReadSignal::from(busy), trigger_search }
            }

            if search_failed() {
                div {
                    style: "
                        color: #991B1B;
                        background-color: #FEE2E2;
                        border: 1px solid #F87171;
                        border-radius: 6px;
                        padding: 10px 14px;
                        font-size: 14px;
                    ",
                    "The search could not be completed. Showing the previous results."
                }
            }

            {match last_result.read().clone() {
                Some(result) => rsx! { EpisodeResultList { result } },
                None if busy() => rsx! { LoadingIndicator {} },
                None => rsx! {},
            }}
        }
    }
}

#[component]
fn SearchButton(busy: ReadSignal<bool>, trigger_search: Callback<()>) -> Element {
    let background = use_memo(move || if busy.read().clone() { "#9CA3AF" } else { "#4F46E5" });
    let cursor = use_memo(move || if busy.read().clone() { "not-allowed" } else { "pointer" });

    rsx! {
        button {
            style: "
                width: 100%;
                border: none;
                border-radius: 8px;
                padding: 12px;
                font-size: 15px;
                font-weight: 500;
                color: white;
                background-color: {background()};
                cursor: {cursor()};
            ",
            disabled: busy(),
            onclick: move |_| {
                trigger_search(());
            },
            if busy() { "Searching..." } else { "Search episodes" }
        }
    }
}
