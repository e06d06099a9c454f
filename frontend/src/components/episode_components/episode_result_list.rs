//! Search result grid.

use common::episode::EpisodeSearchResult;
use dioxus::prelude::*;

use crate::components::episode_components::episode_card::EpisodeCard;


#[component]
pub fn EpisodeResultList(result: ReadSignal<EpisodeSearchResult>) -> Element {
    let episodes = result.read().episodes.clone();

    if episodes.is_empty() {
        return rsx! {
            div {
                style: "color: #6B7280; font-size: 16px; padding: 24px; text-align: center;",
                "No episodes match the current filters."
            }
        };
    }

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                justify-content: space-between;
                align-items: baseline;
            ",
            h2 {
                style: "margin: 0; font-size: 16px; font-weight: 600; color: #111827;",
                "Episodes"
            }
            span {
                style: "font-size: 13px; color: #6B7280;",
                "{episodes.len()} found"
            }
        }
        div {
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                gap: 16px;
                margin-top: 12px;
            ",
            for episode in episodes {
                EpisodeCard {
                    key: "{episode.episode_id}",
                    episode: episode.clone(),
                }
            }
        }
    }
}
