//! One episode in the search result list.

use common::api_const::DEFAULT_SWATCH_HEX;
use common::episode::Episode;
use common::facet_catalog::resolve_display_colors;
use dioxus::prelude::*;

use crate::components::facet_catalog_cache::use_facet_catalog_cache;


#[component]
pub fn EpisodeCard(episode: ReadSignal<Episode>) -> Element {
    let facet_cache = use_facet_catalog_cache();
    let Episode {
        title,
        season,
        episode: episode_number,
        air_date,
        youtube_src,
        ..
    } = episode.read().clone();

    // raw color names come back from the service; the hex codes live in the
    // facet catalog and unknown names fall back to the neutral swatch
    let swatches = use_memo(move || {
        let catalog = facet_cache.catalog.read();
        resolve_display_colors(catalog.as_ref(), &episode.read())
            .into_iter()
            .map(|resolved| {
                let hex = resolved
                    .hex_code
                    .unwrap_or_else(|| DEFAULT_SWATCH_HEX.to_string());
                (resolved.name, hex)
            })
            .collect::<Vec<_>>()
    });

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                background: white;
                border: 1px solid rgba(0,0,0,0.08);
                border-radius: 10px;
                padding: 16px;
                box-shadow: 0 4px 10px rgba(0,0,0,0.06);
            ",

            h3 {
                style: "margin: 0; font-size: 18px; font-weight: 600; color: #111827;",
                "{title}"
            }

            {youtube_src.as_ref().map(|src| rsx! {
                iframe {
                    style: "width: 100%; aspect-ratio: 16 / 9; border: none; border-radius: 6px;",
                    src: "{src}",
                    title: "{title}",
                    allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                    allowfullscreen: true,
                }
            })}

            p {
                style: "margin: 0; font-size: 13px; color: #6B7280;",
                "{season} {episode_number} - {air_date}"
            }

            div {
                h4 {
                    style: "margin: 0 0 6px 0; font-size: 13px; font-weight: 500; color: #111827;",
                    "Colors"
                }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 6px;",
                    for (name, hex) in swatches() {
                        span {
                            key: "{name}",
                            title: "{name}",
                            style: "
                                display: inline-block;
                                width: 22px;
                                height: 22px;
                                border-radius: 50%;
                                border: 2px solid white;
                                box-shadow: 0 0 3px rgba(0,0,0,0.4);
                                background-color: {hex};
                            ",
                        }
                    }
                }
            }
        }
    }
}
