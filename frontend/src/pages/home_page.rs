use common::episode_query::EpisodeQuery;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_image_icons::MdPalette;

use crate::routes::Route;


/// Landing page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Joy of Painting Episode Finder" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            div {
                style: "
                    display:flex;
                    align-items: center;
                    gap: 10px;
                    color: #0F172A;
                    font-size: 42px;
                    font-weight: 500;
                    letter-spacing: -0.02em;
                ",
                span { style: "color:#F3C14B;", Icon { icon: MdPalette, style: "width: 42px; height: 42px;" } }
                span { "The Joy of Painting" }
                span { style: "color:#4F46E5;", "Episode Finder" }
            }

            div {
                style: "
                    color: #111827;
                    font-size: 22px;
                    line-height: 1.6;
                    max-width: 620px;
                    font-weight: 400;
                ",
                "Browse every episode by the paint colors on the palette, the subjects on the canvas, and the month it first aired. Combine filters however you like."
            }

            FinderCard {}
        }
    }
}

#[component]
fn FinderCard() -> Element {
    rsx! {
        div {
            id: "x-card-episode-finder",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 520px;
                min-height: 200px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",

            div {
                style: "font-size: 26px; font-weight: 500;",
                "Faceted search"
            }

            div {
                style: "
                    font-size: 18px;
                    font-weight: 400;
                    line-height: 1.5;
                    color: rgba(255,255,255,0.92);
                ",
                "Pick any mix of colors, subjects and air-months. Match all groups at once, or any one of them."
            }

            div { style: "flex-grow: 1;" }

            Link {
                to: Route::finder_from_query(EpisodeQuery::default()),
                span {
                    style: "
                        display: inline-block;
                        background: white;
                        color: #2D208A;
                        border-radius: 9999px;
                        padding: 10px 22px;
                        font-size: 16px;
                        font-weight: 500;
                    ",
                    "Start exploring"
                }
            }
        }
    }
}
