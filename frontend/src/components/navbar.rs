//! Sidebar navigation and shared layout.

use dioxus::prelude::*;

use common::episode_query::EpisodeQuery;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::facet_catalog_cache::provide_facet_catalog_cache;
use crate::routes::Route;

use dioxus_free_icons::icons::md_action_icons::{MdHome, MdSearch};
use dioxus_free_icons::icons::md_image_icons::MdPalette;
use dioxus_free_icons::{Icon, IconShape};


/// Shared layout: sidebar plus the routed page. The facet catalog cache is
/// provided here so it survives page navigation and loads only once.
#[component]
pub fn Navbar() -> Element {
    provide_facet_catalog_cache();

    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",

            div {
                id: "x-nav-sidebar",
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 40px;
                    width: 70px;
                    height: 100vh;
                    background-color: #1C212D;
                    padding: 16px;
                    box-sizing: border-box;
                ",

                Link {
                    to: Route::HomePage {},
                    span {
                        style: "color:#F3C14B;",
                        Icon { icon: MdPalette, style: "width: 38px; height: 38px;" }
                    }
                }

                div {
                    style: "
                        display:flex;
                        flex-direction: column;
                        gap: 24px;
                        width: 38px;
                        align-items: center;
                        justify-content: center;
                    ",
                    IconLink { to: Route::HomePage {}, icon: MdHome, label: "Home" }
                    IconLink { to: Route::finder_from_query(EpisodeQuery::default()), icon: MdSearch, label: "Find episodes" }
                }
            },

            div {
                id: "x-page-container",
                style: "flex-grow:1; min-width: 100px; height: 100vh; overflow-y: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                style: "color:white;",
                title: "{label}",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
