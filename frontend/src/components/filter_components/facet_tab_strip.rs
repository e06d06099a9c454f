//! Tabbed facet selection: colors, subjects and air-months as toggle grids.

use common::episode_query::EpisodeQuery;
use common::facet_catalog::{FacetColor, FacetMonth};
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdEvent;
use dioxus_free_icons::icons::md_image_icons::MdPalette;
use dioxus_free_icons::icons::md_navigation_icons::MdApps;
use dioxus_free_icons::{Icon, IconShape};

use crate::components::facet_catalog_cache::use_facet_catalog_cache;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FacetTab {
    Colors,
    Subjects,
    Months,
}

#[component]
pub fn FacetTabStrip(selection: Signal<EpisodeQuery>) -> Element {
    let mut active_tab = use_signal(|| FacetTab::Colors);
    let facet_cache = use_facet_catalog_cache();

    rsx! {
        div {
            id: "x-facet-tab-strip",
            style: "
                display: flex;
                flex-direction: column;
                gap: 14px;
                width: 100%;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    gap: 8px;
                    background-color: #E5E7EB;
                    border-radius: 10px;
                    padding: 6px;
                ",
                TabButton { active_tab, tab: FacetTab::Colors, label: "Colors", icon: MdPalette }
                TabButton { active_tab, tab: FacetTab::Subjects, label: "Subjects", icon: MdApps }
                TabButton { active_tab, tab: FacetTab::Months, label: "Months", icon: MdEvent }
            }

            if facet_cache.load_failed.read().clone() {
                div {
                    style: "
                        color: #92400E;
                        background-color: #FEF3C7;
                        border: 1px solid #F59E0B;
                        border-radius: 6px;
                        padding: 8px 12px;
                        font-size: 14px;
                    ",
                    "Filter options could not be loaded. Searching still works without them."
                }
            }

            if *active_tab.read() == FacetTab::Colors {
                ColorToggleGrid { selection }
            } else if *active_tab.read() == FacetTab::Subjects {
                SubjectToggleGrid { selection }
            } else {
                MonthToggleGrid { selection }
            }
        }
    }
}

#[component]
fn TabButton<I: IconShape + Clone + PartialEq + 'static>(
    active_tab: Signal<FacetTab>,
    tab: FacetTab,
    label: String,
    icon: I,
) -> Element {
    let is_active = use_memo(move || *active_tab.read() == tab);
    let background = use_memo(move || if is_active() { "#4F46E5" } else { "transparent" });
    let color = use_memo(move || if is_active() { "white" } else { "#374151" });

    rsx! {
        button {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 6px;
                flex: 1 1 0;
                border: none;
                border-radius: 8px;
                padding: 8px 12px;
                font-size: 14px;
                font-weight: 500;
                cursor: pointer;
                background-color: {background()};
                color: {color()};
            ",
            onclick: move |_| {
                active_tab.set(tab);
            },
            Icon { icon: icon, style: "width: 18px; height: 18px;" }
            "{label}"
        }
    }
}

#[component]
fn ColorToggleGrid(selection: Signal<EpisodeQuery>) -> Element {
    let facet_cache = use_facet_catalog_cache();
    let colors = use_memo(move || {
        facet_cache
            .catalog
            .read()
            .as_ref()
            .map(|catalog| catalog.colors.clone())
            .unwrap_or_default()
    });

    rsx! {
        div {
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(110px, 1fr));
                gap: 10px;
            ",
            for color in colors() {
                ColorSwatchButton {
                    key: "{color.name}",
                    selection,
                    color: color.clone(),
                }
            }
        }
    }
}

// text color mirrors the swatch brightness so light paints stay readable
fn swatch_text_color(hex_code: &str) -> &'static str {
    let value = u32::from_str_radix(hex_code.trim_start_matches('#'), 16).unwrap_or(0);
    if value > 0xFFFFFF / 2 { "#000000" } else { "#FFFFFF" }
}

#[component]
fn ColorSwatchButton(mut selection: Signal<EpisodeQuery>, color: ReadSignal<FacetColor>) -> Element {
    let is_selected = use_memo(move || selection.read().colors.contains(&color.read().name));
    let outline = use_memo(move || {
        if is_selected() { "3px solid #4F46E5" } else { "1px solid rgba(0,0,0,0.2)" }
    });
    let FacetColor { name, hex_code } = color.read().clone();
    let text_color = swatch_text_color(&hex_code);

    rsx! {
        button {
            style: "
                aspect-ratio: 1 / 1;
                border: none;
                outline: {outline()};
                outline-offset: -1px;
                border-radius: 10px;
                cursor: pointer;
                font-size: 13px;
                background-color: {hex_code};
                color: {text_color};
            ",
            onclick: move |_| {
                let name = color.read().name.clone();
                selection.write().toggle_color(name);
            },
            "{name}"
        }
    }
}

#[component]
fn SubjectToggleGrid(selection: Signal<EpisodeQuery>) -> Element {
    let facet_cache = use_facet_catalog_cache();
    let subjects = use_memo(move || {
        facet_cache
            .catalog
            .read()
            .as_ref()
            .map(|catalog| catalog.subjects.clone())
            .unwrap_or_default()
    });

    rsx! {
        div {
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
                gap: 10px;
            ",
            for subject in subjects() {
                SubjectToggleButton {
                    key: "{subject.name}",
                    selection,
                    name: subject.name.clone(),
                }
            }
        }
    }
}

#[component]
fn SubjectToggleButton(mut selection: Signal<EpisodeQuery>, name: ReadSignal<String>) -> Element {
    let is_selected = use_memo(move || selection.read().subjects.contains(&name.read().clone()));

    rsx! {
        PillToggleButton {
            label: name.read().clone(),
            is_selected: is_selected(),
            ontoggle: move |_: ()| {
                let name = name.read().clone();
                selection.write().toggle_subject(name);
            },
        }
    }
}

#[component]
fn MonthToggleGrid(selection: Signal<EpisodeQuery>) -> Element {
    let facet_cache = use_facet_catalog_cache();
    let months = use_memo(move || {
        facet_cache
            .catalog
            .read()
            .as_ref()
            .map(|catalog| catalog.months.clone())
            .unwrap_or_default()
    });

    rsx! {
        div {
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(130px, 1fr));
                gap: 10px;
            ",
            for month in months() {
                MonthToggleButton {
                    key: "{month.month_num}",
                    selection,
                    month: month.clone(),
                }
            }
        }
    }
}

#[component]
fn MonthToggleButton(mut selection: Signal<EpisodeQuery>, month: ReadSignal<FacetMonth>) -> Element {
    let is_selected = use_memo(move || selection.read().months.contains(&month.read().month_num));

    rsx! {
        PillToggleButton {
            label: month.read().display_name().to_string(),
            is_selected: is_selected(),
            ontoggle: move |_: ()| {
                let month_num = month.read().month_num;
                selection.write().toggle_month(month_num);
            },
        }
    }
}

#[component]
fn PillToggleButton(label: String, is_selected: bool, ontoggle: Callback<()>) -> Element {
    let background = if is_selected { "#4F46E5" } else { "#F3F4F6" };
    let color = if is_selected { "white" } else { "#111827" };

    rsx! {
        button {
            style: "
                border: 1px solid rgba(0,0,0,0.1);
                border-radius: 8px;
                padding: 10px 12px;
                font-size: 14px;
                font-weight: 500;
                cursor: pointer;
                background-color: {background};
                color: {color};
            ",
            onclick: move |_| {
                ontoggle(());
            },
            "{label}"
        }
    }
}
