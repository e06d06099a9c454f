//! AND/OR combinator selector.

use common::episode_query::{Combinator, EpisodeQuery};
use dioxus::prelude::*;


#[component]
pub fn CombinatorSelect(mut selection: Signal<EpisodeQuery>) -> Element {
    let current = use_memo(move || selection.read().combinator);
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
            ",
            label {
                style: "font-size: 14px; font-weight: 500; color: #374151;",
                "Filter type"
            }
            select {
                style: "
                    width: 100%;
                    border: 1px solid #D1D5DB;
                    border-radius: 6px;
                    padding: 8px 10px;
                    font-size: 14px;
                    background-color: white;
                ",
                onchange: move |event| {
                    // switching the mode never clears the selections
                    let combinator = if event.value() == "OR" { Combinator::Any } else { Combinator::All };
                    selection.write().set_combinator(combinator);
                },
                option {
                    value: "AND",
                    selected: current() == Combinator::All,
                    "Match all filter groups (AND)"
                }
                option {
                    value: "OR",
                    selected: current() == Combinator::Any,
                    "Match any filter group (OR)"
                }
            }
        }
    }
}
