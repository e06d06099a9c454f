use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            // while child components are suspended, the loading view is
            // rendered in their place
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    width: "100%",
                    height: "100%",
                    display: "flex",
                    align_items: "center",
                    justify_content: "center",
                    LoadingIndicator {}
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "
                color: #374151;
                background: white;
                font-size: 18px;
                border: 1px solid #D1D5DB;
                border-radius: 8px;
                padding: 10px 18px;
                margin: 15px;
            ",
            "Loading..."
        }
    }
}
