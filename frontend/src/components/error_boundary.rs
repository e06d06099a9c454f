//! Error boundary components for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                rsx! {
                    h1 {
                        style: "color:red; font-size: 44px; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Something went wrong",
                    }
                    p {
                        style: "color:darkred; font-size: 22px; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Boundary: {boundary_name}"
                    }
                    a {
                        href: "/",
                        style: "color:blue; font-size: 22px; border: 1px solid blue; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Back to the start page"
                    }
                    pre {
                        style: "color:black; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px; text-wrap: auto;",
                        "{_err:#?}"
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_err: ErrorContext| {
                let error = _err.error();
                let error_txt = if let Some(err) = error {
                    format!("{:#?}", err.0)
                } else {
                    "Unknown error".to_string()
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "
                                color: white;
                                background-color: #4F46E5;
                                font-size: 14px;
                                font-weight: 500;
                                border: none;
                                padding: 10px 22px;
                                border-radius: 8px;
                                cursor: pointer;
                            ",
                            onclick: move |_| {
                                _err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            height: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            gap: "10px",
            padding: "24px",
            box_sizing: "border-box",

            div {
                style: "
                    color: #991B1B;
                    background-color: #FEE2E2;
                    border: 1px solid #F87171;
                    border-radius: 6px;
                    padding: 10px 14px;
                    font-size: 16px;
                    font-weight: 500;
                ",
                "This part of the page hit an error.",
            }

            pre {
                style: "
                    color: #7F1D1D;
                    background: white;
                    border: 1px solid #F87171;
                    border-radius: 6px;
                    padding: 10px;
                    text-wrap: auto;
                    max-width: 500px;
                    max-height: 400px;
                    overflow-y: auto;
                    font-size: 12px;
                ",
                "{error_txt}"
            }

            {children}
        }
    }
}
