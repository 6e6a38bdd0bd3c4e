use dioxus::prelude::*;

/// Blocking error dialog; the user must dismiss it before continuing.
#[component]
pub fn FailureDialog(message: String, on_acknowledge: Callback<()>) -> Element {
    rsx! {
        div { class: "notice-overlay",
            div { class: "notice", role: "alertdialog",
                h3 { class: "notice-title", "Request failed" }
                p { class: "notice-body", "{message}" }
                div { class: "notice-actions",
                    button {
                        class: "btn notice-ok",
                        r#type: "button",
                        autofocus: true,
                        onclick: move |_| on_acknowledge.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}
