use dioxus::prelude::*;

use crate::vm::ResultVm;

#[component]
pub fn ResultPreview(vm: ResultVm) -> Element {
    rsx! {
        div { class: "result-preview",
            h2 { class: "result-title", "{vm.title}" }
            div { class: "result-body", dangerous_inner_html: "{vm.html}" }
        }
    }
}
