use dioxus::prelude::*;

use crate::vm::LoaderVm;

/// Full-screen stage list shown while a request is outstanding.
#[component]
pub fn LoaderOverlay(vm: LoaderVm) -> Element {
    if !vm.visible {
        return rsx! {};
    }

    rsx! {
        div { class: "loader-overlay", role: "status",
            ul { class: "loader-steps",
                for row in vm.rows {
                    li { key: "{row.label}", class: row.status.class(),
                        span { class: "loader-marker", "{row.status.marker()}" }
                        span { class: "loader-label", "{row.label}" }
                    }
                }
            }
        }
    }
}
