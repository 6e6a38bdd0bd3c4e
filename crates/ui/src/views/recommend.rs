use advisor_core::model::PayloadField;
use dioxus::prelude::*;
use tracing::debug;

use crate::context::AppContext;
use crate::views::{FailureDialog, FormPanel, LoaderOverlay, ResultPreview};
use crate::vm::{FormVm, map_loader, present_result};

#[component]
pub fn RecommendView() -> Element {
    let ctx = use_context::<AppContext>();
    let controller = ctx.controller();

    let mut form = use_signal(FormVm::default);
    let snapshot = use_signal(|| controller.snapshot());
    let session = use_signal(|| controller.animator().session());

    // Mirror controller state into signals; the controller stays the only writer.
    use_future({
        let controller = controller.clone();
        move || {
            let mut snapshot = snapshot;
            let mut rx = controller.subscribe();
            async move {
                while rx.changed().await.is_ok() {
                    let next = rx.borrow_and_update().clone();
                    snapshot.set(next);
                }
            }
        }
    });
    use_future({
        let controller = controller.clone();
        move || {
            let mut session = session;
            let mut rx = controller.animator().subscribe();
            async move {
                while rx.changed().await.is_ok() {
                    let next = *rx.borrow_and_update();
                    session.set(next);
                }
            }
        }
    });

    let on_submit = use_callback({
        let controller = controller.clone();
        move |()| {
            let payload = form.read().to_payload();
            let controller = controller.clone();
            spawn(async move {
                let resolution = controller.submit(payload).await;
                debug!(?resolution, "submission resolved");
            });
        }
    });
    let on_acknowledge = use_callback({
        let controller = controller.clone();
        move |()| controller.acknowledge_failure()
    });

    let current = snapshot.read().clone();
    let loader = map_loader(controller.animator().config().stages(), &session());
    let result = current.outcome.response_body().map(present_result);

    rsx! {
        div { class: "page",
            h2 { class: "page-title", "{ctx.title()}" }
            FormPanel {
                form: form(),
                on_change: move |(field, value): (PayloadField, String)| form.write().set(field, value),
                on_submit,
            }
            LoaderOverlay { vm: loader }
            {current.notice.map(|notice| rsx! {
                FailureDialog { message: notice.message, on_acknowledge }
            })}
            {result.map(|vm| rsx! {
                ResultPreview { vm }
            })}
        }
    }
}
