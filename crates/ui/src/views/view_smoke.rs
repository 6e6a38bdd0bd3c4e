use advisor_core::model::{LoaderSession, PayloadField, StageSequence, SubmissionPayload};
use dioxus::prelude::*;
use services::Resolution;

use super::test_harness::{Reply, controller_with, render_component, setup_view_harness};
use crate::views::{FailureDialog, LoaderOverlay};
use crate::vm::map_loader;

fn payload() -> SubmissionPayload {
    SubmissionPayload::builder()
        .field(PayloadField::FieldOfStudy, "Computer Science")
        .build()
}

#[tokio::test(flavor = "current_thread")]
async fn idle_page_renders_form_without_loader_or_result() {
    let mut harness = setup_view_harness(controller_with(Reply::Never));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Course Recommender"), "missing title in {html}");
    assert!(html.contains("Field of study"), "missing label in {html}");
    assert!(html.contains("Applied Machine Learning Engineer"), "missing placeholder in {html}");
    assert!(html.contains("Afghanistan"), "missing country option in {html}");
    assert!(html.contains("Get recommendations"), "missing submit in {html}");
    assert!(!html.contains("loader-overlay"), "unexpected loader in {html}");
    assert!(!html.contains("Course recommendation"), "unexpected result in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn in_flight_submission_shows_first_stage() {
    let controller = controller_with(Reply::Never);
    let task = tokio::spawn({
        let controller = controller.clone();
        async move { controller.submit(payload()).await }
    });
    tokio::task::yield_now().await;

    let mut harness = setup_view_harness(controller);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("loader-overlay"), "missing loader in {html}");
    assert!(html.contains("loader-step active"), "missing active stage in {html}");
    assert!(html.contains("Sending your data to the cloud"), "missing stage label in {html}");
    assert!(!html.contains("Course recommendation"), "unexpected result in {html}");

    harness.controller.animator().stop();
    task.abort();
}

#[tokio::test(flavor = "current_thread")]
async fn successful_submission_renders_markdown_result() {
    let controller = controller_with(Reply::Body("## Fall\n\n- **CS 590** Security".into()));
    let resolution = controller.submit(payload()).await;
    assert!(matches!(resolution, Resolution::Applied(_)));

    let mut harness = setup_view_harness(controller);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Course recommendation"), "missing result title in {html}");
    assert!(html.contains("<strong>CS 590</strong>"), "missing markdown in {html}");
    assert!(!html.contains("loader-overlay"), "unexpected loader in {html}");
    assert!(!html.contains("Request failed"), "unexpected notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_submission_shows_blocking_notice_and_no_result() {
    let controller = controller_with(Reply::Empty);
    controller.submit(payload()).await;

    let mut harness = setup_view_harness(controller);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Request failed"), "missing notice in {html}");
    assert!(
        html.contains("server failure: recommendation request returned an empty response"),
        "missing message in {html}"
    );
    assert!(!html.contains("Course recommendation"), "unexpected result in {html}");
}

fn parked_loader() -> Element {
    let stages = StageSequence::default();
    let mut session = LoaderSession::started(1);
    for _ in 0..10 {
        session.advance(stages.last_index(), false);
    }
    rsx! { LoaderOverlay { vm: map_loader(&stages, &session) } }
}

#[test]
fn parked_loader_marks_earlier_stages_done() {
    let html = render_component(parked_loader);
    assert_eq!(html.matches("loader-step done").count(), 3, "{html}");
    assert_eq!(html.matches("loader-step active").count(), 1, "{html}");
    assert!(html.contains("Prompting LLM using search results from vector database"));
}

fn idle_loader() -> Element {
    rsx! { LoaderOverlay { vm: map_loader(&StageSequence::default(), &LoaderSession::idle()) } }
}

#[test]
fn idle_loader_renders_nothing() {
    let html = render_component(idle_loader);
    assert!(!html.contains("loader-overlay"), "{html}");
}

fn failure_dialog() -> Element {
    rsx! {
        FailureDialog {
            message: "network failure: connection refused".to_string(),
            on_acknowledge: move |()| {},
        }
    }
}

#[test]
fn failure_dialog_shows_message_and_ok() {
    let html = render_component(failure_dialog);
    assert!(html.contains("network failure: connection refused"), "{html}");
    assert!(html.contains("OK"), "{html}");
}
