use std::sync::Arc;

use advisor_core::LoaderConfig;
use advisor_core::model::SubmissionPayload;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{RequestClient, RequestError, SubmissionController};

use crate::context::{UiApp, build_app_context};
use crate::views::RecommendView;

/// How the fake backend answers.
#[derive(Clone, Debug)]
pub enum Reply {
    Body(String),
    Empty,
    Never,
}

struct FakeClient {
    reply: Reply,
}

#[async_trait::async_trait]
impl RequestClient for FakeClient {
    async fn send(&self, _payload: &SubmissionPayload) -> Result<String, RequestError> {
        match &self.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Empty => Err(RequestError::EmptyBody),
            Reply::Never => std::future::pending().await,
        }
    }
}

struct TestApp {
    controller: Arc<SubmissionController>,
}

impl UiApp for TestApp {
    fn title(&self) -> String {
        "Course Recommender".to_string()
    }

    fn controller(&self) -> Arc<SubmissionController> {
        Arc::clone(&self.controller)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn RecommendHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { RecommendView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub controller: Arc<SubmissionController>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn controller_with(reply: Reply) -> Arc<SubmissionController> {
    Arc::new(SubmissionController::new(
        Arc::new(FakeClient { reply }),
        LoaderConfig::default(),
    ))
}

/// Build the page around a controller the test has already driven.
pub fn setup_view_harness(controller: Arc<SubmissionController>) -> ViewHarness {
    let app = Arc::new(TestApp {
        controller: Arc::clone(&controller),
    });
    let dom = VirtualDom::new_with_props(RecommendHarness, ViewHarnessProps { app });
    ViewHarness { dom, controller }
}

/// Render a props-less component to HTML.
pub fn render_component(component: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(component);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
