use std::sync::Arc;

use services::SubmissionController;

pub trait UiApp: Send + Sync {
    fn title(&self) -> String;
    fn controller(&self) -> Arc<SubmissionController>;
}

/// Explicit state injected into the view tree. The controller is the single
/// writer of submission and loader state; views only read and subscribe.
#[derive(Clone)]
pub struct AppContext {
    title: String,
    controller: Arc<SubmissionController>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            title: app.title(),
            controller: app.controller(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn controller(&self) -> Arc<SubmissionController> {
        Arc::clone(&self.controller)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
