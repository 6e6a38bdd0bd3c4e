use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use advisor_core::LoaderConfig;
use advisor_core::model::{Generation, SubmissionOutcome, SubmissionPayload};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::animator::ProgressAnimator;
use crate::client::RequestClient;
use crate::error::SubmissionError;

/// A failure the user has not acknowledged yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailureNotice {
    pub generation: Generation,
    pub message: String,
}

/// Everything the view layer needs from the controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControllerSnapshot {
    pub generation: Generation,
    pub in_flight: Option<Generation>,
    pub outcome: SubmissionOutcome,
    pub notice: Option<FailureNotice>,
}

impl ControllerSnapshot {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }
}

/// What happened to the resolution of one `submit` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Applied(SubmissionOutcome),
    /// A newer submission started first; this result was dropped.
    Superseded { generation: Generation },
}

/// Orchestrates one submission at a time: starts the loader, performs the
/// request and publishes the outcome.
///
/// The controller is the only writer of the outcome and the only caller of
/// `ProgressAnimator::start`/`stop`. The latest submission always wins.
pub struct SubmissionController {
    client: Arc<dyn RequestClient>,
    shared: Arc<Shared>,
}

/// State the resolution task writes to after the caller may have gone away.
struct Shared {
    animator: ProgressAnimator,
    state: Mutex<ControllerSnapshot>,
    published: watch::Sender<ControllerSnapshot>,
}

impl SubmissionController {
    #[must_use]
    pub fn new(client: Arc<dyn RequestClient>, loader: LoaderConfig) -> Self {
        let (published, _) = watch::channel(ControllerSnapshot::default());
        Self {
            client,
            shared: Arc::new(Shared {
                animator: ProgressAnimator::new(loader),
                state: Mutex::new(ControllerSnapshot::default()),
                published,
            }),
        }
    }

    #[must_use]
    pub fn animator(&self) -> &ProgressAnimator {
        &self.shared.animator
    }

    #[must_use]
    pub fn snapshot(&self) -> ControllerSnapshot {
        self.shared.lock_state().clone()
    }

    #[must_use]
    pub fn outcome(&self) -> SubmissionOutcome {
        self.shared.lock_state().outcome.clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ControllerSnapshot> {
        self.shared.published.subscribe()
    }

    /// Submit a payload and wait for its resolution.
    ///
    /// Never fails: transport, server and unexpected errors all become
    /// `SubmissionOutcome::Failure` plus a `FailureNotice`. If another
    /// submission starts before this one resolves, the result is dropped and
    /// `Resolution::Superseded` is returned.
    ///
    /// The resolution is applied by a background task, so dropping the
    /// returned future does not leave the submission in flight.
    pub async fn submit(&self, payload: SubmissionPayload) -> Resolution {
        let generation = self.shared.begin();
        info!(%generation, "submission started");

        let client = Arc::clone(&self.client);
        let shared = Arc::clone(&self.shared);
        let resolve = tokio::spawn(async move {
            let request = tokio::spawn(async move { client.send(&payload).await });
            let result = match request.await {
                Ok(Ok(body)) => Ok(body),
                Ok(Err(err)) => Err(SubmissionError::from(err)),
                Err(err) => Err(SubmissionError::Unhandled(err.to_string())),
            };
            shared.finish(generation, result)
        });

        match resolve.await {
            Ok(resolution) => resolution,
            Err(err) => self
                .shared
                .finish(generation, Err(SubmissionError::Unhandled(err.to_string()))),
        }
    }

    /// Clear the pending failure notice once the user has seen it.
    pub fn acknowledge_failure(&self) {
        self.shared.update(|state, _| {
            state.notice = None;
        });
    }
}

impl Shared {
    fn begin(&self) -> Generation {
        self.update(|state, animator| {
            if let Some(previous) = state.in_flight {
                info!(%previous, "discarding in-flight submission");
            }
            state.generation = state.generation.next();
            state.in_flight = Some(state.generation);
            state.outcome = SubmissionOutcome::Idle;
            state.notice = None;
            animator.start();
            state.generation
        })
    }

    fn finish(&self, generation: Generation, result: Result<String, SubmissionError>) -> Resolution {
        self.update(|state, animator| {
            if state.in_flight != Some(generation) {
                warn!(%generation, current = %state.generation, "dropping stale resolution");
                return Resolution::Superseded { generation };
            }

            state.in_flight = None;
            state.outcome = match result {
                Ok(body) => {
                    info!(%generation, bytes = body.len(), "submission succeeded");
                    SubmissionOutcome::Success(body)
                }
                Err(err) => {
                    warn!(%generation, error = %err, "submission failed");
                    state.notice = Some(FailureNotice {
                        generation,
                        message: err.to_string(),
                    });
                    SubmissionOutcome::Failure
                }
            };
            animator.stop();
            Resolution::Applied(state.outcome.clone())
        })
    }

    fn update<R>(&self, apply: impl FnOnce(&mut ControllerSnapshot, &ProgressAnimator) -> R) -> R {
        let mut state = self.lock_state();
        let result = apply(&mut state, &self.animator);
        self.published.send_replace(state.clone());
        result
    }

    fn lock_state(&self) -> MutexGuard<'_, ControllerSnapshot> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
