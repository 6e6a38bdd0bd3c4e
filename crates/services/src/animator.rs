use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use advisor_core::LoaderConfig;
use advisor_core::model::{LoaderSession, ProgressStage, Tick};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

/// Cycles through the configured progress stages on a fixed period while a
/// request is outstanding.
///
/// The stage clock is independent of the request: reaching the last stage
/// says nothing about completion, and `stop` may land at any index.
pub struct ProgressAnimator {
    config: LoaderConfig,
    session: Arc<watch::Sender<LoaderSession>>,
    ticker: Mutex<Ticker>,
}

#[derive(Default)]
struct Ticker {
    runs: u64,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl ProgressAnimator {
    #[must_use]
    pub fn new(config: LoaderConfig) -> Self {
        let (session, _) = watch::channel(LoaderSession::idle());
        Self {
            config,
            session: Arc::new(session),
            ticker: Mutex::new(Ticker::default()),
        }
    }

    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> LoaderSession {
        *self.session.borrow()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LoaderSession> {
        self.session.subscribe()
    }

    /// The stage on screen, or `None` while inactive.
    #[must_use]
    pub fn current_stage(&self) -> Option<&ProgressStage> {
        let session = self.session();
        if !session.is_active() {
            return None;
        }
        self.config.stages().get(session.current_index())
    }

    /// True while a tick is still scheduled.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.lock_ticker()
            .handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Reset to the first stage and begin advancing. Restarts if already active.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) {
        let mut ticker = self.lock_ticker();
        ticker.cancel();
        ticker.runs += 1;
        let run = ticker.runs;

        self.session.send_replace(LoaderSession::started(run));
        debug!(run, "progress loader started");

        let session = Arc::clone(&self.session);
        let period = self.config.stage_duration();
        let last_index = self.config.stages().last_index();
        let looping = self.config.looping();

        ticker.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;

                let mut tick = Tick::Inactive;
                session.send_if_modified(|current| {
                    // A restart or stop may have raced this tick.
                    if current.run() != run {
                        return false;
                    }
                    tick = current.advance(last_index, looping);
                    matches!(tick, Tick::Advanced(_) | Tick::Wrapped)
                });

                match tick {
                    Tick::Advanced(index) => debug!(run, index, "progress stage advanced"),
                    Tick::Wrapped => debug!(run, "progress stages wrapped"),
                    Tick::Parked => {
                        debug!(run, "progress loader parked on last stage");
                        break;
                    }
                    Tick::Inactive => break,
                }
            }
        }));
    }

    /// Deactivate, reset to the first stage and cancel the pending tick.
    ///
    /// Safe to call repeatedly or before any `start`.
    pub fn stop(&self) {
        let mut ticker = self.lock_ticker();
        ticker.cancel();
        let was_active = self.session.send_replace(LoaderSession::idle()).is_active();
        if was_active {
            debug!(run = ticker.runs, "progress loader stopped");
        }
    }

    fn lock_ticker(&self) -> MutexGuard<'_, Ticker> {
        self.ticker.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for ProgressAnimator {
    fn drop(&mut self) {
        self.lock_ticker().cancel();
    }
}
