/// Ephemeral loader state owned by the progress animator.
///
/// `run` changes on every start so observers (and stale timer ticks) can tell
/// one loader session from the next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoaderSession {
    current_index: usize,
    active: bool,
    run: u64,
}

/// What a single timer tick did to a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Advanced(usize),
    Wrapped,
    /// Sitting on the last stage with looping off. Nothing left to schedule.
    Parked,
    Inactive,
}

impl LoaderSession {
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn started(run: u64) -> Self {
        Self {
            current_index: 0,
            active: true,
            run,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn run(&self) -> u64 {
        self.run
    }

    /// Applies one tick.
    ///
    /// Never clears `active`; only an explicit stop does that.
    pub fn advance(&mut self, last_index: usize, looping: bool) -> Tick {
        if !self.active {
            return Tick::Inactive;
        }
        if self.current_index < last_index {
            self.current_index += 1;
            return Tick::Advanced(self.current_index);
        }
        if looping {
            self.current_index = 0;
            return Tick::Wrapped;
        }
        Tick::Parked
    }
}
