/// Terminal result of one submission attempt.
///
/// Only the submission controller writes this value. The progress animator
/// never produces or alters an outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    Success(String),
    Failure,
}

impl SubmissionOutcome {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure)
    }

    /// The response body when the outcome is `Success`.
    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Success(body) => Some(body),
            Self::Idle | Self::Failure => None,
        }
    }
}
