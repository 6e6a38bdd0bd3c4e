mod ids;
mod outcome;
mod payload;
mod session;
mod stage;

pub use ids::Generation;
pub use outcome::SubmissionOutcome;
pub use payload::{PayloadField, SubmissionPayload, SubmissionPayloadBuilder};
pub use session::{LoaderSession, Tick};
pub use stage::{DEFAULT_STAGE_LABELS, ProgressStage, StageSequence};
