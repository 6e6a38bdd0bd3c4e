#![forbid(unsafe_code)]

pub mod animator;
pub mod client;
pub mod controller;
pub mod error;

pub use animator::ProgressAnimator;
pub use client::{HttpRequestClient, RequestClient};
pub use controller::{ControllerSnapshot, FailureNotice, Resolution, SubmissionController};
pub use error::{RequestError, SubmissionError};
