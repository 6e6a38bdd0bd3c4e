use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::model::StageSequence;

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// How long each progress stage stays on screen.
pub const DEFAULT_STAGE_DURATION: Duration = Duration::from_millis(4000);

const RECOMMEND_PATH: &str = "recommend-courses/";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoaderConfigError {
    #[error("loader needs at least one stage")]
    EmptyStages,

    #[error("stage {0} has a blank label")]
    BlankLabel(usize),

    #[error("stage duration must be > 0")]
    ZeroDuration,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EndpointConfigError {
    #[error("invalid endpoint url: {0}")]
    Parse(#[from] url::ParseError),

    #[error("unsupported endpoint scheme: {0}")]
    UnsupportedScheme(String),
}

/// Progress loader settings. Validated once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    stages: StageSequence,
    stage_duration: Duration,
    looping: bool,
}

impl LoaderConfig {
    /// # Errors
    ///
    /// Returns `LoaderConfigError::ZeroDuration` when `stage_duration` is zero.
    pub fn new(
        stages: StageSequence,
        stage_duration: Duration,
        looping: bool,
    ) -> Result<Self, LoaderConfigError> {
        if stage_duration.is_zero() {
            return Err(LoaderConfigError::ZeroDuration);
        }
        Ok(Self {
            stages,
            stage_duration,
            looping,
        })
    }

    #[must_use]
    pub fn stages(&self) -> &StageSequence {
        &self.stages
    }

    #[must_use]
    pub fn stage_duration(&self) -> Duration {
        self.stage_duration
    }

    #[must_use]
    pub fn looping(&self) -> bool {
        self.looping
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            stages: StageSequence::default(),
            stage_duration: DEFAULT_STAGE_DURATION,
            looping: false,
        }
    }
}

/// Where the recommendation backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    base_url: Url,
    recommend_url: Url,
}

impl EndpointConfig {
    /// # Errors
    ///
    /// Returns `EndpointConfigError` when `raw` is not an absolute http(s) URL.
    pub fn parse(raw: &str) -> Result<Self, EndpointConfigError> {
        let mut base_url = Url::parse(raw.trim())?;
        match base_url.scheme() {
            "http" | "https" => {}
            other => return Err(EndpointConfigError::UnsupportedScheme(other.to_string())),
        }
        // Joining relative paths drops the last segment unless the base ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let recommend_url = base_url.join(RECOMMEND_PATH)?;
        Ok(Self {
            base_url,
            recommend_url,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// POST target for recommendation requests.
    #[must_use]
    pub fn recommend_url(&self) -> Url {
        self.recommend_url.clone()
    }

    /// GET target for the backend's liveness probe.
    #[must_use]
    pub fn health_url(&self) -> Url {
        self.base_url.clone()
    }
}
