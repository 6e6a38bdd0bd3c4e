#![forbid(unsafe_code)]

pub mod config;
pub mod model;

pub use config::{
    DEFAULT_BASE_URL, DEFAULT_STAGE_DURATION, EndpointConfig, EndpointConfigError, LoaderConfig,
    LoaderConfigError,
};
