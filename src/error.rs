//! Error types for configuration and drawing sessions.
//!
//! Interpolation itself is infallible; only loading configuration and
//! feeding points into a `DrawingSession` can fail.

use std::io;
use thiserror::Error;

/// Errors produced by this crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("No stroke in progress")]
    NoActiveStroke,

    #[error("Non-finite point ({x}, {y})")]
    NonFinitePoint { x: f64, y: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
