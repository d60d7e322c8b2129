use std::path::PathBuf;

use thiserror::Error;
use url::Url;

use crate::bounds::Coordinate;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A rectangle whose end does not lie strictly after its start on both axes.
    #[error("invalid rectangle {start} -> {end}: end must be greater than start on both axes")]
    InvalidRectangle { start: Coordinate, end: Coordinate },

    #[error("request to {url} failed")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned {status}")]
    Status {
        url: Url,
        status: reqwest::StatusCode,
    },

    /// At least one request of a batch failed. `source` is the first failure
    /// in batch order; the others are only counted.
    #[error("{failed} of {total} pixel writes failed")]
    Batch {
        failed: usize,
        total: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("base url {0} cannot carry a path")]
    InvalidBaseUrl(Url),
}
