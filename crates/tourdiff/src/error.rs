//! Error type for the facade operations that touch files.

use thiserror::Error;
use tourdiff_config::ConfigError;
use tourdiff_core::TourDiffError;
use tourdiff_tsplib::TsplibError;

/// Any error raised while reading, decomposing or writing tours and moves.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Decompose(#[from] TourDiffError),

    #[error(transparent)]
    Tsplib(#[from] TsplibError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for facade operations
pub type Result<T> = std::result::Result<T, Error>;
