//! TSPLIB error types.

use thiserror::Error;
use tourdiff_core::Vertex;

/// Errors reading TSPLIB files or looking up their vertices.
#[derive(Debug, Error)]
pub enum TsplibError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("missing {0}")]
    MissingSection(&'static str),

    #[error("vertex {vertex} is outside 1..={len}")]
    VertexOutOfRange { vertex: Vertex, len: usize },
}
