// In: src/error.rs

//! This module defines the single, unified error type for the entire runpack
//! library. It uses the `thiserror` crate to provide ergonomic, context-aware
//! error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunpackError {
    // =========================================================================
    // === Codec-Level Errors (Specific to our library's logic)
    // =========================================================================
    /// The encoded payload of a chunk is structurally invalid, e.g. its length
    /// is not a whole number of (value, count) pairs. Signals a corrupt or
    /// truncated compressed stream.
    #[error("Malformed compressed chunk: {0}")]
    MalformedChunk(String),

    /// The container's tag byte is missing or not one we recognize.
    #[error("Unknown container format: {0}")]
    UnknownFormat(String),

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem (e.g., file not
    /// found, permission denied).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically during config parsing.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
