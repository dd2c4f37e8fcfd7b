//! This file is the root of the `runpack` crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library (`bridge`, `kernels`,
//!     etc.) so the Rust compiler knows they exist.
//! 2.  Re-exporting the small public surface callers are expected to use.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod bridge;
pub mod config;
pub mod error;
pub mod kernels;
pub mod storage;

mod chunk_pipeline;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use error::RunpackError;
