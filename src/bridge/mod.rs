// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the sole public-facing API of the runpack library. It is the
// authoritative boundary between the outside world (files, the interactive
// menu) and the pure chunk pipeline.
//
// Data Flow (Compression):
//
//   1. [Caller]                      -> hands a raw byte buffer to `compress`
//   2. [Stateless API (compress)]    -> plans + runs the parallel RLE encode
//   3. [Format (wrap)]               -> tags the result 'C', or falls back to
//                                       'U' with the original bytes when the
//                                       encoding did not shrink the input
//
// Data Flow (Decompression):
//
//   1. [Format (unwrap)]             -> reads the tag byte, selects the path
//   2. [Stateless API (decompress)]  -> parallel RLE decode for 'C', verbatim
//                                       copy for 'U'
//   3. [Caller]                      -> receives the reconstructed buffer
//
// ====================================================================================
pub mod format;
pub mod stateless_api;

// --- Low-Level Stateless API ---
pub use stateless_api::{compress, decompress};
