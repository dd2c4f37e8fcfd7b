//! This module contains the pure, stateless kernels for byte-oriented
//! run-length encoding and decoding.
//!
//! **Encoding format:** a flat sequence of two-byte records, the literal value
//! byte followed by a count byte in `1..=255`. Runs longer than `MAX_RUN_LEN`
//! are split into multiple records, so the encoded stream always has even
//! length. The kernels see exactly one chunk's worth of bytes; a run never
//! crosses the boundary between chunks because each chunk is encoded
//! independently by its own worker.

use crate::error::RunpackError;

/// The longest run a single (value, count) record can express. The count
/// field is one byte.
pub const MAX_RUN_LEN: usize = 255;

/// Encodes a byte slice into a run-length token stream.
///
/// Never fails: any input, including the empty slice, yields a valid
/// (possibly empty) encoded chunk.
pub fn encode(input: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        let value = input[i];

        // Count repeats up to the run cap or the end of the slice.
        let mut run_len = 1;
        while i + run_len < input.len() && input[i + run_len] == value && run_len < MAX_RUN_LEN {
            run_len += 1;
        }

        output.push(value);
        output.push(run_len as u8);
        i += run_len;
    }

    output
}

/// Decodes a run-length token stream back into raw bytes.
///
/// An odd-length input is structurally corrupt (a truncated record) and fails
/// with `MalformedChunk`; the caller must discard any partial result rather
/// than salvage a prefix. A count of zero is a degenerate but legal record
/// that expands to nothing.
pub fn decode(input: &[u8]) -> Result<Vec<u8>, RunpackError> {
    if input.len() % 2 != 0 {
        return Err(RunpackError::MalformedChunk(format!(
            "encoded chunk length {} is not a whole number of (value, count) pairs",
            input.len()
        )));
    }

    let mut output = Vec::with_capacity(input.len());
    for pair in input.chunks_exact(2) {
        let value = pair[0];
        let count = pair[1] as usize;
        output.extend(std::iter::repeat(value).take(count));
    }

    Ok(output)
}
