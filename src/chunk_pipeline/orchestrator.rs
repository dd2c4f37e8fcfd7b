// In: src/chunk_pipeline/orchestrator.rs

//! The parallel codec orchestrator.
//!
//! Dispatches one independent encode/decode task per planned `ChunkRange`.
//! Each worker reads only its own range of the shared, immutable source
//! buffer and writes only to its own pre-allocated output slot, so the data
//! path needs no locking. After every worker has been joined, slots are
//! concatenated strictly in chunk order; the result is deterministic and
//! byte-identical to the sequential result for the same input and plan.

use std::thread;

use crate::chunk_pipeline::planner::{plan_ranges, ChunkRange};
use crate::error::RunpackError;
use crate::kernels::rle;

//==================================================================================
// 1. Range-Level API (caller supplies the plan)
//==================================================================================

/// Encodes every range of `data` concurrently and concatenates the encoded
/// chunks in plan order.
pub fn encode_chunks(data: &[u8], ranges: &[ChunkRange]) -> Vec<u8> {
    let mut slots: Vec<Vec<u8>> = vec![Vec::new(); ranges.len()];

    thread::scope(|s| {
        for (slot, range) in slots.iter_mut().zip(ranges.iter().copied()) {
            s.spawn(move || {
                *slot = rle::encode(&data[range.start..range.end]);
            });
        }
    });

    merge_slots(&slots)
}

/// Decodes every range of `data` concurrently and concatenates the decoded
/// chunks in plan order.
///
/// All workers run to completion before any result is inspected; if any
/// chunk is malformed the whole operation fails and the successful chunks
/// are discarded. No partial output is ever surfaced.
pub fn decode_chunks(data: &[u8], ranges: &[ChunkRange]) -> Result<Vec<u8>, RunpackError> {
    let mut slots: Vec<Result<Vec<u8>, RunpackError>> =
        (0..ranges.len()).map(|_| Ok(Vec::new())).collect();

    thread::scope(|s| {
        for (slot, range) in slots.iter_mut().zip(ranges.iter().copied()) {
            s.spawn(move || {
                *slot = rle::decode(&data[range.start..range.end]);
            });
        }
    });

    let mut chunks = Vec::with_capacity(slots.len());
    for slot in slots {
        chunks.push(slot?);
    }
    Ok(merge_slots(&chunks))
}

//==================================================================================
// 2. Planning Wrappers
//==================================================================================

/// Plans one chunk per worker over the raw input and encodes in parallel.
pub fn parallel_encode(data: &[u8], worker_count: usize) -> Vec<u8> {
    let ranges = plan_ranges(data.len(), worker_count);
    log::debug!(
        "encoding {} bytes across {} chunk(s)",
        data.len(),
        ranges.len()
    );
    encode_chunks(data, &ranges)
}

/// Plans one chunk per worker over the encoded payload and decodes in
/// parallel.
///
/// The plan is computed over (value, count) pairs and scaled back to byte
/// offsets, so a chunk boundary can never split a record. An odd total
/// length means the stream is truncated and fails loudly here, before any
/// worker is spawned.
pub fn parallel_decode(data: &[u8], worker_count: usize) -> Result<Vec<u8>, RunpackError> {
    if data.len() % 2 != 0 {
        return Err(RunpackError::MalformedChunk(format!(
            "compressed payload length {} is not a whole number of (value, count) pairs",
            data.len()
        )));
    }

    let ranges: Vec<ChunkRange> = plan_ranges(data.len() / 2, worker_count)
        .iter()
        .map(|r| ChunkRange {
            start: r.start * 2,
            end: r.end * 2,
        })
        .collect();
    log::debug!(
        "decoding {} bytes across {} chunk(s)",
        data.len(),
        ranges.len()
    );
    decode_chunks(data, &ranges)
}

//==================================================================================
// 3. Private Helpers
//==================================================================================

/// Concatenates per-chunk output slots strictly in slot order.
fn merge_slots(slots: &[Vec<u8>]) -> Vec<u8> {
    let total: usize = slots.iter().map(Vec::len).sum();
    let mut merged = Vec::with_capacity(total);
    for chunk in slots {
        merged.extend_from_slice(chunk);
    }
    merged
}
