// In: src/bridge/stateless_api.rs

use std::sync::Arc;

use crate::bridge::format::{self, ContainerMode};
use crate::chunk_pipeline::orchestrator;
use crate::config::RunpackConfig;
use crate::error::RunpackError;

/// Compresses a byte buffer into a self-describing container.
///
/// The buffer is split into one chunk per configured worker, encoded in
/// parallel, and wrapped; if the encoding did not shrink the input the
/// container stores the original bytes verbatim instead. Never fails.
pub fn compress(data: &[u8], config: &Arc<RunpackConfig>) -> Vec<u8> {
    // 1. Run the parallel chunked encode over the raw input.
    let encoded = orchestrator::parallel_encode(data, config.worker_count);

    // 2. Let the container format decide whether the encoding earned its keep.
    let (mode, container) = format::wrap(data, encoded);
    log::info!(
        "compressed {} bytes -> {} byte payload ({:?}, {} workers)",
        data.len(),
        container.len() - 1,
        mode,
        config.worker_count
    );
    container
}

/// Decompresses a container produced by [`compress`] back into the original
/// bytes.
///
/// Fails with `UnknownFormat` when the tag byte is missing or unrecognized,
/// and with `MalformedChunk` when a compressed payload is structurally
/// corrupt. On failure no partial output is returned.
pub fn decompress(container: &[u8], config: &Arc<RunpackConfig>) -> Result<Vec<u8>, RunpackError> {
    // 1. The tag byte selects the decode path.
    let (mode, payload) = format::unwrap(container)?;

    // 2. Only a compressed payload needs the parallel decode.
    let decoded = match mode {
        ContainerMode::Compressed => {
            orchestrator::parallel_decode(payload, config.worker_count)?
        }
        ContainerMode::Uncompressed => payload.to_vec(),
    };

    log::info!(
        "decompressed {} byte payload -> {} bytes ({:?})",
        payload.len(),
        decoded.len(),
        mode
    );
    Ok(decoded)
}
