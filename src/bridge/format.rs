// In: src/bridge/format.rs

//! Defines the on-disk container format for runpack output.
//! This is the single source of truth for the tag bytes and the
//! compressed-versus-raw fallback decision.
//!
//! Container layout:
//!
//! ```text
//! byte 0:     b'C' (compressed) | b'U' (uncompressed)
//! bytes 1..:  if 'C': sequence of (value, count) byte pairs
//!             if 'U': the original bytes, verbatim
//! ```
//!
//! The tag is the sole piece of self-describing metadata.

use crate::error::RunpackError;

/// Tag byte marking an RLE-compressed payload.
pub const TAG_COMPRESSED: u8 = b'C';
/// Tag byte marking a raw, stored-as-is payload.
pub const TAG_UNCOMPRESSED: u8 = b'U';

/// How the payload of a container is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerMode {
    Compressed,
    Uncompressed,
}

/// Wraps an encoded payload into a tagged container.
///
/// When the encoding did not shrink the input (`encoded.len() >=
/// original.len()`), the original bytes are stored verbatim under the
/// uncompressed tag instead, so the container never loses to plain storage
/// by more than the one tag byte.
pub fn wrap(original: &[u8], encoded: Vec<u8>) -> (ContainerMode, Vec<u8>) {
    if encoded.len() >= original.len() {
        let mut container = Vec::with_capacity(1 + original.len());
        container.push(TAG_UNCOMPRESSED);
        container.extend_from_slice(original);
        (ContainerMode::Uncompressed, container)
    } else {
        let mut container = Vec::with_capacity(1 + encoded.len());
        container.push(TAG_COMPRESSED);
        container.extend_from_slice(&encoded);
        (ContainerMode::Compressed, container)
    }
}

/// Splits a container into its mode and payload.
///
/// A zero-length container has no tag byte and fails with `UnknownFormat`,
/// as does any tag other than `b'C'` or `b'U'`.
pub fn unwrap(container: &[u8]) -> Result<(ContainerMode, &[u8]), RunpackError> {
    match container.split_first() {
        None => Err(RunpackError::UnknownFormat(
            "container is empty; missing tag byte".to_string(),
        )),
        Some((&TAG_COMPRESSED, payload)) => Ok((ContainerMode::Compressed, payload)),
        Some((&TAG_UNCOMPRESSED, payload)) => Ok((ContainerMode::Uncompressed, payload)),
        Some((&tag, _)) => Err(RunpackError::UnknownFormat(format!(
            "unrecognized tag byte 0x{:02X}",
            tag
        ))),
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_prefers_smaller_encoding() {
        let original = vec![0xAA; 100];
        let encoded = vec![0xAA, 100];
        let (mode, container) = wrap(&original, encoded);
        assert_eq!(mode, ContainerMode::Compressed);
        assert_eq!(container, vec![TAG_COMPRESSED, 0xAA, 100]);
    }

    #[test]
    fn test_wrap_falls_back_to_raw_when_encoding_grows() {
        let original = b"abcd".to_vec();
        let encoded = vec![b'a', 1, b'b', 1, b'c', 1, b'd', 1];
        let (mode, container) = wrap(&original, encoded);
        assert_eq!(mode, ContainerMode::Uncompressed);
        assert_eq!(container[0], TAG_UNCOMPRESSED);
        assert_eq!(&container[1..], original.as_slice());
    }

    #[test]
    fn test_wrap_equal_sizes_stores_raw() {
        // A tie is not a win; store raw.
        let original = vec![1, 2];
        let encoded = vec![1, 1];
        let (mode, _) = wrap(&original, encoded);
        assert_eq!(mode, ContainerMode::Uncompressed);
    }

    #[test]
    fn test_unwrap_roundtrip_both_modes() {
        let (_, compressed) = wrap(&[0u8; 10], vec![0, 10]);
        assert_eq!(
            unwrap(&compressed).unwrap(),
            (ContainerMode::Compressed, [0u8, 10].as_slice())
        );

        let (_, raw) = wrap(b"ab", vec![b'a', 1, b'b', 1]);
        assert_eq!(
            unwrap(&raw).unwrap(),
            (ContainerMode::Uncompressed, b"ab".as_slice())
        );
    }

    #[test]
    fn test_unwrap_empty_container_is_rejected() {
        assert!(matches!(
            unwrap(&[]),
            Err(RunpackError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_unwrap_unknown_tag_is_rejected() {
        assert!(matches!(
            unwrap(b"Xpayload"),
            Err(RunpackError::UnknownFormat(_))
        ));
    }
}
