// In: src/config.rs

//! The single source of truth for all runpack configuration.
//!
//! This module defines the unified `RunpackConfig` struct, which is designed
//! to be created once at the application boundary (e.g., from a user's JSON
//! file) and then passed down through the system via a shared, read-only
//! `Arc<RunpackConfig>`.
//!
//! Keeping the worker count here, rather than querying the host inside the
//! codec, is what lets tests pin it deterministically.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::RunpackError;

/// The unified configuration for a compression or decompression run.
/// This struct is created once and shared throughout the system via an `Arc`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "snake_case")]
pub struct RunpackConfig {
    /// The number of worker threads the codec fans chunks out to.
    /// Defaults to the host's available hardware parallelism, with a floor of
    /// two when that cannot be detected.
    #[serde(default = "default_worker_count")]
    pub worker_count: usize,
}

impl RunpackConfig {
    /// Builds a config with an explicitly pinned worker count.
    /// A worker count of zero is clamped to one.
    pub fn with_worker_count(worker_count: usize) -> Self {
        Self {
            worker_count: worker_count.max(1),
        }
    }

    /// Loads a config from a JSON file. Missing fields fall back to their
    /// defaults via serde.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RunpackError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        Ok(config)
    }
}

// Default implementation to make constructing the config easier.
impl Default for RunpackConfig {
    fn default() -> Self {
        Self {
            worker_count: default_worker_count(),
        }
    }
}

/// Helper for `serde` to provide a default for `worker_count`.
fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_worker_count_is_at_least_one() {
        let config = RunpackConfig::default();
        assert!(config.worker_count >= 1);
    }

    #[test]
    fn test_with_worker_count_clamps_zero() {
        assert_eq!(RunpackConfig::with_worker_count(0).worker_count, 1);
        assert_eq!(RunpackConfig::with_worker_count(4).worker_count, 4);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = RunpackConfig::with_worker_count(3);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: RunpackConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.worker_count, 3);
    }

    #[test]
    fn test_empty_json_object_uses_defaults() {
        let parsed: RunpackConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.worker_count, default_worker_count());
    }
}
