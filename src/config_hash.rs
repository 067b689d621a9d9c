// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Fingerprints of rendered configuration.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Calculate the SHA-256 hash of `data`'s JSON serialization.
///
/// The result is what callers pass to the workload builder as the config hash:
/// identical config always hashes the same, and any change produces a new value
/// that forces a rollout.
///
/// # Example
///
/// ```rust
/// use designate_operator::config_hash::compute_config_hash;
/// use std::collections::BTreeMap;
///
/// let mut data = BTreeMap::new();
/// data.insert("designate.conf", "[DEFAULT]\ndebug = true\n");
/// assert_eq!(compute_config_hash(&data).len(), 64);
/// ```
pub fn compute_config_hash<T: Serialize>(data: &T) -> String {
    let json = serde_json::to_string(data).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    format!("{:x}", hasher.finalize())
}
