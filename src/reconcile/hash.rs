//! Content hashing for change detection.
//!
//! The hash is persisted in the store, so it must be stable across process
//! restarts; SHA-256 over the serialized payload gives that, where the
//! standard library's hasher (randomly seeded per process) would not.

use sha2::{Digest, Sha256};

use crate::presenter::DisplayPayload;

/// Hex SHA-256 digest of the serialized payload.
pub fn payload_hash(payload: &DisplayPayload) -> String {
    let serialized =
        serde_json::to_vec(payload).expect("display payload serializes to JSON");

    let mut hasher = Sha256::new();
    hasher.update(&serialized);
    let digest = hasher.finalize();

    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
