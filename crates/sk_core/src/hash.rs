//! Deterministic content hashing.

use ahash::RandomState;
use std::sync::OnceLock;

/// Sentinel stored in a memoized hash slot before the hash is computed.
pub const HASH_UNKNOWN: u64 = u64::MAX;

// The top bit is reserved for the sentinel; computed hashes never set it.
const HASH_MASK: u64 = !(1u64 << 63);

fn state() -> &'static RandomState {
    static STATE: OnceLock<RandomState> = OnceLock::new();
    STATE.get_or_init(|| {
        RandomState::with_seeds(
            0x243f_6a88_85a3_08d3,
            0x1319_8a2e_0370_7344,
            0xa409_3822_299f_31d0,
            0x082e_fa98_ec4e_6c89,
        )
    })
}

/// Hash raw bytes. Equal contents always hash equal, and the result never
/// collides with `HASH_UNKNOWN`.
#[inline]
pub fn hash_bytes(bytes: &[u8]) -> u64 {
    state().hash_one(bytes) & HASH_MASK
}
