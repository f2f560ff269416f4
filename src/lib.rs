//! FarmHash64 and FarmHash32 fingerprint hashes.
//!
//! - Deterministic, non-cryptographic 64-bit fingerprint of any byte slice.
//! - The 32-bit variant folds the 64-bit result; it is NOT Google's
//!   `Fingerprint32`.
//! - Not suitable where an attacker controls the input.

mod fetch;
mod long;
mod short;

pub mod batch;
pub mod build_hasher;
pub mod fingerprint;
pub mod hex;
pub mod word;

pub use batch::{hash_batch, hash_batch32, BatchConfig, BatchError, BatchStats};
pub use build_hasher::{FarmBuildHasher, FarmHasher};
pub use fingerprint::Fingerprint;
pub use hex::{from_hex, to_hex, HexError};
pub use word::{mix_64_to_32, K0, K1, K2};

/// 64-bit fingerprint of `s`.
#[inline]
pub fn farmhash64(s: &[u8]) -> u64 {
    match s.len() {
        0..=16 => short::hash_len_0_to_16(s),
        17..=32 => short::hash_len_17_to_32(s),
        33..=64 => short::hash_len_33_to_64(s),
        _ => long::hash_len_65_plus(s),
    }
}

/// 32-bit fingerprint of `s`, folded from [`farmhash64`].
#[inline]
pub fn farmhash32(s: &[u8]) -> u32 {
    mix_64_to_32(farmhash64(s))
}
