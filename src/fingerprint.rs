use crate::hex::{from_hex, to_hex, HexError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A FarmHash64 result. Displays as 16 lowercase hex digits.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint(pub u64);

#[derive(Debug, Error)]
pub enum FingerprintError {
    #[error("hex error: {0}")]
    Hex(#[from] HexError),
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] Box<bincode::ErrorKind>),
}

impl Fingerprint {
    #[inline]
    pub fn of(bytes: &[u8]) -> Self {
        Self(crate::farmhash64(bytes))
    }

    #[inline]
    pub fn of_str(s: &str) -> Self {
        Self::of(s.as_bytes())
    }

    #[inline]
    pub fn value(self) -> u64 {
        self.0
    }

    /// The FarmHash32 value for the same input.
    #[inline]
    pub fn to_u32(self) -> u32 {
        crate::word::mix_64_to_32(self.0)
    }

    pub fn to_hex(self) -> String {
        to_hex(self.0)
    }
}

impl From<u64> for Fingerprint {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl From<Fingerprint> for u64 {
    fn from(fp: Fingerprint) -> Self {
        fp.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl FromStr for Fingerprint {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_hex(s).map(Self)
    }
}

/// Encode a fingerprint table with bincode.
#[cfg(feature = "serde")]
pub fn to_bytes(table: &[Fingerprint]) -> Result<Vec<u8>, FingerprintError> {
    Ok(bincode::serialize(table)?)
}

#[cfg(feature = "serde")]
pub fn from_bytes(bytes: &[u8]) -> Result<Vec<Fingerprint>, FingerprintError> {
    Ok(bincode::deserialize(bytes)?)
}

/// Parse one hex fingerprint per non-empty line.
pub fn parse_lines(text: &str) -> Result<Vec<Fingerprint>, FingerprintError> {
    let mut out = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        out.push(line.parse::<Fingerprint>()?);
    }
    Ok(out)
}
