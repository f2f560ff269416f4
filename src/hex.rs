use thiserror::Error;

/// Length of a hex-encoded 64-bit fingerprint.
pub const HEX_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("expected 16 hex digits, got {0} bytes")]
    InvalidLength(usize),
    #[error("invalid hex digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },
}

/// Format as fixed-width lowercase hex (16 chars).
pub fn to_hex(h: u64) -> String {
    format!("{:016x}", h)
}

/// Parse exactly 16 hex digits, either case.
pub fn from_hex(s: &str) -> Result<u64, HexError> {
    if s.len() != HEX_LEN {
        return Err(HexError::InvalidLength(s.len()));
    }
    let mut out = 0u64;
    for (position, found) in s.chars().enumerate() {
        let digit = found
            .to_digit(16)
            .ok_or(HexError::InvalidDigit { position, found })?;
        out = (out << 4) | digit as u64;
    }
    Ok(out)
}
