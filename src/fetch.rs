/// Little-endian u32 at `offset`, widened to u64.
#[inline(always)]
pub fn fetch32(buf: &[u8], offset: usize) -> u64 {
    assert!(
        offset + 4 <= buf.len(),
        "invalid internal state: fetch32 at {} past buffer of {} bytes",
        offset,
        buf.len()
    );
    let mut word = [0u8; 4];
    word.copy_from_slice(&buf[offset..offset + 4]);
    u32::from_le_bytes(word) as u64
}

/// Little-endian u64 at `offset`.
#[inline(always)]
pub fn fetch64(buf: &[u8], offset: usize) -> u64 {
    assert!(
        offset + 8 <= buf.len(),
        "invalid internal state: fetch64 at {} past buffer of {} bytes",
        offset,
        buf.len()
    );
    let mut word = [0u8; 8];
    word.copy_from_slice(&buf[offset..offset + 8]);
    u64::from_le_bytes(word)
}
