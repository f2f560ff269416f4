//! Word-level mixing primitives shared by every length path.

/// Some primes between 2^63 and 2^64.
pub const K0: u64 = 0xc3a5_c85c_97cb_3127;
pub const K1: u64 = 0xb492_b66f_be98_f273;
pub const K2: u64 = 0x9ae1_6a3b_2f90_404f;

/// Murmur3 magic numbers for the 32-bit fold.
pub const C1: u32 = 0xcc9e_2d51;
pub const C2: u32 = 0x1b87_3593;

/// Rotate right. Shift amounts of 0 or >= 64 leave the value untouched.
#[inline(always)]
pub const fn rotate64(val: u64, shift: u32) -> u64 {
    if shift == 0 || shift >= 64 {
        return val;
    }
    val.rotate_right(shift)
}

/// 32-bit rotate right with the same out-of-range rule as [`rotate64`].
#[inline(always)]
pub const fn rotate32(val: u32, shift: u32) -> u32 {
    if shift == 0 || shift >= 32 {
        return val;
    }
    val.rotate_right(shift)
}

#[inline(always)]
pub const fn shift_left(val: u64, shift: u32) -> u64 {
    if shift == 0 || shift >= 64 {
        return val;
    }
    val << shift
}

#[inline(always)]
pub const fn shift_right(val: u64, shift: u32) -> u64 {
    if shift == 0 || shift >= 64 {
        return val;
    }
    val >> shift
}

#[inline(always)]
pub const fn shift_mix(val: u64) -> u64 {
    val ^ shift_right(val, 47)
}

/// Compress two words under a length-dependent multiplier.
#[inline]
pub const fn hash_len_16_mul(u: u64, v: u64, mul: u64) -> u64 {
    let a = shift_mix((u ^ v).wrapping_mul(mul));
    let b = shift_mix((v ^ a).wrapping_mul(mul));
    b.wrapping_mul(mul)
}

#[inline]
pub const fn mur(a: u32, h: u32) -> u32 {
    let a = rotate32(a.wrapping_mul(C1), 17).wrapping_mul(C2);
    let h = rotate32(h ^ a, 19);
    h.wrapping_mul(5).wrapping_add(0xe654_6b64)
}

/// Fold a 64-bit fingerprint into 32 bits.
#[inline]
pub const fn mix_64_to_32(x: u64) -> u32 {
    mur((x >> 32) as u32, x as u32)
}
