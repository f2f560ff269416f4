//! Block loop for inputs longer than 64 bytes.
//!
//! The input is consumed as whole 64-byte blocks, leaving 1..=64 trailing
//! bytes. The final round always runs over the last 64 bytes of the input, so
//! it may overlap the last full block.

use crate::fetch::fetch64;
use crate::word::{hash_len_16_mul, rotate64, shift_mix, K0, K1, K2};

const BLOCK: usize = 64;
const SEED: u64 = 81;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Pair {
    lo: u64,
    hi: u64,
}

/// Running state: 56 bytes carried between blocks.
#[derive(Debug, Clone, Copy)]
struct State {
    v: Pair,
    w: Pair,
    x: u64,
    y: u64,
    z: u64,
}

impl State {
    fn seeded(first_word: u64) -> Self {
        let y = SEED.wrapping_mul(K1).wrapping_add(113);
        Self {
            v: Pair::default(),
            w: Pair::default(),
            x: SEED.wrapping_mul(K2).wrapping_add(first_word),
            y,
            z: shift_mix(y.wrapping_mul(K2).wrapping_add(113)).wrapping_mul(K2),
        }
    }

    /// One mixing round over a 64-byte block. `weight` scales the feedback
    /// of `w.hi` and `v.lo`; it is 1 inside the loop and 9 for the tail.
    fn round(self, block: &[u8], mul: u64, weight: u64) -> Self {
        let State { v, w, x, y, z } = self;

        let x = x
            .wrapping_add(y)
            .wrapping_add(v.lo)
            .wrapping_add(fetch64(block, 8));
        let x = rotate64(x, 37).wrapping_mul(mul);
        let y = y.wrapping_add(v.hi).wrapping_add(fetch64(block, 48));
        let y = rotate64(y, 42).wrapping_mul(mul);
        let x = x ^ w.hi.wrapping_mul(weight);
        let y = y
            .wrapping_add(v.lo.wrapping_mul(weight))
            .wrapping_add(fetch64(block, 40));
        let z = rotate64(z.wrapping_add(w.lo), 33).wrapping_mul(mul);
        let v_next =
            weak_hash_len_32_with_seeds(block, v.hi.wrapping_mul(mul), x.wrapping_add(w.lo));
        let w_next = weak_hash_len_32_with_seeds(
            &block[32..],
            z.wrapping_add(w.hi),
            y.wrapping_add(fetch64(block, 16)),
        );

        // x and z trade places for the next round.
        State {
            v: v_next,
            w: w_next,
            x: z,
            y,
            z: x,
        }
    }
}

/// Mix 32 bytes of `s` with two seeds into a pair of words.
fn weak_hash_len_32_with_seeds(s: &[u8], a: u64, b: u64) -> Pair {
    weak_hash_len_32_with_seeds_words(
        fetch64(s, 0),
        fetch64(s, 8),
        fetch64(s, 16),
        fetch64(s, 24),
        a,
        b,
    )
}

#[inline]
fn weak_hash_len_32_with_seeds_words(w: u64, x: u64, y: u64, z: u64, a: u64, b: u64) -> Pair {
    let a = a.wrapping_add(w);
    let b = rotate64(b.wrapping_add(a).wrapping_add(z), 21);
    let c = a;
    let a = a.wrapping_add(x).wrapping_add(y);
    let b = b.wrapping_add(rotate64(a, 44));
    Pair {
        lo: a.wrapping_add(z),
        hi: b.wrapping_add(c),
    }
}

pub fn hash_len_65_plus(s: &[u8]) -> u64 {
    let len = s.len();
    assert!(
        len > BLOCK,
        "invalid internal state: block loop called with {} bytes",
        len
    );

    // Full blocks before the last 1..=64 bytes.
    let body_end = ((len - 1) / BLOCK) * BLOCK;
    let last_block_start = body_end + ((len - 1) % BLOCK) + 1 - BLOCK;

    let mut state = s[..body_end]
        .chunks_exact(BLOCK)
        .fold(State::seeded(fetch64(s, 0)), |state, block| {
            state.round(block, K1, 1)
        });

    let mul = K1.wrapping_add((state.z & 0xff) << 1);
    state.w.lo = state.w.lo.wrapping_add(((len - 1) % BLOCK) as u64);
    state.v.lo = state.v.lo.wrapping_add(state.w.lo);
    state.w.lo = state.w.lo.wrapping_add(state.v.lo);

    let State { v, w, x, y, z } = state.round(&s[last_block_start..], mul, 9);

    hash_len_16_mul(
        hash_len_16_mul(v.lo, w.lo, mul)
            .wrapping_add(shift_mix(y).wrapping_mul(K0))
            .wrapping_add(z),
        hash_len_16_mul(v.hi, w.hi, mul).wrapping_add(x),
        mul,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_block_is_final_64_bytes() {
        for len in 65..=400usize {
            let body_end = ((len - 1) / BLOCK) * BLOCK;
            let last_block_start = body_end + ((len - 1) % BLOCK) + 1 - BLOCK;
            assert_eq!(last_block_start, len - BLOCK, "len {}", len);
        }
    }

    #[test]
    fn weak_hash_of_zero_words() {
        assert_eq!(
            weak_hash_len_32_with_seeds_words(0, 0, 0, 0, 0, 0),
            Pair { lo: 0, hi: 0 }
        );
        let p = weak_hash_len_32_with_seeds(&[0u8; 32], 1, 0);
        assert_eq!(p.lo, 1);
        assert_eq!(
            p.hi,
            rotate64(1, 21).wrapping_add(rotate64(1, 44)).wrapping_add(1)
        );
    }

    const ACTION: &[u8] = b"For every action there is an equal and opposite government program.";
    const FUGACITY: &[u8] = b"The fugacity of a constituent in a mixture of gases at a given \
        temperature is proportional to its mole fraction.  Lewis-Randall Rule";

    #[test]
    fn long_vectors() {
        assert_eq!(FUGACITY.len(), 132);
        assert_eq!(hash_len_65_plus(ACTION), 0x5518_2f88_59ec_a4ce);
        assert_eq!(hash_len_65_plus(FUGACITY), 0x098e_ff69_58c5_e91a);
    }

    #[test]
    #[should_panic(expected = "invalid internal state")]
    fn rejects_short_input() {
        hash_len_65_plus(&[0u8; 64]);
    }
}
