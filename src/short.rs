//! Hash paths for inputs of at most 64 bytes.

use crate::fetch::{fetch32, fetch64};
use crate::word::{hash_len_16_mul, rotate64, shift_mix, K0, K1, K2};

#[inline]
fn len_mul(len: usize) -> u64 {
    K2.wrapping_add((len as u64).wrapping_mul(2))
}

pub fn hash_len_0_to_16(s: &[u8]) -> u64 {
    let len = s.len();
    assert!(
        len <= 16,
        "invalid internal state: 0..=16 path called with {} bytes",
        len
    );

    if len >= 8 {
        let mul = len_mul(len);
        let a = fetch64(s, 0).wrapping_add(K2);
        let b = fetch64(s, len - 8);
        let c = rotate64(b, 37).wrapping_mul(mul).wrapping_add(a);
        let d = rotate64(a, 25).wrapping_add(b).wrapping_mul(mul);
        return hash_len_16_mul(c, d, mul);
    }

    if len >= 4 {
        let mul = len_mul(len);
        let a = fetch32(s, 0);
        return hash_len_16_mul((len as u64).wrapping_add(a << 3), fetch32(s, len - 4), mul);
    }

    if len > 0 {
        let a = s[0] as u64;
        let b = s[len >> 1] as u64;
        let c = s[len - 1] as u64;
        let y = a + (b << 8);
        let z = len as u64 + (c << 2);
        return shift_mix(y.wrapping_mul(K2) ^ z.wrapping_mul(K0)).wrapping_mul(K2);
    }

    K2
}

pub fn hash_len_17_to_32(s: &[u8]) -> u64 {
    let len = s.len();
    assert!(
        (17..=32).contains(&len),
        "invalid internal state: 17..=32 path called with {} bytes",
        len
    );

    let mul = len_mul(len);
    let a = fetch64(s, 0).wrapping_mul(K1);
    let b = fetch64(s, 8);
    let c = fetch64(s, len - 8).wrapping_mul(mul);
    let d = fetch64(s, len - 16).wrapping_mul(K2);
    hash_len_16_mul(
        rotate64(a.wrapping_add(b), 43)
            .wrapping_add(rotate64(c, 30))
            .wrapping_add(d),
        a.wrapping_add(rotate64(b.wrapping_add(K2), 18))
            .wrapping_add(c),
        mul,
    )
}

pub fn hash_len_33_to_64(s: &[u8]) -> u64 {
    let len = s.len();
    assert!(
        (33..=64).contains(&len),
        "invalid internal state: 33..=64 path called with {} bytes",
        len
    );

    let mul = len_mul(len);
    let a = fetch64(s, 0).wrapping_mul(K2);
    let b = fetch64(s, 8);
    let c = fetch64(s, len - 8).wrapping_mul(mul);
    let d = fetch64(s, len - 16).wrapping_mul(K2);
    let y = rotate64(a.wrapping_add(b), 43)
        .wrapping_add(rotate64(c, 30))
        .wrapping_add(d);
    let z = hash_len_16_mul(
        y,
        a.wrapping_add(rotate64(b.wrapping_add(K2), 18))
            .wrapping_add(c),
        mul,
    );

    // Second half folds in the words at 16, 24, len-32 and len-24.
    let e = fetch64(s, 16).wrapping_mul(mul);
    let f = fetch64(s, 24);
    let g = y.wrapping_add(fetch64(s, len - 32)).wrapping_mul(mul);
    let h = z.wrapping_add(fetch64(s, len - 24)).wrapping_mul(mul);
    hash_len_16_mul(
        rotate64(e.wrapping_add(f), 43)
            .wrapping_add(rotate64(g, 30))
            .wrapping_add(h),
        e.wrapping_add(rotate64(f.wrapping_add(a), 18))
            .wrapping_add(g),
        mul,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_k2() {
        assert_eq!(hash_len_0_to_16(b""), K2);
    }

    #[test]
    fn tiny_inputs() {
        assert_eq!(hash_len_0_to_16(b"a"), 0xb345_4265_b6df_75e3);
        assert_eq!(hash_len_0_to_16(b"ab"), 0xaa8d_6e52_42ad_a51e);
        assert_eq!(hash_len_0_to_16(b"abc"), 0x24a5_b3a0_74e7_f369);
    }

    #[test]
    fn four_to_seven_bytes() {
        assert_eq!(hash_len_0_to_16(b"abcd"), 0x1a55_02de_4a1f_8101);
        assert_eq!(hash_len_0_to_16(b"abcdefg"), 0x3c40_c92b_1ccb_7355);
    }

    #[test]
    fn eight_to_sixteen_bytes() {
        assert_eq!(hash_len_0_to_16(b"abcdefgh"), 0xfee9_d229_90c8_2909);
        assert_eq!(hash_len_0_to_16(b"0123456789'01234"), 0x4283_d4ef_4362_7f64);
    }

    #[test]
    fn seventeen_to_thirtytwo_bytes() {
        assert_eq!(
            hash_len_17_to_32(b"0123456789=012345"),
            0x46a7_416e_d486_1e3b
        );
        assert_eq!(
            hash_len_17_to_32(b"C is as portable as Stonehedge!!"),
            0xb944_f8a1_6261_e414
        );
    }

    #[test]
    fn thirtythree_to_sixtyfour_bytes() {
        assert_eq!(
            hash_len_33_to_64(b"Discard medicine more than two years old."),
            0xe8f8_9ab6_df9b_dd25
        );
        assert_eq!(
            hash_len_33_to_64(b"He who has a shady past knows that nice guys finish last."),
            0x786d_7e19_8702_3ca9
        );
    }

    #[test]
    #[should_panic(expected = "invalid internal state")]
    fn first_path_rejects_seventeen_bytes() {
        hash_len_0_to_16(&[0u8; 17]);
    }

    #[test]
    #[should_panic(expected = "invalid internal state")]
    fn second_path_rejects_sixteen_bytes() {
        hash_len_17_to_32(&[0u8; 16]);
    }

    #[test]
    #[should_panic(expected = "invalid internal state")]
    fn third_path_rejects_sixty_five_bytes() {
        hash_len_33_to_64(&[0u8; 65]);
    }
}
