use std::hash::{BuildHasherDefault, Hasher};

/// Bytes kept on the stack before the buffer spills to the heap.
const INLINE: usize = 64;

/// `Hasher` adapter over [`crate::farmhash64`].
///
/// FarmHash needs the whole input up front, so writes are buffered and
/// hashed once in `finish`. Keys of up to 64 bytes never touch the heap.
#[derive(Clone)]
pub struct FarmHasher {
    inline: [u8; INLINE],
    len: usize,
    spill: Vec<u8>,
}

impl Default for FarmHasher {
    fn default() -> Self {
        Self {
            inline: [0; INLINE],
            len: 0,
            spill: Vec::new(),
        }
    }
}

impl FarmHasher {
    #[inline]
    fn bytes(&self) -> &[u8] {
        if self.spill.is_empty() {
            &self.inline[..self.len]
        } else {
            &self.spill
        }
    }
}

impl Hasher for FarmHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        let end = self.len + bytes.len();
        if self.spill.is_empty() && end <= INLINE {
            self.inline[self.len..end].copy_from_slice(bytes);
            self.len = end;
            return;
        }
        if self.spill.is_empty() {
            self.spill.reserve(end);
            self.spill.extend_from_slice(&self.inline[..self.len]);
        }
        self.spill.extend_from_slice(bytes);
    }

    #[inline]
    fn finish(&self) -> u64 {
        crate::farmhash64(self.bytes())
    }
}

pub type FarmBuildHasher = BuildHasherDefault<FarmHasher>;

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashSet;
    use std::hash::{BuildHasher, Hash};

    #[test]
    fn finish_matches_farmhash64() {
        let mut h = FarmHasher::default();
        h.write(b"0123");
        h.write(b"456789");
        assert_eq!(h.finish(), 0xad05_2244_b781_c4eb);
        assert_eq!(FarmHasher::default().finish(), crate::farmhash64(b""));
    }

    #[test]
    fn spills_past_inline_buffer() {
        let data: Vec<u8> = (0..=255u8).cycle().take(300).collect();
        for split in [0, 1, 40, 64, 65, 200, 300] {
            let mut h = FarmHasher::default();
            h.write(&data[..split]);
            for chunk in data[split..].chunks(7) {
                h.write(chunk);
            }
            assert_eq!(h.finish(), crate::farmhash64(&data), "split {}", split);
        }

        let mut h = FarmHasher::default();
        h.write(&data[..64]);
        assert_eq!(h.finish(), crate::farmhash64(&data[..64]));
        h.write(&[]);
        assert_eq!(h.finish(), crate::farmhash64(&data[..64]));
        h.write(&data[64..65]);
        assert_eq!(h.finish(), crate::farmhash64(&data[..65]));
    }

    #[test]
    fn finish_is_repeatable() {
        let mut h = FarmHasher::default();
        h.write_u64(42);
        assert_eq!(h.finish(), h.finish());
    }

    #[test]
    fn usable_as_set_hasher() {
        let mut seen: HashSet<Vec<u8>, FarmBuildHasher> = HashSet::default();
        assert!(seen.insert(b"abc".to_vec()));
        assert!(seen.insert(b"abd".to_vec()));
        assert!(!seen.insert(b"abc".to_vec()));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn build_hasher_is_stateless() {
        let bh = FarmBuildHasher::default();
        let mut a = bh.build_hasher();
        let mut b = bh.build_hasher();
        "key".hash(&mut a);
        "key".hash(&mut b);
        assert_eq!(a.finish(), b.finish());
    }
}
