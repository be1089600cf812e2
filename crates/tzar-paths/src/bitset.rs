/// Fixed-size bit set over chunk-major tile indices.
///
/// Backed by `u64` words; never grows after construction.
#[derive(Debug, Clone)]
pub struct TileBitSet {
    words: Vec<u64>,
    bits: usize,
}

impl TileBitSet {
    /// A set able to hold indices `0..bits`, all clear.
    pub fn new(bits: usize) -> Self {
        Self {
            words: vec![0; bits.div_ceil(64)],
            bits,
        }
    }

    /// Number of addressable bits.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.bits
    }

    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < self.bits, "bit {idx} out of {}", self.bits);
        self.words[idx >> 6] |= 1u64 << (idx & 63);
    }

    #[inline]
    pub fn clear(&mut self, idx: usize) {
        debug_assert!(idx < self.bits, "bit {idx} out of {}", self.bits);
        self.words[idx >> 6] &= !(1u64 << (idx & 63));
    }

    #[inline]
    pub fn test(&self, idx: usize) -> bool {
        idx < self.bits && self.words[idx >> 6] & (1u64 << (idx & 63)) != 0
    }

    /// Clear every bit. O(capacity / 64).
    pub fn clear_all(&mut self) {
        self.words.fill(0);
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}
