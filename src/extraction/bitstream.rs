//! Packed bit sequence produced by extraction.

/// Ordered sequence of extracted bits.
///
/// Bits are packed MSB first into bytes, with an explicit bit length.
/// Because packing order matches the 8-bit regrouping used downstream,
/// the first `len() / 8` stored bytes are exactly the byte sequence.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    /// Packed bits; the last byte may be partially filled.
    data: Vec<u8>,
    /// Number of valid bits.
    len: usize,
}

impl BitStream {
    /// Creates an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty stream with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            data: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Appends the low `width` bits of `value`, most significant first.
    ///
    /// `width` must be at most 8.
    pub fn push_bits(&mut self, value: u8, width: u8) {
        debug_assert!(width <= 8);
        for shift in (0..width).rev() {
            self.push((value >> shift) & 1 == 1);
        }
    }

    /// Appends a single bit.
    #[inline]
    pub fn push(&mut self, bit: bool) {
        let offset = self.len % 8;
        if offset == 0 {
            self.data.push(0);
        }
        if bit {
            if let Some(last) = self.data.last_mut() {
                *last |= 0x80 >> offset;
            }
        }
        self.len += 1;
    }

    /// Returns the bit at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.data[index / 8] & (0x80 >> (index % 8)) != 0)
    }

    /// Returns the number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Complete 8-bit groups; a trailing partial group is excluded.
    #[inline]
    pub fn complete_bytes(&self) -> &[u8] {
        &self.data[..self.len / 8]
    }

    /// Renders the stream as '0'/'1' characters.
    pub fn to_binary_string(&self) -> String {
        (0..self.len)
            .map(|i| if self.get(i) == Some(true) { '1' } else { '0' })
            .collect()
    }

    /// Counts the number of set bits.
    pub fn ones(&self) -> usize {
        // Unused trailing bits of the last byte are always zero.
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Calculates bit bias as deviation from 0.5.
    ///
    /// Returns a value in [-0.5, 0.5] where 0.0 is balanced.
    pub fn bit_bias(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        (self.ones() as f64 / self.len as f64) - 0.5
    }
}

impl std::fmt::Debug for BitStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitStream")
            .field("bits", &self.len)
            .field("bytes", &(self.len / 8))
            .field("bit_bias", &format!("{:.4}", self.bit_bias()))
            .finish()
    }
}
