//! Byte frequency analysis.

/// Number of distinct symbols (byte values).
pub const ALPHABET_SIZE: usize = 256;

/// Occurrence count for each of the 256 byte values.
///
/// # Invariants
/// - Entries for bytes absent from the input are zero
/// - At least one entry is nonzero for any non-empty input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
}

impl FrequencyTable {
    /// Create an all-zero table.
    pub fn new() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
        }
    }

    /// Count every byte of `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        table.count(data);
        table
    }

    /// Add the bytes of `data` to the running counts.
    pub fn count(&mut self, data: &[u8]) {
        for &byte in data {
            self.counts[byte as usize] += 1;
        }
    }

    /// Count for a single byte value.
    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Overwrite the count for a single byte value.
    pub fn set(&mut self, symbol: u8, count: u64) {
        self.counts[symbol as usize] = count;
    }

    /// Number of byte values with a nonzero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Iterate `(symbol, count)` for present symbols in ascending byte order.
    pub fn present(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(i, &c)| (i as u8, c))
    }

    /// Give a lone symbol a partner so a two-leaf tree can be built.
    ///
    /// The partner is the preceding byte value, or `1` when the symbol is `0`.
    /// It receives a count of one and never appears in the payload. Returns
    /// the partner, or `None` if the table does not hold exactly one symbol.
    pub fn pair_single_symbol(&mut self) -> Option<u8> {
        if self.distinct() != 1 {
            return None;
        }
        let (symbol, _) = self.present().next()?;
        let partner = if symbol > 0 { symbol - 1 } else { 1 };
        self.counts[partner as usize] += 1;
        Some(partner)
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}
