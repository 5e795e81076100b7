/// Occurrence count of every byte value in a text.
///
/// Only symbols with a non-zero count are members. Enumeration is always in ascending
/// symbol order, which is the order the tree builder stamps tiebreakers in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqTable {
    counts: [u64; 256],
}

impl FreqTable {
    /// Returns a frequency count of the input data.
    pub fn from_text(data: &[u8]) -> Self {
        let mut counts = [0_u64; 256];
        data.iter().for_each(|&el| counts[el as usize] += 1);
        Self { counts }
    }

    /// Count for `symbol`, zero when absent.
    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Number of distinct symbols present.
    pub fn len(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Sum of every count, which equals the length of the counted text.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(symbol, count)` pairs for present symbols, ascending by symbol.
    ///
    /// Symbols compare as unsigned bytes, so 0x80..=0xFF come after every ASCII byte.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0)
            .map(|(s, &c)| (s as u8, c))
    }
}

impl Default for FreqTable {
    fn default() -> Self {
        Self { counts: [0; 256] }
    }
}

impl FromIterator<(u8, u64)> for FreqTable {
    /// Build a table from explicit counts. Repeated symbols accumulate; zero counts leave
    /// the symbol absent.
    fn from_iter<I: IntoIterator<Item = (u8, u64)>>(iter: I) -> Self {
        let mut table = FreqTable::default();
        for (symbol, count) in iter {
            let slot = &mut table.counts[symbol as usize];
            *slot = slot.saturating_add(count);
        }
        table
    }
}
