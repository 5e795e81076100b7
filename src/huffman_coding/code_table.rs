use std::collections::BTreeMap;

use crate::bitstream::bit_seq::BitSeq;

/// Symbol to code word mapping, enumerated in ascending symbol order.
///
/// Tables are filled once by the code generators and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, BitSeq>,
}

impl CodeTable {
    pub(crate) fn insert(&mut self, symbol: u8, code: BitSeq) {
        self.codes.insert(symbol, code);
    }

    /// Code word for `symbol`, if it has one.
    pub fn get(&self, symbol: u8) -> Option<&BitSeq> {
        self.codes.get(&symbol)
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs ascending by symbol.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitSeq)> + '_ {
        self.codes.iter().map(|(&s, c)| (s, c))
    }

    /// Length of the longest code word, zero for an empty table.
    pub fn max_len(&self) -> usize {
        self.codes.values().map(BitSeq::len).max().unwrap_or(0)
    }

    /// `(symbol, length)` pairs sorted by length, then symbol. This is all a decoder needs to
    /// rebuild the canonical table. Lengths past 255 saturate.
    pub fn lengths(&self) -> Vec<(u8, u8)> {
        let mut lengths = self
            .codes
            .iter()
            .map(|(&s, c)| (s, u8::try_from(c.len()).unwrap_or(u8::MAX)))
            .collect::<Vec<_>>();
        lengths.sort_unstable_by_key(|&(s, len)| (len, s));
        lengths
    }
}

impl FromIterator<(u8, BitSeq)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (u8, BitSeq)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}
