//! Canonical decoding.
//!
//! The decoder never sees a tree. It rebuilds the canonical table from `(symbol, length)`
//! pairs and then reads bits one at a time, accumulating a value until `(length, value)`
//! names a code word. Since the code set is prefix-free the first hit is the only one.

use log::debug;
use rustc_hash::FxHashMap;

use crate::bitstream::bit_seq::BitSeq;
use crate::error::{HuffError, Result};

use super::canonical::canonical_from_lengths;
use super::code_table::CodeTable;

pub struct CanonicalDecoder {
    /// (code length, code value) -> symbol
    codes: FxHashMap<(u8, u128), u8>,
    max_len: u8,
}

impl CanonicalDecoder {
    /// Rebuild the decoder from the compact `(symbol, length)` header form.
    pub fn from_lengths(lengths: &[(u8, u8)]) -> Result<Self> {
        Ok(Self::from_table(&canonical_from_lengths(lengths)?))
    }

    /// Build a decoder straight from a prefix-free code table.
    fn from_table(table: &CodeTable) -> Self {
        let mut codes = FxHashMap::default();
        let mut max_len: u8 = 0;
        for (symbol, code) in table.iter() {
            // Canonical tables never exceed MAX_CODE_LEN, so lengths fit in a u8.
            let len = code.len() as u8;
            let value = code.iter().fold(0_u128, |acc, bit| (acc << 1) | bit as u128);
            codes.insert((len, value), symbol);
            max_len = max_len.max(len);
        }
        Self { codes, max_len }
    }

    /// Decode every bit of `bits`. Fails with `InvalidCode` when a path grows past the
    /// longest code word or the input ends in the middle of one.
    pub fn decode(&self, bits: &BitSeq) -> Result<Vec<u8>> {
        let mut out = vec![];
        let mut len: u8 = 0;
        let mut value: u128 = 0;
        let mut start = 0;

        for (position, bit) in bits.iter().enumerate() {
            if len == 0 {
                start = position;
            }
            value = (value << 1) | bit as u128;
            len += 1;
            if let Some(&symbol) = self.codes.get(&(len, value)) {
                out.push(symbol);
                len = 0;
                value = 0;
            } else if len >= self.max_len {
                return Err(HuffError::InvalidCode { position: start });
            }
        }
        if len > 0 {
            return Err(HuffError::InvalidCode { position: start });
        }
        debug!("Decoded {} bits into {} bytes", bits.len(), out.len());
        Ok(out)
    }
}
