//! Canonical code assignment.
//!
//! Only the length of each code survives. Symbols are ordered by (length, symbol) and
//! numbered consecutively, shifting the running code left whenever the length grows. For
//! example lengths of 2, 2, 3, 3 give the codes 00, 01, 100, 101. Because the numbering
//! depends on nothing but the lengths, a decoder can rebuild the table from
//! [`CodeTable::lengths`] alone.

use log::{debug, trace};

use crate::bitstream::bit_seq::BitSeq;
use crate::error::{HuffError, Result};

use super::code_table::CodeTable;

/// Longest code the canonical numbering accepts. The running code is held in a u128.
pub const MAX_CODE_LEN: u8 = 127;

/// Reassign the bit patterns of `raw` canonically. Every code keeps its length.
pub fn generate_canonical_codes(raw: &CodeTable) -> Result<CodeTable> {
    let codes = canonical_from_lengths(&raw.lengths())?;
    debug!(
        "Canonical codes: {} symbols, longest {} bits",
        codes.len(),
        codes.max_len()
    );
    Ok(codes)
}

/// Build the canonical code table from `(symbol, length)` pairs, in any order.
pub fn canonical_from_lengths(lengths: &[(u8, u8)]) -> Result<CodeTable> {
    let mut len_sym = lengths.iter().map(|&(s, l)| (l, s)).collect::<Vec<_>>();
    len_sym.sort_unstable();

    let mut next_code: u128 = 0;
    let mut current_len: u8 = 0;
    let mut codes = CodeTable::default();

    for (len, symbol) in len_sym {
        if len == 0 || len > MAX_CODE_LEN {
            return Err(HuffError::CodeLength { symbol, length: len });
        }
        // When the length changes, shift left by the difference and continue.
        if len != current_len {
            next_code <<= len - current_len;
            current_len = len;
        }
        if next_code >> len != 0 {
            return Err(HuffError::Oversubscribed { length: len });
        }
        let code = code_bits(next_code, len);
        trace!("{:#04x} -> {}", symbol, code);
        codes.insert(symbol, code);
        next_code += 1;
    }
    Ok(codes)
}

/// `value` as exactly `len` bits, most significant first.
fn code_bits(value: u128, len: u8) -> BitSeq {
    (0..len).rev().map(|i| (value >> i) & 1 == 1).collect()
}
