use log::debug;

use crate::bitstream::bit_seq::BitSeq;
use crate::error::{HuffError, Result};

use super::code_table::CodeTable;

/// Map `text` through `codes` into one bit sequence, in input order.
///
/// Fails with `UnknownSymbol` on the first byte that has no code, for example when the
/// text differs from the one the table was built from.
pub fn encode(text: &[u8], codes: &CodeTable) -> Result<BitSeq> {
    // Code words are looked up once per distinct byte, not once per input byte.
    let mut lookup: [Option<&BitSeq>; 256] = [None; 256];
    for (symbol, code) in codes.iter() {
        lookup[symbol as usize] = Some(code);
    }

    let mut out = BitSeq::with_capacity(text.len().saturating_mul(codes.max_len().max(1)));
    for (position, &symbol) in text.iter().enumerate() {
        let code = lookup[symbol as usize].ok_or(HuffError::UnknownSymbol { symbol, position })?;
        out.append(code);
    }
    debug!(
        "Encoded {} bytes into {} bits ({} bytes)",
        text.len(),
        out.len(),
        out.byte_len()
    );
    Ok(out)
}
