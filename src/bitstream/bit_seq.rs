use std::{
    convert::Infallible,
    fmt::{Display, Formatter},
    str::FromStr,
};

/// An append-only sequence of bits, packed MSB-first into bytes.
///
/// The first bit pushed into a byte lands in bit 7, the eighth in bit 0. Unused low-order
/// bits of the final byte are always zero.
#[derive(Debug, Clone, Default)]
pub struct BitSeq {
    /// Packed bit storage. Holds `ceil(bits / 8)` bytes.
    bytes: Vec<u8>,
    /// Count of valid bits.
    bits: usize,
}

impl BitSeq {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sequence with room for `bits` bits before reallocating.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity((bits + 7) / 8),
            bits: 0,
        }
    }

    /// Append a single bit. A fresh zero byte is started whenever the bit count is a
    /// multiple of 8.
    pub fn push_bit(&mut self, bit: bool) {
        if self.bits % 8 == 0 {
            self.bytes.push(0);
        }
        if bit {
            if let Some(byte) = self.bytes.last_mut() {
                *byte |= 0x80 >> (self.bits % 8);
            }
        }
        self.bits += 1;
    }

    /// Append every bit of `other`, in order.
    pub fn append(&mut self, other: &BitSeq) {
        // Byte aligned: the padding of `other` is already zero, so the bytes copy straight over.
        if self.bits % 8 == 0 {
            self.bytes.extend_from_slice(&other.bytes);
            self.bits += other.bits;
            return;
        }
        other.iter().for_each(|bit| self.push_bit(bit));
    }

    /// Returns the bit at `index`. Positions past the end read as `false`.
    pub fn bit_at(&self, index: usize) -> bool {
        if index >= self.bits {
            return false;
        }
        self.bytes[index / 8] & (0x80 >> (index % 8)) != 0
    }

    /// Total number of bits.
    pub fn len(&self) -> usize {
        self.bits
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Number of bytes needed to hold the bits, `ceil(len / 8)`.
    pub fn byte_len(&self) -> usize {
        (self.bits + 7) / 8
    }

    /// The packed bytes. The last byte is zero padded in its low-order bits.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Iterate over the bits in append order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.bits).map(move |i| self.bit_at(i))
    }

    /// Render every bit as `'0'` or `'1'`.
    pub fn to_binary_text(&self) -> String {
        self.iter().map(|bit| if bit { '1' } else { '0' }).collect()
    }

    /// Render the first `n` bytes (bounded by the bit count) as binary text.
    pub fn first_bytes_as_binary(&self, n: usize) -> String {
        self.iter()
            .take(n.saturating_mul(8))
            .map(|bit| if bit { '1' } else { '0' })
            .collect()
    }

    /// Render up to `limit` bytes (all of them for `None`) as uppercase hex pairs with no
    /// separator. A partial final byte is shown as a full byte.
    pub fn to_hex_text(&self, limit: Option<usize>) -> String {
        self.to_hex_text_delimited(limit, "")
    }

    /// Same as [`BitSeq::to_hex_text`], with `delim` written between bytes.
    pub fn to_hex_text_delimited(&self, limit: Option<usize>, delim: &str) -> String {
        self.bytes
            .iter()
            .take(limit.unwrap_or(self.bytes.len()))
            .map(|byte| format!("{:02X}", byte))
            .collect::<Vec<_>>()
            .join(delim)
    }
}

impl PartialEq for BitSeq {
    /// Equal when the bit counts match and every bit matches. Padding past the bit count
    /// is never compared.
    fn eq(&self, other: &Self) -> bool {
        if self.bits != other.bits {
            return false;
        }
        let full = self.bits / 8;
        if self.bytes[..full] != other.bytes[..full] {
            return false;
        }
        match self.bits % 8 {
            0 => true,
            rem => {
                let mask = 0xff_u8 << (8 - rem);
                self.bytes[full] & mask == other.bytes[full] & mask
            }
        }
    }
}

impl Eq for BitSeq {}

impl FromStr for BitSeq {
    type Err = Infallible;

    /// Build from `'0'`/`'1'` text. Any other character is skipped, so grouped text such
    /// as `"1011 0000"` parses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.chars()
            .filter_map(|c| match c {
                '0' => Some(false),
                '1' => Some(true),
                _ => None,
            })
            .collect())
    }
}

impl FromIterator<bool> for BitSeq {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut seq = BitSeq::new();
        seq.extend(iter);
        seq
    }
}

impl Extend<bool> for BitSeq {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        iter.into_iter().for_each(|bit| self.push_bit(bit));
    }
}

impl Display for BitSeq {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_binary_text())
    }
}
