use std::fmt::{Display, Formatter};

use crate::bitstream::bit_seq::BitSeq;
use crate::huffman_coding::code_table::CodeTable;

/// Printable label for a symbol, padded to the table's symbol column.
fn symbol_label(symbol: u8) -> String {
    match symbol {
        b'\n' => "  \\n  ".to_string(),
        b'\t' => "  \\t  ".to_string(),
        b' ' => " space".to_string(),
        s if s.is_ascii_graphic() => format!("   {}  ", s as char),
        s => format!(" {:#04x} ", s),
    }
}

/// Render a code table sorted by (length, symbol).
pub fn code_table_text(codes: &CodeTable, title: &str) -> String {
    let rows = codes
        .lengths()
        .into_iter()
        .filter_map(|(symbol, _)| codes.get(symbol).map(|code| (symbol, code)))
        .map(|(symbol, code)| format!("{} | {}\n", symbol_label(symbol), code))
        .collect::<String>();
    format!("{}:\nSymbol | Code\n-------|----------\n{}", title, rows)
}

/// The first `n` bytes of `bits` in binary, a space between each byte.
pub fn grouped_binary(bits: &BitSeq, n: usize) -> String {
    bits.first_bytes_as_binary(n)
        .as_bytes()
        .chunks(8)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Size of an encoding against its input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionStats {
    pub compressed_bits: usize,
    pub compressed_bytes: usize,
    pub uncompressed_bytes: usize,
}

impl CompressionStats {
    pub fn new(encoded: &BitSeq, input_len: usize) -> Self {
        Self {
            compressed_bits: encoded.len(),
            compressed_bytes: encoded.byte_len(),
            uncompressed_bytes: input_len,
        }
    }

    pub fn uncompressed_bits(&self) -> usize {
        self.uncompressed_bytes * 8
    }

    /// Compressed bits over uncompressed bits. Zero for empty input.
    pub fn ratio(&self) -> f64 {
        if self.uncompressed_bytes == 0 {
            return 0.0;
        }
        self.compressed_bits as f64 / self.uncompressed_bits() as f64
    }

    /// Percentage of space saved.
    pub fn savings(&self) -> f64 {
        if self.uncompressed_bytes == 0 {
            return 0.0;
        }
        (1.0 - self.ratio()) * 100.0
    }
}

impl Display for CompressionStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Compression Statistics:")?;
        writeln!(
            f,
            "Compressed size: {} bits ({} bytes)",
            self.compressed_bits, self.compressed_bytes
        )?;
        writeln!(
            f,
            "Uncompressed size: {} bits ({} bytes)",
            self.uncompressed_bits(),
            self.uncompressed_bytes
        )?;
        writeln!(f, "Compression ratio: {:.4}", self.ratio())?;
        write!(f, "Space savings: {:.2}%", self.savings())
    }
}

#[cfg(test)]
mod test {
    use super::{code_table_text, grouped_binary, CompressionStats};
    use crate::bitstream::bit_seq::BitSeq;
    use crate::huffman_coding::code_table::CodeTable;

    #[test]
    fn table_test() {
        let codes: CodeTable = vec![
            (b' ', "0".parse::<BitSeq>().unwrap()),
            (b'\n', "10".parse::<BitSeq>().unwrap()),
            (b'x', "110".parse::<BitSeq>().unwrap()),
            (0x01, "111".parse::<BitSeq>().unwrap()),
        ]
        .into_iter()
        .collect();
        let text = code_table_text(&codes, "Canonical Huffman Codes");
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "Canonical Huffman Codes:");
        assert_eq!(lines[3], " space | 0");
        assert_eq!(lines[4], "  \\n   | 10");
        assert_eq!(lines[5], " 0x01  | 111");
        assert_eq!(lines[6], "   x   | 110");
        assert_eq!(lines.len(), 7);
        assert!(text.ends_with("110\n"));
    }

    #[test]
    fn grouped_binary_test() {
        let bits: BitSeq = "00000000100100100010101101101110110111".parse().unwrap();
        assert_eq!(grouped_binary(&bits, 2), "00000000 10010010");
        assert_eq!(
            grouped_binary(&bits, 8),
            "00000000 10010010 00101011 01101110 110111"
        );
    }

    #[test]
    fn stats_test() {
        let bits: BitSeq = "00000000100100100010101101101110110111".parse().unwrap();
        let stats = CompressionStats::new(&bits, 15);
        assert_eq!(stats.compressed_bytes, 5);
        assert_eq!(stats.uncompressed_bits(), 120);
        assert!((stats.ratio() - 38.0 / 120.0).abs() < 1e-12);
        let text = stats.to_string();
        assert!(text.contains("Compression ratio: 0.3167"));
        assert!(text.contains("Space savings: 68.33%"));
    }

    #[test]
    fn empty_stats_test() {
        let stats = CompressionStats::new(&BitSeq::new(), 0);
        assert_eq!(stats.ratio(), 0.0);
        assert_eq!(stats.savings(), 0.0);
    }
}
