//! Canonical Huffman coding of byte streams.
//!
//! Version 0.1.0
//!
//! Counts the byte frequencies of a text, builds a deterministic Huffman tree, renumbers the
//! tree's codes canonically and packs the text into a bit sequence with those codes. The
//! same input always gives the same bits: tree merges break weight ties by creation order,
//! and the canonical codes depend only on each symbol's code length.
//!
//! Basic usage:
//!
//! ```
//! use canon_huff::huffman_coding::session::HuffmanSession;
//!
//! let text = b"AAAABBBCCCDDEEF";
//! let mut session = HuffmanSession::new();
//! session.count_frequencies(text)?;
//! session.build_tree()?;
//! session.generate_codes()?;
//! session.generate_canonical_codes()?;
//! let bits = session.encode(text, true)?;
//! assert_eq!(bits.to_binary_text(), "00000000100100100010101101101110110111");
//! # Ok::<(), canon_huff::error::HuffError>(())
//! ```
//!
pub mod bitstream;
pub mod error;
pub mod huffman_coding;
pub mod tools;
