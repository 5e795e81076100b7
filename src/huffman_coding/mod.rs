//! The huffman module turns a byte stream into a canonical Huffman encoding.
//!
//! The stages run strictly in order: count frequencies, build the code tree, walk it into
//! raw codes, renumber those canonically, then encode. `session::HuffmanSession` enforces
//! that order; the free functions in each submodule are the stages themselves.
//!
//! The tree is deterministic. Leaves are stamped with a tiebreaker in ascending symbol
//! order and merged nodes take the next stamp, so equal weights always resolve the same
//! way no matter how the priority queue is implemented.
//!

pub mod canonical;
pub mod code_table;
pub mod decoder;
pub mod encoder;
pub mod huffman;
pub mod session;
