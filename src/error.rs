//! Error types for the canonical Huffman coder.
//!
//! Every failure is local and synchronous. None of them are transient, so callers get the
//! error back immediately and nothing is retried.

use thiserror::Error;

use crate::huffman_coding::session::Stage;

/// Top-level error type for all operations in the crate.
#[derive(Debug, Error)]
pub enum HuffError {
    /// A session method was called before its prerequisite stage, or a one-shot
    /// transition was repeated.
    #[error("{op} cannot run while the session is at stage {stage}")]
    OutOfOrder { op: &'static str, stage: Stage },

    /// The text to encode holds a byte that has no code in the active table.
    #[error("symbol {symbol:#04x} at position {position} has no code")]
    UnknownSymbol { symbol: u8, position: usize },

    /// A tree was requested for a frequency table with no symbols.
    #[error("empty frequency table: cannot build a code tree")]
    EmptyInput,

    /// Merging two subtrees overflowed the weight type.
    #[error("combined symbol weight overflows u64")]
    WeightOverflow,

    /// A code length outside 1..=127 was handed to the canonical numbering.
    #[error("symbol {symbol:#04x} has unusable code length {length}")]
    CodeLength { symbol: u8, length: u8 },

    /// The code lengths describe more codes than fit at that length.
    #[error("code lengths are oversubscribed at length {length}")]
    Oversubscribed { length: u8 },

    /// The decoder found a bit path that matches no code word.
    #[error("invalid huffman code at bit position {position}")]
    InvalidCode { position: usize },

    /// Driver file or stdin failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, HuffError>;
