//! The bitstream module holds the bit container used by every stage of the coder.
//!
//! Code words and the final encoded output are both `BitSeq`s. Bits are packed MSB-first,
//! so the hex rendering of a sequence reads in the same order as its binary rendering.
//!
pub mod bit_seq;
