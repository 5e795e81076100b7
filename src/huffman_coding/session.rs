use log::{debug, error};
use std::{fmt::Display, fmt::Formatter};

use crate::bitstream::bit_seq::BitSeq;
use crate::error::{HuffError, Result};
use crate::tools::freq_count::FreqTable;

use super::canonical;
use super::code_table::CodeTable;
use super::encoder;
use super::huffman::{self, Node};

/// Progress of an encoding session. Stages only move forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    #[default]
    Empty,
    FrequenciesCounted,
    TreeBuilt,
    RawCodesGenerated,
    CanonicalCodesGenerated,
    Encoded,
}
impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One text's trip through the coder: count, build, raw codes, canonical codes, encode.
///
/// Every transition runs once. Calling a step early, or calling it again, is an
/// `OutOfOrder` error and leaves the session untouched.
#[derive(Debug, Default)]
pub struct HuffmanSession {
    stage: Stage,
    freqs: Option<FreqTable>,
    tree: Option<Node>,
    raw_codes: Option<CodeTable>,
    canonical_codes: Option<CodeTable>,
}

impl HuffmanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn frequencies(&self) -> Option<&FreqTable> {
        self.freqs.as_ref()
    }

    pub fn raw_codes(&self) -> Option<&CodeTable> {
        self.raw_codes.as_ref()
    }

    pub fn canonical_codes(&self) -> Option<&CodeTable> {
        self.canonical_codes.as_ref()
    }

    /// Fail unless the session sits exactly at `needed`.
    fn expect_stage(&self, op: &'static str, needed: Stage) -> Result<()> {
        if self.stage != needed {
            error!("{} called at stage {}, needs {}", op, self.stage, needed);
            return Err(HuffError::OutOfOrder {
                op,
                stage: self.stage,
            });
        }
        Ok(())
    }

    fn advance(&mut self, to: Stage) {
        debug!("Session stage {} -> {}", self.stage, to);
        self.stage = to;
    }

    /// Count the byte frequencies of `text`.
    pub fn count_frequencies(&mut self, text: &[u8]) -> Result<&FreqTable> {
        self.expect_stage("count_frequencies", Stage::Empty)?;
        let freqs = FreqTable::from_text(text);
        debug!("Counted {} bytes, {} distinct", text.len(), freqs.len());
        self.advance(Stage::FrequenciesCounted);
        Ok(&*self.freqs.insert(freqs))
    }

    /// Build the code tree from the counted frequencies. Fails with `EmptyInput` for an
    /// empty text, leaving the session at `FrequenciesCounted`.
    pub fn build_tree(&mut self) -> Result<()> {
        self.expect_stage("build_tree", Stage::FrequenciesCounted)?;
        let freqs = self.freqs.as_ref().ok_or(HuffError::OutOfOrder {
            op: "build_tree",
            stage: self.stage,
        })?;
        self.tree = Some(huffman::build_tree(freqs)?);
        self.advance(Stage::TreeBuilt);
        Ok(())
    }

    /// Walk the tree into raw codes. The tree is dropped afterwards.
    pub fn generate_codes(&mut self) -> Result<&CodeTable> {
        self.expect_stage("generate_codes", Stage::TreeBuilt)?;
        let tree = self.tree.take().ok_or(HuffError::OutOfOrder {
            op: "generate_codes",
            stage: self.stage,
        })?;
        let codes = huffman::generate_codes(&tree);
        self.advance(Stage::RawCodesGenerated);
        Ok(&*self.raw_codes.insert(codes))
    }

    /// Reassign the raw codes canonically.
    pub fn generate_canonical_codes(&mut self) -> Result<&CodeTable> {
        self.expect_stage("generate_canonical_codes", Stage::RawCodesGenerated)?;
        let raw = self.raw_codes.as_ref().ok_or(HuffError::OutOfOrder {
            op: "generate_canonical_codes",
            stage: self.stage,
        })?;
        let codes = canonical::generate_canonical_codes(raw)?;
        self.advance(Stage::CanonicalCodesGenerated);
        Ok(&*self.canonical_codes.insert(codes))
    }

    /// Encode `text` with the canonical codes, or the raw ones when `use_canonical` is
    /// false. May be repeated; the code tables are never changed by it.
    ///
    /// The session only moves to `Encoded` once the canonical codes exist. A raw encode
    /// made before that leaves the stage alone so canonicalization can still follow.
    pub fn encode(&mut self, text: &[u8], use_canonical: bool) -> Result<BitSeq> {
        let table = if use_canonical {
            self.canonical_codes.as_ref()
        } else {
            self.raw_codes.as_ref()
        };
        let Some(table) = table else {
            error!(
                "encode (canonical: {}) called at stage {}",
                use_canonical, self.stage
            );
            return Err(HuffError::OutOfOrder {
                op: "encode",
                stage: self.stage,
            });
        };
        let out = encoder::encode(text, table)?;
        if self.stage == Stage::CanonicalCodesGenerated {
            self.advance(Stage::Encoded);
        }
        Ok(out)
    }
}
