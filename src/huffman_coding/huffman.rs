use log::{debug, trace};

use crate::bitstream::bit_seq::BitSeq;
use crate::error::{HuffError, Result};
use crate::tools::freq_count::FreqTable;

use super::code_table::CodeTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

/// A node of the code tree. Internal nodes own both children outright.
#[derive(Debug, Clone)]
pub struct Node {
    /// Symbol count for a leaf, sum of both children for an internal node.
    pub weight: u64,
    /// Creation order stamp, used only to break weight ties.
    pub tiebreaker: u32,
    /// Longest path from this node down to a leaf.
    pub depth: u8,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new leaf
    pub fn leaf(symbol: u8, weight: u64, tiebreaker: u32) -> Node {
        Node {
            weight,
            tiebreaker,
            depth: 0,
            node_data: NodeData::Leaf(symbol),
        }
    }

    /// Join two subtrees under a new parent. `left` takes the 0 branch.
    pub fn join(left: Node, right: Node, tiebreaker: u32) -> Result<Node> {
        let weight = left
            .weight
            .checked_add(right.weight)
            .ok_or(HuffError::WeightOverflow)?;
        Ok(Node {
            weight,
            tiebreaker,
            depth: left.depth.max(right.depth) + 1,
            node_data: NodeData::Kids(Box::new(left), Box::new(right)),
        })
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// Count of (leaves, internal nodes) in this subtree.
    pub fn node_counts(&self) -> (usize, usize) {
        match &self.node_data {
            NodeData::Leaf(_) => (1, 0),
            NodeData::Kids(left, right) => {
                let (ll, li) = left.node_counts();
                let (rl, ri) = right.node_counts();
                (ll + rl, li + ri + 1)
            }
        }
    }
}

impl Ord for Node {
    /// Sort Nodes by decreasing weight and decreasing tiebreaker, so the max-heap hands out
    /// the lightest, earliest created node first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.tiebreaker.cmp(&self.tiebreaker))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

/// Build the code tree for a frequency table.
///
/// Leaves are stamped with tiebreakers in ascending symbol order. The two lowest priority
/// nodes are merged until one remains; the first one taken becomes the left child. Fails
/// with `EmptyInput` when the table has no symbols.
pub fn build_tree(freqs: &FreqTable) -> Result<Node> {
    let mut next_tiebreaker: u32 = 0;
    let mut heap = BinaryHeap::with_capacity(freqs.len());
    for (symbol, weight) in freqs.iter() {
        heap.push(Node::leaf(symbol, weight, next_tiebreaker));
        next_tiebreaker += 1;
    }

    loop {
        let left = heap.pop().ok_or(HuffError::EmptyInput)?;
        let Some(right) = heap.pop() else {
            debug!(
                "Built code tree: {} symbols, weight {}, depth {}",
                freqs.len(),
                left.weight,
                left.depth
            );
            return Ok(left);
        };
        trace!(
            "merge ({}, #{}) + ({}, #{}) -> #{}",
            left.weight,
            left.tiebreaker,
            right.weight,
            right.tiebreaker,
            next_tiebreaker
        );
        heap.push(Node::join(left, right, next_tiebreaker)?);
        next_tiebreaker += 1;
    }
}

/// Walk the tree and record each leaf's path (0 = left, 1 = right) as its code.
///
/// A root that is itself a leaf has no path, so its symbol gets the one-bit code `0`.
pub fn generate_codes(root: &Node) -> CodeTable {
    let mut codes = CodeTable::default();
    match root.node_data {
        NodeData::Leaf(symbol) => {
            debug!("Single symbol {:#04x}: assigning code 0", symbol);
            codes.insert(symbol, std::iter::once(false).collect());
        }
        NodeData::Kids(..) => walk(root, BitSeq::new(), &mut codes),
    }
    codes
}

fn walk(node: &Node, path: BitSeq, codes: &mut CodeTable) {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            let mut left_path = path.clone();
            left_path.push_bit(false);
            walk(left, left_path, codes);

            let mut right_path = path;
            right_path.push_bit(true);
            walk(right, right_path, codes);
        }
        NodeData::Leaf(symbol) => {
            trace!("{:#04x} -> {}", symbol, path);
            codes.insert(*symbol, path);
        }
    }
}

#[cfg(test)]
mod test {
    use super::{build_tree, generate_codes, Node, NodeData};
    use crate::error::HuffError;
    use crate::tools::freq_count::FreqTable;

    fn code_text(table: &crate::huffman_coding::code_table::CodeTable) -> Vec<(char, String)> {
        table
            .iter()
            .map(|(s, c)| (s as char, c.to_binary_text()))
            .collect()
    }

    #[test]
    fn worked_example_raw_codes_test() {
        let freqs = FreqTable::from_text(b"AAAABBBCCCDDEEF");
        let root = build_tree(&freqs).unwrap();
        assert_eq!(root.weight, 15);
        let codes = generate_codes(&root);
        let expected = [
            ('A', "10"),
            ('B', "111"),
            ('C', "00"),
            ('D', "011"),
            ('E', "110"),
            ('F', "010"),
        ]
        .iter()
        .map(|&(c, s)| (c, s.to_string()))
        .collect::<Vec<_>>();
        assert_eq!(code_text(&codes), expected);
    }

    #[test]
    fn node_count_test() {
        let freqs = FreqTable::from_text(b"the quick brown fox jumps over the lazy dog");
        let root = build_tree(&freqs).unwrap();
        let (leaves, internal) = root.node_counts();
        assert_eq!(leaves, freqs.len());
        assert_eq!(internal, leaves - 1);
        assert_eq!(root.weight, freqs.total());
    }

    #[test]
    fn tie_break_test() {
        // Equal weights: the earlier stamped (lower) symbol is taken first and goes left.
        let freqs: FreqTable = vec![(b'b', 5_u64), (b'a', 5)].into_iter().collect();
        let root = build_tree(&freqs).unwrap();
        match &root.node_data {
            NodeData::Kids(left, right) => {
                assert_eq!(left.node_data, NodeData::Leaf(b'a'));
                assert_eq!(right.node_data, NodeData::Leaf(b'b'));
                assert_eq!(root.tiebreaker, 2);
            }
            NodeData::Leaf(_) => panic!("two symbols must merge"),
        }
    }

    #[test]
    fn merged_node_loses_tie_to_older_leaf_test() {
        // a+b merge into weight 2 (#3), which ties with c (#2); c is older so it is taken first.
        let freqs: FreqTable = vec![(b'a', 1_u64), (b'b', 1), (b'c', 2)].into_iter().collect();
        let codes = generate_codes(&build_tree(&freqs).unwrap());
        assert_eq!(codes.get(b'c').unwrap().to_binary_text(), "0");
        assert_eq!(codes.get(b'a').unwrap().to_binary_text(), "10");
        assert_eq!(codes.get(b'b').unwrap().to_binary_text(), "11");
    }

    #[test]
    fn single_symbol_test() {
        let freqs = FreqTable::from_text(b"zzzz");
        let root = build_tree(&freqs).unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.node_counts(), (1, 0));
        let codes = generate_codes(&root);
        assert_eq!(codes.len(), 1);
        assert_eq!(codes.get(b'z').unwrap().to_binary_text(), "0");
    }

    #[test]
    fn empty_table_test() {
        let freqs = FreqTable::from_text(b"");
        assert!(matches!(build_tree(&freqs), Err(HuffError::EmptyInput)));
    }

    #[test]
    fn weight_overflow_test() {
        let freqs: FreqTable = vec![(1_u8, u64::MAX), (2, 1)].into_iter().collect();
        assert!(matches!(build_tree(&freqs), Err(HuffError::WeightOverflow)));
    }

    #[test]
    fn heap_order_test() {
        let light = Node::leaf(b'x', 1, 9);
        let heavy = Node::leaf(b'y', 2, 0);
        let old = Node::leaf(b'z', 1, 3);
        // Greater means "comes out of the heap first".
        assert!(light > heavy);
        assert!(old > light);
    }
}
