use std::{cmp::{Ordering, Reverse}, collections::BinaryHeap};

use super::{FrequencyTable, HuffNode};

/// Entry of the merge queue. Equal weights are ordered by `seq`, the insertion
/// counter, so the first inserted node leaves the queue first.
#[derive(Debug)]
struct HeapNode {
    seq: usize,
    node: HuffNode,
}

impl HeapNode {
    fn new(seq: usize, node: HuffNode) -> Self {
        Self { seq, node }
    }
}

impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node
            .weight()
            .cmp(&other.node.weight())
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for HeapNode {}

impl PartialEq for HeapNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

/// Builds the Huffman tree of `freq` by repeatedly merging the two lightest nodes.
/// The first node taken out becomes the left child.
pub fn create_huffman_tree(freq: &FrequencyTable) -> HuffNode {
    let mut freq_tree = BinaryHeap::new();
    let mut seq = 0;

    for (symbol, count) in freq.present() {
        freq_tree.push(Reverse(HeapNode::new(seq, HuffNode::leaf(symbol, count))));
        seq += 1;
    }

    while let Some(Reverse(first)) = freq_tree.pop() {
        let Some(Reverse(second)) = freq_tree.pop() else {
            log::trace!("huffman tree built after {} insertions", seq);
            return first.node;
        };

        freq_tree.push(Reverse(HeapNode::new(seq, HuffNode::merge(first.node, second.node))));
        seq += 1;
    }

    unreachable!("the frequency table always holds the end-of-data symbol")
}
