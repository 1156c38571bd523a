//! Bottom-up tree construction

use super::MerkleNode;
use crate::model::Transaction;
use crate::{Error, Result};

/// Build a Merkle tree over an ordered transaction sequence
///
/// Each transaction becomes a leaf in order, then levels are reduced
/// pairwise until a single root remains. A level with an odd node count
/// pairs its trailing node with a copy of itself, so that node's digest
/// contributes twice to its parent - a deterministic policy, not an error.
///
/// The same sequence always yields the same root digest and shape. A
/// single-transaction input returns its leaf directly as the root.
pub fn build(transactions: Vec<Transaction>) -> Result<MerkleNode> {
    if transactions.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut nodes: Vec<MerkleNode> = transactions.into_iter().map(MerkleNode::leaf).collect();
    let mut depth = 1u32;

    while nodes.len() > 1 {
        if nodes.len() % 2 == 1 {
            let last = nodes[nodes.len() - 1].clone();
            nodes.push(last);
        }

        let mut parents = Vec::with_capacity(nodes.len() / 2);
        let mut children = nodes.into_iter();
        while let (Some(left), Some(right)) = (children.next(), children.next()) {
            parents.push(MerkleNode::internal(left, right, depth));
        }

        nodes = parents;
        depth += 1;
    }

    // Exactly one node remains at this point
    nodes.pop().ok_or(Error::EmptyInput)
}
