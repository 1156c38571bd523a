//! Merkle tree node types

use crate::model::{Digest, Transaction};
use crate::{Error, Result};

/// A node in the Merkle tree
///
/// A node is exactly one of two variants, never a nullable-children hybrid:
/// - `Leaf` wraps one transaction; its digest is the hash of the
///   transaction's data and its depth is 0.
/// - `Internal` owns exactly two children; its digest is the hash of the
///   left child's digest followed by the right child's.
///
/// Nodes are built bottom-up by [`build`](crate::tree::build) and never
/// mutated afterwards, so a finished tree is safe to share across threads
/// for reading.
#[derive(Clone, Debug)]
pub enum MerkleNode {
    /// A leaf derived from one transaction
    Leaf {
        digest: Digest,
        transaction: Transaction,
    },
    /// An internal node derived from two children's digests
    Internal {
        digest: Digest,
        depth: u32,
        left: Box<MerkleNode>,
        right: Box<MerkleNode>,
    },
}

impl MerkleNode {
    /// Create a leaf node from a transaction
    pub fn leaf(transaction: Transaction) -> Self {
        let digest = Digest::digest(transaction.data.as_bytes());
        MerkleNode::Leaf {
            digest,
            transaction,
        }
    }

    /// Create an internal node over two children at the given depth
    pub fn internal(left: MerkleNode, right: MerkleNode, depth: u32) -> Self {
        let digest = Digest::digest_pair(&left.digest(), &right.digest());
        MerkleNode::Internal {
            digest,
            depth,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The node's digest
    pub fn digest(&self) -> Digest {
        match self {
            MerkleNode::Leaf { digest, .. } => *digest,
            MerkleNode::Internal { digest, .. } => *digest,
        }
    }

    /// The node's depth: 0 for leaves, incrementing by one per reduction
    /// level toward the root
    pub fn depth(&self) -> u32 {
        match self {
            MerkleNode::Leaf { .. } => 0,
            MerkleNode::Internal { depth, .. } => *depth,
        }
    }

    /// Whether this node is a leaf
    pub fn is_leaf(&self) -> bool {
        matches!(self, MerkleNode::Leaf { .. })
    }

    /// The left child; fails on a leaf
    pub fn left(&self) -> Result<&MerkleNode> {
        match self {
            MerkleNode::Internal { left, .. } => Ok(left),
            MerkleNode::Leaf { .. } => {
                Err(Error::Structure("leaf node has no left child".into()))
            }
        }
    }

    /// The right child; fails on a leaf
    pub fn right(&self) -> Result<&MerkleNode> {
        match self {
            MerkleNode::Internal { right, .. } => Ok(right),
            MerkleNode::Leaf { .. } => {
                Err(Error::Structure("leaf node has no right child".into()))
            }
        }
    }

    /// The transaction this leaf was built from; fails on an internal node
    pub fn transaction(&self) -> Result<&Transaction> {
        match self {
            MerkleNode::Leaf { transaction, .. } => Ok(transaction),
            MerkleNode::Internal { .. } => Err(Error::Structure(
                "internal node has no transaction associated".into(),
            )),
        }
    }
}
