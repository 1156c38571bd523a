//! Leaf-level difference search between two trees

use crate::model::Digest;
use crate::tree::MerkleNode;
use crate::{Error, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// A content mismatch between two corresponding leaves
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Difference {
    /// Data of the leaf in the first tree
    pub left: String,
    /// Data of the leaf in the second tree
    pub right: String,
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Difference found: {} vs. {}", self.left, self.right)
    }
}

/// Find the leaves that differ between two trees of identical shape
///
/// Both trees must have been built over aligned transaction sequences of
/// equal length; the walk verifies leaf/internal alignment at each step and
/// fails with [`Error::ShapeMismatch`] on divergence, but does not check
/// overall shape compatibility up front.
///
/// Subtrees with equal digests are never descended into, and a digest-keyed
/// visited set prunes re-comparison of repeated structural patterns. The
/// set is created fresh here on every call; only the internal recursion
/// threads it through.
///
/// Reports come out in ascending leaf order.
pub fn find_differences(a: &MerkleNode, b: &MerkleNode) -> Result<Vec<Difference>> {
    let mut visited = HashSet::new();
    walk(a, b, &mut visited)
}

fn walk(
    a: &MerkleNode,
    b: &MerkleNode,
    visited: &mut HashSet<Digest>,
) -> Result<Vec<Difference>> {
    // Pair already examined on both sides
    if visited.contains(&a.digest()) && visited.contains(&b.digest()) {
        return Ok(Vec::new());
    }
    visited.insert(a.digest());
    visited.insert(b.digest());

    // Identical subtrees
    if a.digest() == b.digest() {
        return Ok(Vec::new());
    }

    match (a.is_leaf(), b.is_leaf()) {
        (true, true) => {
            let difference = Difference {
                left: a.transaction()?.data.clone(),
                right: b.transaction()?.data.clone(),
            };
            Ok(vec![difference])
        }
        (false, false) => {
            let mut differences = Vec::new();
            if a.left()?.digest() != b.left()?.digest() {
                differences.extend(walk(a.left()?, b.left()?, visited)?);
            }
            if a.right()?.digest() != b.right()?.digest() {
                differences.extend(walk(a.right()?, b.right()?, visited)?);
            }
            Ok(differences)
        }
        _ => Err(Error::ShapeMismatch),
    }
}
