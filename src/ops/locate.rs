//! Index-guided leaf lookup

use crate::model::Transaction;
use crate::tree::MerkleNode;
use crate::{Error, Result};

/// Return the leaf data recorded at `index`, found by descending the tree
///
/// The descent tracks the first index covered by the current subtree: at an
/// internal node of depth `d` the left child covers the next `2^(d-1)`
/// positions, so each step is one comparison and the whole lookup is
/// O(depth) without scanning leaves.
///
/// Landing on a leaf whose recorded index disagrees with the requested one
/// fails with [`Error::IndexMismatch`]. That covers out-of-range indices
/// too: positions past `n - 1` exist only as duplicated padding leaves,
/// which keep the index of the transaction they were copied from, so a
/// lookup there always mismatches.
pub fn locate(root: &MerkleNode, index: u64) -> Result<&str> {
    let mut node = root;
    let mut offset = 0u64;

    while !node.is_leaf() {
        let left_span = 1u64 << (node.depth() - 1);
        if index < offset + left_span {
            node = node.left()?;
        } else {
            offset += left_span;
            node = node.right()?;
        }
    }

    let transaction = node.transaction()?;
    if transaction.index != index {
        return Err(Error::IndexMismatch {
            expected: index,
            found: transaction.index,
        });
    }
    Ok(&transaction.data)
}

/// Check whether the tree's leaf at the target's index carries the
/// target's data
pub fn matches(root: &MerkleNode, target: &Transaction) -> Result<bool> {
    Ok(locate(root, target.index)? == target.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build;

    fn tree(items: &[&str]) -> MerkleNode {
        build(Transaction::sequence(items.iter().copied())).unwrap()
    }

    #[test]
    fn test_locate_every_index() {
        let items = ["a", "b", "c", "d", "e"];
        let t = tree(&items);

        for (i, item) in items.iter().enumerate() {
            assert_eq!(locate(&t, i as u64).unwrap(), *item);
        }
    }

    #[test]
    fn test_locate_single_leaf_tree() {
        let t = tree(&["only"]);
        assert_eq!(locate(&t, 0).unwrap(), "only");
    }

    #[test]
    fn test_matches_true_and_false() {
        let t = tree(&["a", "b", "c", "d", "e"]);

        assert!(matches(&t, &Transaction::new(3, "d")).unwrap());
        assert!(!matches(&t, &Transaction::new(3, "z")).unwrap());
    }

    #[test]
    fn test_locate_duplicated_transaction_index() {
        // 5 leaves pad to 6; index 4 is the transaction that got duplicated
        let t = tree(&["a", "b", "c", "d", "e"]);
        assert_eq!(locate(&t, 4).unwrap(), "e");
    }

    #[test]
    fn test_locate_past_end_fails() {
        let t = tree(&["a", "b", "c", "d", "e"]);

        // Positions 5..8 exist only as padding copies of earlier leaves
        for index in 5..8 {
            assert!(matches!(
                locate(&t, index),
                Err(Error::IndexMismatch { expected, .. }) if expected == index
            ));
        }
    }
}
