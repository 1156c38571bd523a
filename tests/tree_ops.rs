//! End-to-end tests over the public API
//!
//! Exercises building, diffing and index-guided lookup together on the
//! same trees, the way a caller combining the operations would.

use txtree::{build, find_differences, locate, matches, Digest, Error, Transaction};

fn tree(items: &[&str]) -> txtree::MerkleNode {
    build(Transaction::sequence(items.iter().copied())).unwrap()
}

#[test]
fn test_build_is_deterministic_across_calls() {
    let items = ["one", "two", "three", "four", "five", "six", "seven"];

    let a = tree(&items);
    let b = tree(&items);

    assert_eq!(a.digest(), b.digest());
    assert_eq!(a.depth(), b.depth());
    assert!(find_differences(&a, &b).unwrap().is_empty());
}

#[test]
fn test_single_leaf_root_digest_is_content_hash() {
    let root = tree(&["payload"]);
    assert_eq!(root.digest(), Digest::digest(b"payload"));
}

#[test]
fn test_diff_then_locate_differing_positions() {
    let a = tree(&["a", "b", "c", "d", "e"]);
    let b = tree(&["a", "x", "c", "y", "z"]);

    let differences = find_differences(&a, &b).unwrap();
    let rendered: Vec<String> = differences.iter().map(|d| d.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "Difference found: b vs. x",
            "Difference found: d vs. y",
            "Difference found: e vs. z",
        ]
    );

    // The reported leaves are reachable by index in their own trees
    assert_eq!(locate(&a, 1).unwrap(), "b");
    assert_eq!(locate(&b, 1).unwrap(), "x");
    assert_eq!(locate(&a, 4).unwrap(), "e");
    assert_eq!(locate(&b, 4).unwrap(), "z");
}

#[test]
fn test_diff_trees_of_unequal_length_fails() {
    let four = tree(&["a", "b", "c", "d"]);
    let five = tree(&["a", "b", "c", "d", "e"]);

    assert!(matches!(
        find_differences(&four, &five),
        Err(Error::ShapeMismatch)
    ));
}

#[test]
fn test_every_transaction_round_trips() {
    for n in 1..=9 {
        let items: Vec<String> = (0..n).map(|i| format!("tx-{i}")).collect();
        let transactions = Transaction::sequence(items);
        let root = build(transactions.clone()).unwrap();

        for tx in &transactions {
            assert!(matches(&root, tx).unwrap(), "tx {} in tree of {}", tx.index, n);
        }
    }
}

#[test]
fn test_lookup_past_last_index_fails() {
    for n in [1, 3, 5, 6] {
        let items: Vec<String> = (0..n).map(|i| format!("tx-{i}")).collect();
        let root = build(Transaction::sequence(items)).unwrap();

        assert!(matches!(
            locate(&root, n),
            Err(Error::IndexMismatch { expected, .. }) if expected == n
        ));
    }
}
