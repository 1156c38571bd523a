//! # txtree
//!
//! A binary Merkle hash tree over an ordered sequence of transaction-like
//! records, with two tree-consulting algorithms on top.
//!
//! ## Core Concepts
//!
//! - **Transactions**: ordered records with a dense index and opaque data
//! - **Tree**: bottom-up pairwise reduction of leaf digests to one root,
//!   duplicating the trailing node of odd-length levels
//! - **Diff**: recursive comparison of two equal-shape trees, reporting
//!   each pair of differing leaves and skipping identical subtrees
//! - **Locate**: index-guided descent to one leaf in O(depth) comparisons
//!
//! ## Example
//!
//! ```
//! use txtree::{build, find_differences, matches, Transaction};
//!
//! let a = build(Transaction::sequence(["a", "b", "c"]))?;
//! let b = build(Transaction::sequence(["a", "x", "c"]))?;
//!
//! let differences = find_differences(&a, &b)?;
//! assert_eq!(differences.len(), 1);
//!
//! assert!(matches(&a, &Transaction::new(2, "c"))?);
//! # Ok::<(), txtree::Error>(())
//! ```

pub mod model;
pub mod ops;
pub mod tree;

mod error;

pub use error::{Error, Result};
pub use model::{Digest, Transaction};
pub use ops::{find_differences, locate, matches, Difference};
pub use tree::{build, MerkleNode};

/// Width in bytes of the BLAKE3 digests used throughout the tree
pub const DIGEST_LEN: usize = 32;
