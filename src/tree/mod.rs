//! Binary Merkle tree built bottom-up over transaction records
//!
//! Leaves hash transaction data; internal nodes hash the concatenation of
//! their children's digests, so the root digest uniquely identifies the
//! whole sequence. Odd-length levels duplicate their trailing node before
//! pairing, keeping every internal node strictly binary.

mod build;
mod node;

pub use build::build;
pub use node::MerkleNode;
