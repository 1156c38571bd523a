//! Core data model types for txtree

mod digest;
mod transaction;

pub use digest::Digest;
pub use transaction::Transaction;
