//! Transaction record type - the unit a tree is built over

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered transaction-like record
///
/// A transaction carries its position in the sequence it belongs to
/// (dense from 0, unique within the sequence) and an opaque content value
/// compared bytewise. Transactions are immutable once created; a tree
/// holds one per leaf.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Position within the originating sequence
    pub index: u64,

    /// Opaque content value
    pub data: String,
}

impl Transaction {
    /// Create a transaction at a specific index
    pub fn new(index: u64, data: impl Into<String>) -> Self {
        Transaction {
            index,
            data: data.into(),
        }
    }

    /// Build an ordered sequence from raw content values, assigning
    /// indices densely from 0
    pub fn sequence<I, S>(items: I) -> Vec<Transaction>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        items
            .into_iter()
            .enumerate()
            .map(|(index, data)| Transaction::new(index as u64, data))
            .collect()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tx {} with {}", self.index, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_assigns_dense_indices() {
        let txs = Transaction::sequence(["a", "b", "c"]);

        assert_eq!(txs.len(), 3);
        for (i, tx) in txs.iter().enumerate() {
            assert_eq!(tx.index, i as u64);
        }
        assert_eq!(txs[2].data, "c");
    }

    #[test]
    fn test_sequence_empty() {
        let txs = Transaction::sequence(Vec::<String>::new());
        assert!(txs.is_empty());
    }
}
