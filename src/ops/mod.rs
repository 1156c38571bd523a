//! Tree-consulting operations: difference search and index-guided lookup

mod diff;
mod locate;

pub use diff::{find_differences, Difference};
pub use locate::{locate, matches};
