//! Singly linked chains stored in an arena, with the classic pointer
//! algorithms over them: reversal, slow/fast cursor diagnostics (Floyd),
//! merging, splitting, merge sort, removal, palindrome checks and
//! intersection detection.
//!
//! ```
//! use nodechain::NodeArena;
//!
//! let mut arena = NodeArena::new();
//! let head = arena.build([1, 2, 3, 4, 5]);
//! let head = arena.reverse(head).unwrap();
//! assert_eq!(arena.to_vec(head).unwrap(), vec![5, 4, 3, 2, 1]);
//! ```

mod arena;
mod digits;
mod edit;
mod errors;
mod handle;
mod node;
mod pointers;
mod reverse;
mod structure;

#[cfg(test)]
mod test_util;

pub use arena::{ChainDisplay, Iter, NodeArena, Nodes};
pub use errors::{ChainError, Result};
pub use handle::{Link, NodeId};
