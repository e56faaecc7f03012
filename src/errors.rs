use crate::handle::NodeId;
use thiserror::Error;

/// Errors that can occur when operating on a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChainError {
    /// A 1-based position from the end was zero or past the chain length.
    #[error("position {n} is out of range for a chain of {len} nodes")]
    OutOfRange { n: usize, len: usize },

    /// Segment bounds were not found in order along the chain.
    #[error("segment bounds are not reachable from the chain head")]
    Unreachable,

    /// The handle names a retired slot or one outside this arena.
    #[error("invalid node handle {0}")]
    InvalidNode(NodeId),

    /// The walk revisited a node before reaching the end of the chain.
    #[error("chain contains a cycle")]
    Cyclic,

    /// The node has no other successor to pull a value from.
    #[error("cannot delete the tail node in place")]
    TailNode,

    /// A digit chain held a value above 9.
    #[error("{0} is not a decimal digit")]
    InvalidDigit(u8),

    /// Two chains that must be disjoint share a node.
    #[error("chains share node {0}")]
    Overlapping(NodeId),
}

pub type Result<T, E = ChainError> = core::result::Result<T, E>;
