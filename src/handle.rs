use core::fmt;

/// Stable handle to a node slot inside a [`NodeArena`](crate::NodeArena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

/// The `next` edge of a node; `None` is the terminal marker.
pub type Link = Option<NodeId>;

impl NodeId {
    /// Returns the raw slot index for debugging or external maps.
    pub fn as_raw(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
