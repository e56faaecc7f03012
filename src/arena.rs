use crate::{
    errors::{ChainError, Result},
    handle::{Link, NodeId},
    node::Node,
};
use core::fmt;

/// Contiguous storage for the nodes of any number of singly linked chains.
///
/// A chain is named by its head [`Link`]. Nodes never move and slots are
/// never reused, so a [`NodeId`] keeps naming the same node for the lifetime
/// of the arena; removals retire the slot and invalidate the handle.
///
/// Cycles are representable (see [`set_next`](Self::set_next)). Operations
/// that must reach the end of a chain bound their walk by the slot count and
/// report [`ChainError::Cyclic`] instead of looping.
#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    pub(crate) nodes: Vec<Node<T>>,
    live: usize,
}

/// Iterator over the values of a chain, from head to terminal marker.
pub struct Iter<'a, T> {
    arena: &'a NodeArena<T>,
    cursor: Link,
}

/// Iterator over the node handles of a chain.
pub struct Nodes<'a, T> {
    arena: &'a NodeArena<T>,
    cursor: Link,
}

/// Renders a chain as `1 -> 2 -> null`.
pub struct ChainDisplay<'a, T> {
    arena: &'a NodeArena<T>,
    head: Link,
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeArena<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an arena with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            live: 0,
        }
    }

    /// Number of live nodes across all chains.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Allocate a detached node holding `value`.
    pub fn alloc(&mut self, value: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            value: Some(value),
            next: None,
        });
        self.live += 1;
        id
    }

    /// Build a chain from `values` in order and return its head.
    ///
    /// An empty sequence yields the terminal marker.
    pub fn build<I>(&mut self, values: I) -> Link
    where
        I: IntoIterator<Item = T>,
    {
        let mut head = None;
        let mut prev: Link = None;
        for value in values {
            let id = self.alloc(value);
            match prev {
                Some(p) => self.relink(p, Some(id)),
                None => head = Some(id),
            }
            prev = Some(id);
        }
        head
    }

    /// Lazily visit the values of the chain starting at `head`.
    ///
    /// Restartable and side-effect-free. On a cyclic chain the iterator never
    /// ends; bound it with [`Iterator::take`].
    pub fn traverse(&self, head: Link) -> Iter<'_, T> {
        Iter {
            arena: self,
            cursor: head,
        }
    }

    /// Lazily visit the node handles of the chain starting at `head`.
    pub fn nodes(&self, head: Link) -> Nodes<'_, T> {
        Nodes {
            arena: self,
            cursor: head,
        }
    }

    /// Get a reference to a node's value (if live).
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.0).and_then(|n| n.value.as_ref())
    }

    /// Get a mutable reference to a node's value (if live).
    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id.0).and_then(|n| n.value.as_mut())
    }

    /// The `next` edge of a live node.
    pub fn next(&self, id: NodeId) -> Result<Link> {
        Ok(self.node(id)?.next)
    }

    /// Point `id` at `next`, which may be any live node, including an earlier
    /// node of the same chain (creating a cycle) or `id` itself.
    ///
    /// Whatever `id` previously pointed to becomes unreachable through `id`.
    pub fn set_next(&mut self, id: NodeId, next: Link) -> Result<()> {
        self.node(id)?;
        self.require_link(next)?;
        self.relink(id, next);
        Ok(())
    }

    /// Number of nodes from `head` to the terminal marker.
    pub fn length(&self, head: Link) -> Result<usize> {
        let mut count = 0usize;
        let mut cur = head;
        while let Some(id) = cur {
            let node = self.node(id)?;
            count += 1;
            if count > self.nodes.len() {
                return Err(ChainError::Cyclic);
            }
            cur = node.next;
        }
        Ok(count)
    }

    /// Last node of the chain, or `None` for an empty chain.
    pub fn tail(&self, head: Link) -> Result<Link> {
        self.length(head)?;
        Ok(self.nodes(head).last())
    }

    /// Render the chain for display. A cyclic chain is cut off with `...`
    /// once the walk has taken as many steps as the arena has slots.
    pub fn display(&self, head: Link) -> ChainDisplay<'_, T> {
        ChainDisplay { arena: self, head }
    }

    pub(crate) fn node(&self, id: NodeId) -> Result<&Node<T>> {
        match self.nodes.get(id.0) {
            Some(n) if n.is_live() => Ok(n),
            _ => Err(ChainError::InvalidNode(id)),
        }
    }

    pub(crate) fn require_link(&self, link: Link) -> Result<()> {
        match link {
            Some(id) => self.node(id).map(|_| ()),
            None => Ok(()),
        }
    }

    /// Follow one `next` edge. Retired or foreign handles end the walk.
    pub(crate) fn step(&self, link: Link) -> Link {
        link.and_then(|id| self.nodes.get(id.0)).and_then(|n| n.next)
    }

    pub(crate) fn link_of(&self, id: NodeId) -> Link {
        self.nodes[id.0].next
    }

    pub(crate) fn relink(&mut self, id: NodeId, next: Link) {
        self.nodes[id.0].next = next;
    }

    /// Take a node's value and detach it; its handle is invalid afterwards.
    pub(crate) fn retire(&mut self, id: NodeId) -> Option<T> {
        let node = &mut self.nodes[id.0];
        node.next = None;
        let value = node.value.take();
        if value.is_some() {
            self.live -= 1;
        }
        value
    }
}

impl<T: Clone> NodeArena<T> {
    /// Clone the chain's values into a vector.
    pub fn to_vec(&self, head: Link) -> Result<Vec<T>> {
        let len = self.length(head)?;
        let mut out = Vec::with_capacity(len);
        out.extend(self.traverse(head).cloned());
        Ok(out)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor.take()?;
        let node = self.arena.nodes.get(id.0)?;
        let value = node.value.as_ref()?;
        self.cursor = node.next;
        Some(value)
    }
}

impl<T> Iterator for Nodes<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor.take()?;
        let node = self.arena.nodes.get(id.0)?;
        if !node.is_live() {
            return None;
        }
        self.cursor = node.next;
        Some(id)
    }
}

impl<T: fmt::Display> fmt::Display for ChainDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let budget = self.arena.nodes.len();
        let mut values = self.arena.traverse(self.head);
        for value in values.by_ref().take(budget) {
            write!(f, "{value} -> ")?;
        }
        match values.next() {
            Some(_) => f.write_str("..."),
            None => f.write_str("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_and_traverse() {
        let mut arena = NodeArena::new();
        let head = arena.build([1, 2, 3]);

        assert_eq!(arena.traverse(head).copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        // restartable from the same head
        assert_eq!(arena.traverse(head).count(), 3);
        assert_eq!(arena.length(head), Ok(3));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn empty_build_is_terminal() {
        let mut arena = NodeArena::<i32>::new();
        let head = arena.build([]);

        assert_eq!(head, None);
        assert_eq!(arena.traverse(head).count(), 0);
        assert_eq!(arena.length(head), Ok(0));
        assert_eq!(arena.tail(head), Ok(None));
        assert!(arena.is_empty());
    }

    #[test]
    fn cycles_are_reported_not_walked() {
        let mut arena = NodeArena::new();
        let head = arena.build([1, 2, 3]);
        let ids: Vec<_> = arena.nodes(head).collect();
        arena.set_next(ids[2], Some(ids[0])).unwrap();

        assert_eq!(arena.length(head), Err(ChainError::Cyclic));
        assert_eq!(arena.tail(head), Err(ChainError::Cyclic));
        assert_eq!(
            arena.traverse(head).take(7).copied().collect::<Vec<_>>(),
            vec![1, 2, 3, 1, 2, 3, 1]
        );
    }

    #[test]
    fn display_chain() {
        let mut arena = NodeArena::new();
        let head = arena.build([1, 2, 3]);
        assert_eq!(arena.display(head).to_string(), "1 -> 2 -> 3 -> null");
        assert_eq!(arena.display(None).to_string(), "null");

        let tail = arena.tail(head).unwrap().unwrap();
        arena.set_next(tail, head).unwrap();
        assert!(arena.display(head).to_string().ends_with("-> ..."));
    }

    #[test]
    fn retired_handles_are_invalid() {
        let mut arena = NodeArena::new();
        let head = arena.build(["a", "b"]);
        let a = head.unwrap();

        assert_eq!(arena.retire(a), Some("a"));
        assert_eq!(arena.value(a), None);
        assert_eq!(arena.next(a), Err(ChainError::InvalidNode(a)));
        assert_eq!(arena.length(head), Err(ChainError::InvalidNode(a)));
        assert_eq!(arena.set_next(a, None), Err(ChainError::InvalidNode(a)));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn value_mut_updates_in_place() {
        let mut arena = NodeArena::new();
        let head = arena.build([10, 20]);
        let second = arena.next(head.unwrap()).unwrap().unwrap();

        *arena.value_mut(second).unwrap() += 5;
        assert_eq!(arena.to_vec(head), Ok(vec![10, 25]));
    }
}
