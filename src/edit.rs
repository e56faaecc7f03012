use crate::{
    arena::NodeArena,
    errors::{ChainError, Result},
    handle::{Link, NodeId},
};
use tracing::{debug, trace};

impl<T> NodeArena<T> {
    /// Prepend `value`; returns the new head.
    pub fn push_front(&mut self, head: Link, value: T) -> Result<NodeId> {
        self.require_link(head)?;
        let id = self.alloc(value);
        self.relink(id, head);
        Ok(id)
    }

    /// Append `value` after the last node; returns the head, which is the new
    /// node when the chain was empty.
    pub fn push_back(&mut self, head: Link, value: T) -> Result<NodeId> {
        let tail = self.tail(head)?;
        let id = self.alloc(value);
        if let Some(t) = tail {
            self.relink(t, Some(id));
        }
        Ok(head.unwrap_or(id))
    }

    /// Detach and retire the head, returning its value and the rest of the
    /// chain. `None` for an empty chain.
    pub fn pop_front(&mut self, head: Link) -> Result<Option<(T, Link)>> {
        let Some(h) = head else { return Ok(None) };
        let rest = self.node(h)?.next;
        Ok(self.retire(h).map(|value| (value, rest)))
    }

    /// Delete `id` given only that node, by pulling its successor's value
    /// forward and retiring the successor.
    ///
    /// The successor's handle becomes invalid; any other chain that pointed
    /// at the successor now ends there. Fails with [`ChainError::TailNode`]
    /// for the last node and for a node that loops onto itself, neither of
    /// which has another successor to take over.
    pub fn delete_node(&mut self, id: NodeId) -> Result<()> {
        let succ = match self.node(id)?.next {
            Some(succ) if succ != id => succ,
            _ => return Err(ChainError::TailNode),
        };
        self.node(succ)?;
        let after = self.link_of(succ);
        let value = self.retire(succ);
        let node = &mut self.nodes[id.0];
        node.value = value;
        node.next = after;
        trace!(%id, retired = %succ, "deleted node in place");
        Ok(())
    }

    /// Interleave the chain as `L0, Ln, L1, Ln-1, ...` in place.
    ///
    /// The head stays the head; every other node keeps its handle but moves.
    pub fn reorder(&mut self, head: Link) -> Result<Link> {
        let len = self.length(head)?;
        if len < 3 {
            return Ok(head);
        }
        let (mut front, back) = self.split_unchecked(head);
        let mut back = self.reverse_unchecked(back);
        while let (Some(f), Some(b)) = (front, back) {
            let front_next = self.link_of(f);
            let back_next = self.link_of(b);
            self.relink(f, Some(b));
            self.relink(b, front_next);
            front = front_next;
            back = back_next;
        }
        trace!(len, "reordered chain");
        Ok(head)
    }
}

impl<T: PartialEq> NodeArena<T> {
    /// Is `value` held by any node of the chain?
    pub fn contains(&self, head: Link, value: &T) -> Result<bool> {
        self.length(head)?;
        Ok(self.traverse(head).any(|v| v == value))
    }

    /// Remove the first node holding `value`. Returns the possibly new head
    /// and whether a node was removed.
    pub fn remove_first(&mut self, head: Link, value: &T) -> Result<(Link, bool)> {
        self.length(head)?;
        let mut prev = None;
        let mut cur = head;
        while let Some(id) = cur {
            let next = self.link_of(id);
            if self.nodes[id.0].value.as_ref() == Some(value) {
                self.retire(id);
                return Ok(match prev {
                    Some(p) => {
                        self.relink(p, next);
                        (head, true)
                    }
                    None => (next, true),
                });
            }
            prev = Some(id);
            cur = next;
        }
        Ok((head, false))
    }

    /// Remove every node holding `value`; returns the possibly new head.
    pub fn remove_value(&mut self, head: Link, value: &T) -> Result<Link> {
        self.length(head)?;
        let mut new_head = head;
        let mut prev: Link = None;
        let mut cur = head;
        let mut removed = 0usize;
        while let Some(id) = cur {
            let next = self.link_of(id);
            if self.nodes[id.0].value.as_ref() == Some(value) {
                self.retire(id);
                removed += 1;
                match prev {
                    Some(p) => self.relink(p, next),
                    None => new_head = next,
                }
            } else {
                prev = Some(id);
            }
            cur = next;
        }
        debug!(removed, "removed matching nodes");
        Ok(new_head)
    }

    /// Collapse runs of equal adjacent values, keeping the first node of each
    /// run. On a sorted chain this removes all duplicates.
    pub fn remove_duplicates(&mut self, head: Link) -> Result<Link> {
        self.length(head)?;
        let mut cur = head;
        while let Some(id) = cur {
            match self.link_of(id) {
                Some(n) if self.nodes[n.0].value == self.nodes[id.0].value => {
                    let after = self.link_of(n);
                    self.relink(id, after);
                    self.retire(n);
                }
                next => cur = next,
            }
        }
        Ok(head)
    }
}
