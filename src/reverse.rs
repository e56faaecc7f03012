use crate::{
    arena::NodeArena,
    errors::{ChainError, Result},
    handle::{Link, NodeId},
};
use tracing::trace;

impl<T> NodeArena<T> {
    /// Reverse the chain in place and return the new head.
    ///
    /// O(n) time, O(1) extra space. The old head becomes the tail; handles
    /// held by the caller still name the same nodes, now in reverse order.
    pub fn reverse(&mut self, head: Link) -> Result<Link> {
        let len = self.length(head)?;
        trace!(len, "reversing chain");
        Ok(self.reverse_unchecked(head))
    }

    /// Reverse the inclusive sub-chain `start..=end` and splice it back.
    ///
    /// `start` must be reachable from `head` and `end` from `start`. Both are
    /// checked before any edge is rewritten, so on
    /// [`ChainError::Unreachable`] the chain is left untouched. Returns the
    /// head, which is `end` when `start` was the head.
    pub fn reverse_segment(&mut self, head: Link, start: NodeId, end: NodeId) -> Result<Link> {
        self.length(head)?;

        let mut before = None;
        let mut cur = head;
        loop {
            match cur {
                Some(id) if id == start => break,
                Some(id) => {
                    before = Some(id);
                    cur = self.link_of(id);
                }
                None => return Err(ChainError::Unreachable),
            }
        }

        let mut cur = Some(start);
        loop {
            match cur {
                Some(id) if id == end => break,
                Some(id) => cur = self.link_of(id),
                None => return Err(ChainError::Unreachable),
            }
        }

        let mut prev = self.link_of(end);
        let mut cur = start;
        loop {
            let next = self.link_of(cur);
            self.relink(cur, prev);
            if cur == end {
                break;
            }
            prev = Some(cur);
            let Some(next) = next else { break };
            cur = next;
        }
        trace!(%start, %end, "reversed segment");

        match before {
            Some(b) => {
                self.relink(b, Some(end));
                Ok(head)
            }
            None => Ok(Some(end)),
        }
    }

    pub(crate) fn reverse_unchecked(&mut self, head: Link) -> Link {
        let mut prev = None;
        let mut cur = head;
        while let Some(id) = cur {
            let next = self.link_of(id);
            self.relink(id, prev);
            prev = Some(id);
            cur = next;
        }
        prev
    }
}
