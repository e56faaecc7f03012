//! Two-pointer diagnostics: the slow/fast cursor family (Floyd).

use crate::{
    arena::NodeArena,
    errors::{ChainError, Result},
    handle::{Link, NodeId},
};
use tracing::trace;

impl<T> NodeArena<T> {
    /// Middle node of the chain; for even lengths the second of the two
    /// middle nodes. `None` for an empty chain.
    pub fn find_middle(&self, head: Link) -> Result<Link> {
        self.length(head)?;
        Ok(self.find_middle_unchecked(head))
    }

    /// Does following `next` from `head` ever revisit a node?
    pub fn detect_cycle(&self, head: Link) -> bool {
        self.meeting_point(head).is_some()
    }

    /// The node where the cycle is entered, or `None` for an acyclic chain.
    ///
    /// Once slow and fast meet, the distance from `head` to the entry equals
    /// the distance from the meeting point to the entry modulo the cycle
    /// length, so two unit-speed cursors started there coincide at the entry.
    pub fn find_cycle_start(&self, head: Link) -> Option<NodeId> {
        let meet = self.meeting_point(head)?;
        let mut a = head;
        let mut b = Some(meet);
        while a != b {
            a = self.step(a);
            b = self.step(b);
        }
        trace!(entry = ?a, "found cycle entry");
        a
    }

    /// The `n`-th node counted from the end, where `n = 1` is the last node.
    ///
    /// Fails with [`ChainError::OutOfRange`] when `n` is zero or exceeds the
    /// chain length.
    pub fn nth_from_end(&self, head: Link, n: usize) -> Result<NodeId> {
        let len = self.length(head)?;
        if n == 0 || n > len {
            return Err(ChainError::OutOfRange { n, len });
        }

        let mut lead = head;
        for _ in 0..n {
            lead = self.step(lead);
        }
        let mut trail = head;
        while lead.is_some() {
            lead = self.step(lead);
            trail = self.step(trail);
        }
        // `n <= len`, so `trail` stops on a node and this never errors.
        trail.ok_or(ChainError::OutOfRange { n, len })
    }

    pub(crate) fn find_middle_unchecked(&self, head: Link) -> Link {
        let mut slow = head;
        let mut fast = head;
        while let Some(f) = fast {
            let Some(f1) = self.link_of(f) else { break };
            slow = self.step(slow);
            fast = self.link_of(f1);
        }
        slow
    }

    /// Where slow (1 step) and fast (2 steps) cursors meet, if they do.
    fn meeting_point(&self, head: Link) -> Option<NodeId> {
        let mut slow = head;
        let mut fast = head;
        while fast.is_some() {
            let f1 = self.step(fast);
            if f1.is_none() {
                return None;
            }
            slow = self.step(slow);
            fast = self.step(f1);
            if fast.is_some() && slow == fast {
                return slow;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{chain, cyclic_chain, nth_node};

    #[test]
    fn middle_of_odd_and_even() {
        let (arena, head) = chain([1, 2, 3, 4, 5]);
        let mid = arena.find_middle(head).unwrap().unwrap();
        assert_eq!(arena.value(mid), Some(&3));

        // even length: second of the two middle nodes
        let (arena, head) = chain([1, 2, 3, 4]);
        let mid = arena.find_middle(head).unwrap().unwrap();
        assert_eq!(arena.value(mid), Some(&3));

        let (arena, head) = chain([1, 2]);
        let mid = arena.find_middle(head).unwrap().unwrap();
        assert_eq!(arena.value(mid), Some(&2));
    }

    #[test]
    fn middle_of_trivial_chains() {
        let (arena, head) = chain::<i32>([]);
        assert_eq!(arena.find_middle(head), Ok(None));

        let (arena, head) = chain([1]);
        assert_eq!(arena.find_middle(head), Ok(head));
    }

    #[test]
    fn no_cycle_in_acyclic_chains() {
        for len in 0..8 {
            let (arena, head) = chain(0..len);
            assert!(!arena.detect_cycle(head), "len {len}");
            assert_eq!(arena.find_cycle_start(head), None, "len {len}");
        }
    }

    #[test]
    fn cycle_detected_for_every_entry() {
        let values: Vec<i32> = (0..7).collect();
        for entry in 0..values.len() {
            let (arena, head, entry_id) = cyclic_chain(&values, entry);
            assert!(arena.detect_cycle(head), "entry {entry}");
            assert_eq!(arena.find_cycle_start(head), Some(entry_id), "entry {entry}");
        }
    }

    #[test]
    fn cycle_at_head_and_before_tail() {
        let (arena, head, entry) = cyclic_chain(&[1, 2, 3, 4, 5], 0);
        assert_eq!(Some(entry), head);
        assert_eq!(arena.find_cycle_start(head), head);

        let (arena, head, entry) = cyclic_chain(&[1, 2, 3, 4, 5], 3);
        assert_eq!(arena.find_cycle_start(head), Some(entry));
        assert_eq!(arena.value(entry), Some(&4));
    }

    #[test]
    fn self_loop() {
        let (arena, head, entry) = cyclic_chain(&[42], 0);
        assert!(arena.detect_cycle(head));
        assert_eq!(arena.find_cycle_start(head), Some(entry));
    }

    #[test]
    fn cycle_back_from_three_to_two() {
        let (mut arena, head) = chain([1, 2, 3, 4]);
        let two = nth_node(&arena, head, 1);
        let three = nth_node(&arena, head, 2);
        arena.set_next(three, Some(two)).unwrap();

        assert!(arena.detect_cycle(head));
        let start = arena.find_cycle_start(head).unwrap();
        assert_eq!(start, two);
        assert_eq!(arena.value(start), Some(&2));
        assert_eq!(arena.find_middle(head), Err(ChainError::Cyclic));
    }

    #[test]
    fn nth_from_end_every_position() {
        let (arena, head) = chain([10, 20, 30, 40]);
        for n in 1..=4 {
            let id = arena.nth_from_end(head, n).unwrap();
            assert_eq!(id, nth_node(&arena, head, 4 - n));
        }
        let last = arena.nth_from_end(head, 1).unwrap();
        assert_eq!(arena.value(last), Some(&40));
        let first = arena.nth_from_end(head, 4).unwrap();
        assert_eq!(Some(first), head);
    }

    #[test]
    fn nth_from_end_rejects_cycle() {
        let (arena, head, _) = cyclic_chain(&[1, 2, 3], 2);
        assert_eq!(arena.nth_from_end(head, 1), Err(ChainError::Cyclic));
    }

    #[test]
    fn nth_from_end_out_of_range() {
        let (arena, head) = chain([1, 2, 3]);
        assert_eq!(
            arena.nth_from_end(head, 4),
            Err(ChainError::OutOfRange { n: 4, len: 3 })
        );
        assert_eq!(
            arena.nth_from_end(head, 0),
            Err(ChainError::OutOfRange { n: 0, len: 3 })
        );
        assert_eq!(
            arena.nth_from_end(None, 1),
            Err(ChainError::OutOfRange { n: 1, len: 0 })
        );
    }
}
