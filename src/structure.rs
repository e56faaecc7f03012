use crate::{
    arena::NodeArena,
    errors::{ChainError, Result},
    handle::{Link, NodeId},
};
use tracing::{debug, trace};

impl<T: Ord> NodeArena<T> {
    /// Merge two ascending chains into one ascending chain.
    ///
    /// Stable: on equal values the node from `a` comes first. Nodes are
    /// re-linked rather than copied, so `a` and `b` no longer name the
    /// chains they did before the call.
    ///
    /// The chains must be disjoint; a shared node is reported as
    /// [`ChainError::Overlapping`] before anything is re-linked.
    pub fn merge_sorted(&mut self, a: Link, b: Link) -> Result<Link> {
        if let Some(shared) = self.find_intersection(a, b)? {
            return Err(ChainError::Overlapping(shared));
        }
        Ok(self.merge_unchecked(a, b))
    }

    /// Sort the chain ascending by merge sort and return the new head.
    ///
    /// O(n log n) time, O(log n) stack. Stable.
    pub fn merge_sort(&mut self, head: Link) -> Result<Link> {
        let len = self.length(head)?;
        debug!(len, "merge sorting chain");
        Ok(self.merge_sort_unchecked(head))
    }

    fn merge_sort_unchecked(&mut self, head: Link) -> Link {
        let Some(h) = head else { return None };
        if self.link_of(h).is_none() {
            return head;
        }
        let (left, right) = self.split_unchecked(head);
        let left = self.merge_sort_unchecked(left);
        let right = self.merge_sort_unchecked(right);
        self.merge_unchecked(left, right)
    }

    fn merge_unchecked(&mut self, mut a: Link, mut b: Link) -> Link {
        let mut head = None;
        let mut tail: Link = None;
        let rest = loop {
            let pick = match (a, b) {
                (Some(x), Some(y)) => {
                    if self.nodes[y.0].value < self.nodes[x.0].value {
                        b = self.link_of(y);
                        y
                    } else {
                        a = self.link_of(x);
                        x
                    }
                }
                (rest, None) | (None, rest) => break rest,
            };
            match tail {
                Some(t) => self.relink(t, Some(pick)),
                None => head = Some(pick),
            }
            tail = Some(pick);
        };
        match tail {
            Some(t) => {
                self.relink(t, rest);
                head
            }
            None => rest,
        }
    }
}

impl<T> NodeArena<T> {
    /// Cut the chain in two; for odd lengths the first half keeps the extra
    /// node. The last node of the first half is detached from the second.
    pub fn split_in_half(&mut self, head: Link) -> Result<(Link, Link)> {
        self.length(head)?;
        Ok(self.split_unchecked(head))
    }

    /// Remove the `n`-th node from the end (`n = 1` is the last node) and
    /// return the possibly new head. The removed node is retired.
    pub fn remove_nth_from_end(&mut self, head: Link, n: usize) -> Result<Link> {
        let len = self.length(head)?;
        if n == 0 || n > len {
            return Err(ChainError::OutOfRange { n, len });
        }

        // `None` for `trail` plays the dummy node in front of `head`.
        let mut lead = head;
        for _ in 0..n {
            lead = self.step(lead);
        }
        let mut trail: Link = None;
        while lead.is_some() {
            lead = self.step(lead);
            trail = match trail {
                Some(t) => self.link_of(t),
                None => head,
            };
        }

        // `n <= len`, so the node after `trail` exists and this never errors.
        let target = match trail {
            Some(t) => self.link_of(t),
            None => head,
        }
        .ok_or(ChainError::OutOfRange { n, len })?;
        let after = self.link_of(target);
        self.retire(target);
        trace!(n, len, "removed node from end");

        match trail {
            Some(t) => {
                self.relink(t, after);
                Ok(head)
            }
            None => Ok(after),
        }
    }

    /// The first node the two chains share by identity, or `None`.
    ///
    /// Advances the longer chain by the length difference, then walks both in
    /// lockstep. Equal values in distinct nodes do not count.
    pub fn find_intersection(&self, a: Link, b: Link) -> Result<Option<NodeId>> {
        let mut len_a = self.length(a)?;
        let mut len_b = self.length(b)?;
        let (mut a, mut b) = (a, b);
        while len_a > len_b {
            a = self.step(a);
            len_a -= 1;
        }
        while len_b > len_a {
            b = self.step(b);
            len_b -= 1;
        }
        while a != b {
            a = self.step(a);
            b = self.step(b);
        }
        Ok(a)
    }

    pub(crate) fn split_unchecked(&mut self, head: Link) -> (Link, Link) {
        let Some(mut slow) = head else {
            return (None, None);
        };
        let mut fast = self.link_of(slow);
        while let Some(f) = fast {
            let Some(f1) = self.link_of(f) else { break };
            match self.link_of(slow) {
                Some(s) => slow = s,
                None => break,
            }
            fast = self.link_of(f1);
        }
        let second = self.link_of(slow);
        self.relink(slow, None);
        (head, second)
    }
}

impl<T: PartialEq> NodeArena<T> {
    /// Does the chain read the same forwards and backwards?
    ///
    /// The second half is reversed in place for the comparison and reversed
    /// back before returning, so the chain is unchanged afterwards.
    pub fn is_palindrome(&mut self, head: Link) -> Result<bool> {
        self.length(head)?;
        let Some(mid) = self.find_middle_unchecked(head) else {
            return Ok(true);
        };

        let second = self.reverse_unchecked(Some(mid));
        let (mut left, mut right) = (head, second);
        let mut same = true;
        while let (Some(l), Some(r)) = (left, right) {
            if self.nodes[l.0].value != self.nodes[r.0].value {
                same = false;
                break;
            }
            left = self.link_of(l);
            right = self.link_of(r);
        }
        self.reverse_unchecked(second);
        Ok(same)
    }
}


// proptest is slow under miri
#[cfg(all(not(miri), test))]
mod proptests {
    use crate::NodeArena;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn reverse_round_trips(values in prop::collection::vec(any::<i32>(), 0..64)) {
            let mut arena = NodeArena::new();
            let head = arena.build(values.clone());
            let rev = arena.reverse(head).unwrap();
            let mut expected = values.clone();
            expected.reverse();
            prop_assert_eq!(arena.to_vec(rev).unwrap(), expected);

            let back = arena.reverse(rev).unwrap();
            prop_assert_eq!(arena.to_vec(back).unwrap(), values);
        }

        #[test]
        fn merge_is_sorted_union(
            mut a in prop::collection::vec(-50i32..50, 0..32),
            mut b in prop::collection::vec(-50i32..50, 0..32),
        ) {
            a.sort();
            b.sort();
            let mut arena = NodeArena::new();
            let ha = arena.build(a.clone());
            let hb = arena.build(b.clone());

            let merged = arena.merge_sorted(ha, hb).unwrap();
            let mut expected = a;
            expected.extend(b);
            expected.sort();
            prop_assert_eq!(arena.to_vec(merged).unwrap(), expected);
        }

        #[test]
        fn merge_sort_is_sorted_permutation(values in prop::collection::vec(any::<i16>(), 0..128)) {
            let mut arena = NodeArena::new();
            let head = arena.build(values.clone());
            let sorted = arena.merge_sort(head).unwrap();

            let mut expected = values;
            expected.sort();
            prop_assert_eq!(arena.to_vec(sorted).unwrap(), expected);
        }

        #[test]
        fn palindrome_matches_vec(values in prop::collection::vec(0u8..3, 0..16)) {
            let mut arena = NodeArena::new();
            let head = arena.build(values.clone());
            let expected = values.iter().eq(values.iter().rev());

            prop_assert_eq!(arena.is_palindrome(head).unwrap(), expected);
            prop_assert_eq!(arena.to_vec(head).unwrap(), values);
        }
    }
}
