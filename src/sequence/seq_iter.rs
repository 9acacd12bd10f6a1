//! Iterator types for [`Sequence`](super::Sequence).

use super::{NodeId, Sequence};
use alloc::vec::Vec;

/// A double-ended iterator over shared references, in list order.
///
/// Walks the main chain lazily from both ends at once, tracking each side's
/// current node and a copy of its occupancy bitmask; no allocation.
pub struct Iter<'a, T> {
    seq: &'a Sequence<T>,
    front_node: Option<NodeId>,
    back_node: Option<NodeId>,
    front_mask: u64,
    back_mask: u64,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(seq: &'a Sequence<T>) -> Self {
        let front_node = seq.head;
        let back_node = seq.tail;
        let front_mask = front_node
            .map(|id| seq.node(id).bucket.occupied_mask())
            .unwrap_or(0);
        let back_mask = if back_node == front_node {
            front_mask
        } else {
            back_node
                .map(|id| seq.node(id).bucket.occupied_mask())
                .unwrap_or(0)
        };
        Self {
            seq,
            front_node,
            back_node,
            front_mask,
            back_mask,
            remaining: seq.len(),
        }
    }

    /// Builds an iterator positioned at list index `pos`, ready to walk
    /// forward to the end. `None` if `pos > seq.len()`.
    ///
    /// Locates the starting bucket in `O(pos / 64)` by skipping whole
    /// buckets via their cached size, same as `Sequence::cursor_at`, but
    /// unlike a `Cursor` the result can be advanced directly instead of
    /// being re-looked-up for every subsequent position.
    pub(crate) fn at(seq: &'a Sequence<T>, pos: usize) -> Option<Self> {
        if pos > seq.len() {
            return None;
        }
        if pos == seq.len() {
            return Some(Self {
                seq,
                front_node: None,
                back_node: None,
                front_mask: 0,
                back_mask: 0,
                remaining: 0,
            });
        }
        let mut skip = pos;
        let mut current = seq.head;
        while let Some(id) = current {
            let mask = seq.node(id).bucket.occupied_mask();
            let size = mask.count_ones() as usize;
            if skip < size {
                let mut front_mask = mask;
                for _ in 0..skip {
                    front_mask &= front_mask - 1;
                }
                let back_node = seq.tail;
                let back_mask = if Some(id) == back_node {
                    front_mask
                } else {
                    back_node
                        .map(|bid| seq.node(bid).bucket.occupied_mask())
                        .unwrap_or(0)
                };
                return Some(Self {
                    seq,
                    front_node: Some(id),
                    back_node,
                    front_mask,
                    back_mask,
                    remaining: seq.len() - pos,
                });
            }
            skip -= size;
            current = seq.node(id).next;
        }
        None
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        loop {
            if self.front_mask != 0 {
                let slot = self.front_mask.trailing_zeros() as usize;
                self.front_mask &= self.front_mask - 1;
                let id = self.front_node.expect("nonzero mask implies a node");
                if self.front_node == self.back_node {
                    self.back_mask = self.front_mask;
                }
                self.remaining -= 1;
                return self.seq.node(id).bucket.get(slot);
            }
            let id = self.front_node?;
            let next_id = self.seq.node(id).next;
            self.front_node = next_id;
            self.front_mask = match next_id {
                Some(nid) if Some(nid) == self.back_node => self.back_mask,
                Some(nid) => self.seq.node(nid).bucket.occupied_mask(),
                None => 0,
            };
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        loop {
            if self.back_mask != 0 {
                let slot = 63 - self.back_mask.leading_zeros() as usize;
                self.back_mask &= !(1u64 << slot);
                let id = self.back_node.expect("nonzero mask implies a node");
                if self.front_node == self.back_node {
                    self.front_mask = self.back_mask;
                }
                self.remaining -= 1;
                return self.seq.node(id).bucket.get(slot);
            }
            let id = self.back_node?;
            let prev_id = self.seq.node(id).prev;
            self.back_node = prev_id;
            self.back_mask = match prev_id {
                Some(pid) if Some(pid) == self.front_node => self.front_mask,
                Some(pid) => self.seq.node(pid).bucket.occupied_mask(),
                None => 0,
            };
        }
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

/// A double-ended iterator over exclusive references, in list order.
///
/// Safe Rust has no lending-iterator support, so unlike [`Iter`] this can't
/// walk the chain lazily while handing out `&mut T`s tied to the chain's own
/// structure: it eagerly collects every occupied slot's reference up front
/// (one safe pass over the node slab via `iter_mut`, with a node's list
/// position precomputed so the results can be sorted back into list order),
/// then iterates the resulting `Vec`.
pub struct IterMut<'a, T> {
    items: alloc::vec::IntoIter<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(seq: &'a mut Sequence<T>) -> Self {
        let mut order_of_node = alloc::vec![usize::MAX; seq.nodes.len()];
        let mut current = seq.head;
        let mut pos = 0usize;
        while let Some(id) = current {
            order_of_node[id.0] = pos;
            pos += 1;
            current = seq.node(id).next;
        }

        let mut refs: Vec<(usize, usize, &'a mut T)> = Vec::with_capacity(seq.len);
        for (idx, slot_node) in seq.nodes.iter_mut().enumerate() {
            let Some(node) = slot_node.as_deref_mut() else {
                continue;
            };
            let list_pos = order_of_node[idx];
            if list_pos == usize::MAX {
                continue;
            }
            for slot in node.bucket.occupied_slots() {
                let value = node.bucket.get_mut(slot).expect("slot reported occupied");
                refs.push((list_pos, slot, value));
            }
        }
        refs.sort_unstable_by_key(|(list_pos, slot, _)| (*list_pos, *slot));
        let items: Vec<&'a mut T> = refs.into_iter().map(|(_, _, v)| v).collect();
        Self {
            items: items.into_iter(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back()
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.items.len()
    }
}

/// An owning iterator over the elements of a [`Sequence`], in list order.
pub struct IntoIter<T> {
    seq: Sequence<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(seq: Sequence<T>) -> Self {
        Self { seq }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.seq.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.seq.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.seq.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
