//! Quaternary min-heap with an injected comparison function.
//!
//! Four children per node halves the tree height compared to a binary heap,
//! at the price of more comparisons per level when sifting down. Searches pop
//! far more often than they rebuild, which favours the shallower tree.

use std::cmp::Ordering;

use crate::error::EmptyQueue;

const ARITY: usize = 4;
const LOG2_ARITY: usize = 2;

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) >> LOG2_ARITY
}

#[inline]
fn first_child(index: usize) -> usize {
    (index << LOG2_ARITY) | 1
}

/// A min-priority queue: elements with the lowest priority dequeue first.
///
/// Ordering among equal priorities is unspecified but deterministic for a
/// given sequence of operations. There is no decrease-key: to improve an
/// element, enqueue it again and skip the stale entry when it surfaces.
pub struct PriorityQueue<E, P, C = fn(&P, &P) -> Ordering> {
    nodes: Vec<(E, P)>,
    cmp: C,
}

impl<E, P: Ord> PriorityQueue<E, P> {
    /// Queue ordered by `P`'s natural ordering.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            cmp: <P as Ord>::cmp,
        }
    }
}

impl<E, P: Ord> Default for PriorityQueue<E, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, P, C: Fn(&P, &P) -> Ordering> PriorityQueue<E, P, C> {
    /// Queue ordered by `cmp`; `Ordering::Less` means "dequeue first".
    pub fn with_comparison(cmp: C) -> Self {
        Self {
            nodes: Vec::new(),
            cmp,
        }
    }

    /// Number of queued entries, stale ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert `element` with `priority`.
    pub fn enqueue(&mut self, element: E, priority: P) {
        self.nodes.push((element, priority));
        self.sift_up(self.nodes.len() - 1);
    }

    /// Remove and return the element with the lowest priority.
    pub fn dequeue(&mut self) -> Result<E, EmptyQueue> {
        if self.nodes.is_empty() {
            return Err(EmptyQueue);
        }
        // The last entry is promoted into the root, then sifted down.
        let (element, _) = self.nodes.swap_remove(0);
        if !self.nodes.is_empty() {
            self.sift_down(0);
        }
        Ok(element)
    }

    /// The element with the lowest priority, without removing it.
    pub fn peek(&self) -> Result<&E, EmptyQueue> {
        self.nodes.first().map(|(e, _)| e).ok_or(EmptyQueue)
    }

    /// The lowest priority currently queued.
    pub fn peek_priority(&self) -> Result<&P, EmptyQueue> {
        self.nodes.first().map(|(_, p)| p).ok_or(EmptyQueue)
    }

    /// Remove the first entry equal to `element` (linear scan).
    ///
    /// Returns `false` if no such entry exists.
    pub fn remove(&mut self, element: &E) -> bool
    where
        E: PartialEq,
    {
        let Some(idx) = self.nodes.iter().position(|(e, _)| e == element) else {
            return false;
        };
        self.nodes.swap_remove(idx);
        if idx < self.nodes.len() {
            // The promoted entry may belong above or below the vacated slot.
            let settled = self.sift_down(idx);
            if settled == idx {
                self.sift_up(idx);
            }
        }
        true
    }

    /// Drop every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Entries in heap order (not sorted).
    pub fn iter(&self) -> impl Iterator<Item = (&E, &P)> {
        self.nodes.iter().map(|(e, p)| (e, p))
    }

    /// Drain the queue into a vector sorted by ascending priority.
    pub fn into_sorted_vec(mut self) -> Vec<E> {
        let mut out = Vec::with_capacity(self.nodes.len());
        while let Ok(e) = self.dequeue() {
            out.push(e);
        }
        out
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        (self.cmp)(&self.nodes[a].1, &self.nodes[b].1) == Ordering::Less
    }

    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let p = parent(index);
            if !self.less(index, p) {
                break;
            }
            self.nodes.swap(index, p);
            index = p;
        }
        index
    }

    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.nodes.len();
        loop {
            let first = first_child(index);
            if first >= len {
                break;
            }
            let end = (first + ARITY).min(len);
            let mut best = first;
            for i in first + 1..end {
                if self.less(i, best) {
                    best = i;
                }
            }
            if !self.less(best, index) {
                break;
            }
            self.nodes.swap(index, best);
            index = best;
        }
        index
    }
}

impl<E, P, C: Fn(&P, &P) -> Ordering> Extend<(E, P)> for PriorityQueue<E, P, C> {
    fn extend<I: IntoIterator<Item = (E, P)>>(&mut self, iter: I) {
        for (e, p) in iter {
            self.enqueue(e, p);
        }
    }
}

impl<E, P: Ord> FromIterator<(E, P)> for PriorityQueue<E, P> {
    fn from_iter<I: IntoIterator<Item = (E, P)>>(iter: I) -> Self {
        let mut q = Self::new();
        q.extend(iter);
        q
    }
}
