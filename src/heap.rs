//! Comparator-driven binary min-heap.
//!
//! One heap engine serves every priority queue in the crate. The ordering is
//! not baked into the element type; it is injected as a [`HeapOrder`]
//! strategy and passed to each mutating call. That lets a strategy read key
//! state living outside the heap itself, which is how the scheduler ranks
//! plain `usize` handles into a job arena by service rank and into a worker
//! pool by committed load.
//!
//! Callers that mutate a key after insertion restore the heap property with
//! [`Heap::sift_down`] from the affected index instead of a remove/insert
//! cycle.
//!
//! # Reference
//! Cormen, Leiserson, Rivest, Stein (2009), "Introduction to Algorithms",
//! Ch. 6 (Heapsort).

use std::error::Error;
use std::fmt;

/// Ranking strategy injected into a [`Heap`].
///
/// `precedes(a, b)` returns `true` when `a` must be extracted before `b`,
/// making the heap a min-heap under whatever total order the strategy
/// defines. Strategies embed their own deterministic tie-break (an id or
/// index comparison); the heap itself never resolves ties.
///
/// The strategy must be consistent: for a fixed key state, repeated calls
/// must agree. After changing a key that lives outside the heap, call
/// [`Heap::sift_down`] at that element's index before the next query.
pub trait HeapOrder {
    /// Element type stored in the heap.
    type Element;

    /// Whether `lhs` ranks strictly ahead of `rhs`.
    fn precedes(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool;
}

/// Error returned by [`Heap::pop`] on an empty heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyHeapError;

impl fmt::Display for EmptyHeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("pop from an empty heap")
    }
}

impl Error for EmptyHeapError {}

/// Binary min-heap over elements ranked by an external [`HeapOrder`].
pub struct Heap<D: HeapOrder> {
    items: Vec<D::Element>,
}

impl<D: HeapOrder> Heap<D> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of elements currently stored.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The minimum element under the injected order, without removing it.
    pub fn peek(&self) -> Option<&D::Element> {
        self.items.first()
    }

    /// Inserts `element`, restoring the heap property upward.
    pub fn push(&mut self, order: &D, element: D::Element) {
        self.items.push(element);
        self.sift_up(order, self.items.len() - 1);
    }

    /// Removes and returns the minimum element under the injected order.
    pub fn pop(&mut self, order: &D) -> Result<D::Element, EmptyHeapError> {
        if self.items.is_empty() {
            return Err(EmptyHeapError);
        }
        let top = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(order, 0);
        }
        Ok(top)
    }

    /// Restores the heap property downward from `index`.
    ///
    /// Callers use this after growing the key of the element at `index`
    /// through state the order reads (shrinking the root's key leaves it at
    /// the root, so the call is a no-op then). Out-of-range indices are
    /// ignored.
    pub fn sift_down(&mut self, order: &D, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut least = index;
            if left < self.items.len() && order.precedes(&self.items[left], &self.items[least]) {
                least = left;
            }
            if right < self.items.len() && order.precedes(&self.items[right], &self.items[least]) {
                least = right;
            }
            if least == index {
                return;
            }
            self.items.swap(index, least);
            index = least;
        }
    }

    fn sift_up(&mut self, order: &D, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !order.precedes(&self.items[index], &self.items[parent]) {
                return;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }
}

impl<D: HeapOrder> Default for Heap<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: HeapOrder> fmt::Debug for Heap<D>
where
    D::Element: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap").field("items", &self.items).finish()
    }
}
