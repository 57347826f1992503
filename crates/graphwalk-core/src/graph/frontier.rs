//! Frontier strategies that decide expansion order
//!
//! - [`FifoFrontier`]: queue, breadth-first
//! - [`LifoFrontier`]: stack, depth-first
//! - [`PriorityFrontier`]: min-heap keyed by tentative distance, Dijkstra

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

pub trait Frontier<T> {
    /// True when entries are marked visited as they are pushed (discovery),
    /// false when they are marked as they are popped.
    const MARKS_ON_PUSH: bool;

    fn push(&mut self, item: T);

    fn pop(&mut self) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Push a batch so that later pops yield it in the given order
    fn push_in_order<I>(&mut self, items: I)
    where
        I: DoubleEndedIterator<Item = T>,
    {
        for item in items {
            self.push(item);
        }
    }
}

#[derive(Debug)]
pub struct FifoFrontier<T> {
    queue: VecDeque<T>,
}

impl<T> Default for FifoFrontier<T> {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<T> Frontier<T> for FifoFrontier<T> {
    const MARKS_ON_PUSH: bool = true;

    fn push(&mut self, item: T) {
        self.queue.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

#[derive(Debug)]
pub struct LifoFrontier<T> {
    stack: Vec<T>,
}

impl<T> Default for LifoFrontier<T> {
    fn default() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<T> Frontier<T> for LifoFrontier<T> {
    const MARKS_ON_PUSH: bool = false;

    fn push(&mut self, item: T) {
        self.stack.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn push_in_order<I>(&mut self, items: I)
    where
        I: DoubleEndedIterator<Item = T>,
    {
        // Reverse so the first declared item sits on top
        self.stack.extend(items.rev());
    }
}

/// Heap entry ordered by distance, then by insertion sequence
#[derive(Debug, Clone)]
pub(crate) struct HeapEntry<T> {
    distance: i64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.seq == other.seq
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-priority queue; equal distances pop in insertion order
#[derive(Debug)]
pub struct PriorityFrontier<T> {
    heap: BinaryHeap<Reverse<HeapEntry<T>>>,
    next_seq: u64,
}

impl<T> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<T> PriorityFrontier<T> {
    pub fn push(&mut self, distance: i64, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(HeapEntry {
            distance,
            seq,
            item,
        }));
    }

    pub fn pop(&mut self) -> Option<(i64, T)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.distance, entry.item))
    }
}
