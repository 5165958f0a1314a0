//! A stable, min-first priority queue.

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::BinaryHeap;
use std::default::Default;
use std::fmt::Debug;

use super::SearchQueue;

/// Wrapper for queued items which sorts so that the lowest
/// priority, and then the earliest insertion, is at the top
/// of a max-heap.
#[derive(Debug)]
struct Entry<T, P> {
    priority: P,
    sequence: u64,
    item: T,
}

impl<T, P> PartialEq for Entry<T, P>
where
    P: PartialOrd,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P> Eq for Entry<T, P> where P: PartialOrd {}

impl<T, P> Ord for Entry<T, P>
where
    P: PartialOrd,
{
    fn cmp(&self, other: &Self) -> Ordering {
        // Priorities which don't compare (NaN) fall back to insertion order.
        self.priority
            .partial_cmp(&other.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.sequence.cmp(&other.sequence))
            .reverse()
    }
}

impl<T, P> PartialOrd for Entry<T, P>
where
    P: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority queue which always pops the item with the lowest
/// priority. Items with equal priority pop in the order they
/// were pushed.
#[derive(Debug)]
pub struct PriorityQueue<T, P> {
    queue: BinaryHeap<Entry<T, P>>,
    sequence: u64,
}

impl<T, P> Default for PriorityQueue<T, P>
where
    P: PartialOrd,
{
    fn default() -> Self {
        PriorityQueue {
            queue: BinaryHeap::new(),
            sequence: 0,
        }
    }
}

impl<T, P> PriorityQueue<T, P>
where
    P: PartialOrd + Copy,
{
    /// The lowest priority currently queued.
    pub fn peek_priority(&self) -> Option<P> {
        self.queue.peek().map(|e| e.priority)
    }
}

impl<T, P> SearchQueue for PriorityQueue<T, P>
where
    P: PartialOrd,
{
    type Candidate = T;
    type Priority = P;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop().map(|e| e.item)
    }

    fn push(&mut self, item: Self::Candidate, priority: Self::Priority) {
        self.queue.push(Entry {
            priority,
            sequence: self.sequence,
            item,
        });
        self.sequence += 1;
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
