use super::RecordMap;

use std::{collections::BinaryHeap, cmp::Ordering};
use num_traits::Zero;


/// Bookkeeping for one node reached during a search
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SearchRecord<C> {
    pub parent: Option<usize>, // index of the record this node was reached from, None for the start
    pub given_cost: C, // g: best known cost from the start
    pub heuristic: C, // h: estimate to the goal, computed once on discovery
    pub total_cost: C, // f = g + h, open list ordering only
    pub open: bool,
    pub closed: bool,
    stamp: u64, // sequence of the live open list entry
}

impl<C: Zero + Copy> SearchRecord<C> {

    /// Record for the start node
    pub fn start(heuristic: C) -> Self {
        Self::discovered(None, Zero::zero(), heuristic)
    }

    /// Record for a node first reached from `parent` at `given_cost`
    pub fn discovered(parent: Option<usize>, given_cost: C, heuristic: C) -> Self {
        Self {
            parent,
            given_cost,
            heuristic,
            total_cost: given_cost + heuristic,
            open: false,
            closed: false,
            stamp: 0,
        }
    }
}


/// Entry on the open list heap
/// Records are not moved into the heap, only their index and the ordering keys at push time
#[derive(Debug)]
struct OpenEntry<C> {
    index: usize,
    total_cost: C,
    heuristic: C,
    sequence: u64,
}

// BinaryHeap pops the greatest entry, so every comparison is reversed:
// lowest f first, then lowest h, then first inserted
// Unordered costs (NaN) compare as ties, the heap stays consistent but the order is meaningless
impl<C: PartialOrd> Ord for OpenEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.total_cost.partial_cmp(&self.total_cost).unwrap_or(Ordering::Equal)
            .then_with(|| other.heuristic.partial_cmp(&self.heuristic).unwrap_or(Ordering::Equal))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}
impl<C: PartialOrd> PartialOrd for OpenEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: PartialOrd> PartialEq for OpenEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<C: PartialOrd> Eq for OpenEntry<C> {}


/// Frontier of the search
///
/// Improving an open node pushes a fresh entry and leaves the old one in the heap;
/// the record remembers the sequence of its live entry and stale entries are dropped on pop.
#[derive(Debug)]
pub(crate) struct OpenList<C> {
    heap: BinaryHeap<OpenEntry<C>>,
    next_sequence: u64,
    len: usize, // open records, stale heap entries excluded
}

impl<C: PartialOrd + Copy> OpenList<C> {

    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
            len: 0,
        }
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_sequence = 0;
        self.len = 0;
    }

    /// Number of open records
    pub fn len(&self) -> usize {
        self.len
    }

    /// Insert or re-prioritise the record at `index` using its current costs
    /// Marks it open, and no longer closed if it was
    pub fn push(&mut self, index: usize, record: &mut SearchRecord<C>) {
        if !record.open {
            self.len += 1;
        }
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        record.stamp = sequence;
        record.open = true;
        record.closed = false;

        self.heap.push(OpenEntry {
            index,
            total_cost: record.total_cost,
            heuristic: record.heuristic,
            sequence,
        });
    }

    /// Remove the open record with the lowest total cost, mark it closed and return its index
    pub fn pop<N>(&mut self, records: &mut RecordMap<N, C>) -> Option<usize> {
        while let Some(OpenEntry { index, sequence, .. }) = self.heap.pop() {
            let Some((_, record)) = records.get_index_mut(index) else {
                continue;
            };

            // superseded by a cheaper push, or already expanded
            if !record.open || record.stamp != sequence {
                continue;
            }

            record.open = false;
            record.closed = true;
            self.len -= 1;
            return Some(index);
        }
        None
    }
}
