use super::NodeId;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::collections::{BinaryHeap, HashMap};

/// The set of discovered but not yet expanded nodes.
///
/// Each position appears at most once. Selection returns the entry with the
/// lowest score; among equal scores, the entry inserted earliest wins. An entry
/// which replaced another counts as newly inserted.
pub trait Frontier {
    /// Add a node at a position not currently in the frontier.
    fn insert(&mut self, id: NodeId, position: Point, score: f64);

    /// The node currently held for `position`, with its score.
    fn get(&self, position: Point) -> Option<(NodeId, f64)>;

    /// Swap the node held for `position` for a new one.
    fn replace(&mut self, id: NodeId, position: Point, score: f64);

    /// Remove and return the cheapest node.
    fn pop_cheapest(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which [`Frontier`] implementation a search uses.
///
/// Both produce identical paths; they differ only in cost per operation.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
#[serde(rename_all = "lowercase")]
#[display(style = "lowercase")]
pub enum FrontierKind {
    /// Unordered list with a linear scan for the minimum.
    #[default]
    Linear,
    /// Binary heap with a position index.
    Heap,
}

#[derive(Clone, Copy, Debug)]
struct ListEntry {
    id: NodeId,
    position: Point,
    score: f64,
}

/// Insertion-ordered list frontier.
///
/// `O(n)` selection and lookup; fine for small grids.
#[derive(Debug, Default)]
pub struct LinearFrontier {
    entries: Vec<ListEntry>,
}

impl LinearFrontier {
    fn find(&self, position: Point) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.position == position)
    }
}

impl Frontier for LinearFrontier {
    fn insert(&mut self, id: NodeId, position: Point, score: f64) {
        debug_assert!(self.find(position).is_none());
        self.entries.push(ListEntry {
            id,
            position,
            score,
        });
    }

    fn get(&self, position: Point) -> Option<(NodeId, f64)> {
        self.find(position).map(|idx| {
            let entry = &self.entries[idx];
            (entry.id, entry.score)
        })
    }

    fn replace(&mut self, id: NodeId, position: Point, score: f64) {
        if let Some(idx) = self.find(position) {
            self.entries.remove(idx);
        }
        self.insert(id, position, score);
    }

    fn pop_cheapest(&mut self) -> Option<NodeId> {
        let mut cheapest = 0;
        for (idx, entry) in self.entries.iter().enumerate().skip(1) {
            // strict comparison keeps the earliest of equal scores
            if entry.score < self.entries[cheapest].score {
                cheapest = idx;
            }
        }
        (!self.entries.is_empty()).then(|| self.entries.remove(cheapest).id)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Binary heap entry.
// https://doc.rust-lang.org/std/collections/binary_heap/#examples
#[derive(Copy, Clone, Debug)]
struct HeapEntry {
    score: f64,
    sequence: u64,
    position: Point,
    id: NodeId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl Ord for HeapEntry {
    fn cmp(&self, other: &HeapEntry) -> std::cmp::Ordering {
        // Notice that the we flip the ordering on both keys.
        // Sequence numbers are unique, so no two entries compare equal.
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &HeapEntry) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue frontier.
///
/// `O(log n)` selection and `O(1)` lookup. Replaced entries stay in the heap
/// and are skipped when they surface.
#[derive(Debug, Default)]
pub struct HeapFrontier {
    heap: BinaryHeap<HeapEntry>,
    // live entry per position: (node, score, sequence)
    index: HashMap<Point, (NodeId, f64, u64)>,
    next_sequence: u64,
}

impl HeapFrontier {
    fn push(&mut self, id: NodeId, position: Point, score: f64) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.index.insert(position, (id, score, sequence));
        self.heap.push(HeapEntry {
            score,
            sequence,
            position,
            id,
        });
    }
}

impl Frontier for HeapFrontier {
    fn insert(&mut self, id: NodeId, position: Point, score: f64) {
        debug_assert!(!self.index.contains_key(&position));
        self.push(id, position, score);
    }

    fn get(&self, position: Point) -> Option<(NodeId, f64)> {
        self.index
            .get(&position)
            .map(|&(id, score, _sequence)| (id, score))
    }

    fn replace(&mut self, id: NodeId, position: Point, score: f64) {
        self.push(id, position, score);
    }

    fn pop_cheapest(&mut self) -> Option<NodeId> {
        while let Some(entry) = self.heap.pop() {
            match self.index.get(&entry.position) {
                Some(&(_, _, sequence)) if sequence == entry.sequence => {
                    self.index.remove(&entry.position);
                    return Some(entry.id);
                }
                // stale
                _ => continue,
            }
        }
        None
    }

    fn len(&self) -> usize {
        self.index.len()
    }
}
