//! Working-set strategies for selecting the next cell to finalize.
//!
//! Both strategies order cells by the same [`Key`]: distance, then the
//! round in which that distance was assigned, then table index. Under unit
//! weights this reproduces a stable sort by distance over cells kept in
//! insertion order, so the two strategies finalize cells identically.

use std::collections::BinaryHeap;

use crate::search::{Node, UNREACHABLE};

/// Which working-set implementation a [`PathSearch`](crate::PathSearch) uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrontierKind {
    /// Every unfinalized cell sits in a list scanned for the minimum on
    /// each pop. O(V) per pop.
    #[default]
    Scan,
    /// Binary heap of relaxed cells with lazy deletion. O(log V) per pop.
    Heap,
}

/// Selection key. Smaller keys are finalized first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Key {
    pub(crate) dist: u32,
    pub(crate) round: u32,
    pub(crate) idx: usize,
}

impl Key {
    #[inline]
    pub(crate) fn of(nodes: &[Node], idx: usize) -> Self {
        let n = &nodes[idx];
        Self {
            dist: n.dist,
            round: n.round,
            idx,
        }
    }
}

/// Heap entry, ordered so that `BinaryHeap` (max-heap) pops the smallest key.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef(Key);

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.0.cmp(&self.0)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

pub(crate) enum Frontier {
    Scan(Vec<usize>),
    Heap(BinaryHeap<NodeRef>),
}

impl Frontier {
    pub(crate) fn new(kind: FrontierKind) -> Self {
        match kind {
            FrontierKind::Scan => Self::Scan(Vec::new()),
            FrontierKind::Heap => Self::Heap(BinaryHeap::new()),
        }
    }

    pub(crate) fn kind(&self) -> FrontierKind {
        match self {
            Self::Scan(_) => FrontierKind::Scan,
            Self::Heap(_) => FrontierKind::Heap,
        }
    }

    /// Prepare for a new run whose only finite entry is `start`.
    pub(crate) fn seed(&mut self, nodes: &[Node], start: usize) {
        match self {
            Self::Scan(open) => {
                open.clear();
                open.extend(0..nodes.len());
            }
            Self::Heap(heap) => {
                heap.clear();
                heap.push(NodeRef(Key::of(nodes, start)));
            }
        }
    }

    /// Note that `idx` received a new distance.
    #[inline]
    pub(crate) fn relaxed(&mut self, nodes: &[Node], idx: usize) {
        if let Self::Heap(heap) = self {
            heap.push(NodeRef(Key::of(nodes, idx)));
        }
    }

    /// Remove and return the unfinalized entry with the smallest key.
    ///
    /// The scan strategy may return an entry at [`UNREACHABLE`] once nothing
    /// finite is left; the heap strategy returns `None` instead.
    pub(crate) fn pop(&mut self, nodes: &[Node]) -> Option<usize> {
        match self {
            Self::Scan(open) => {
                let (pos, _) = open
                    .iter()
                    .enumerate()
                    .min_by_key(|&(_, &i)| Key::of(nodes, i))?;
                Some(open.swap_remove(pos))
            }
            Self::Heap(heap) => {
                while let Some(NodeRef(key)) = heap.pop() {
                    let n = &nodes[key.idx];
                    // Skip stale entries.
                    if n.closed || Key::of(nodes, key.idx) != key {
                        continue;
                    }
                    debug_assert!(n.dist != UNREACHABLE);
                    return Some(key.idx);
                }
                None
            }
        }
    }

    /// Entries still held. For the heap this includes stale ones.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Scan(open) => open.len(),
            Self::Heap(heap) => heap.len(),
        }
    }
}
