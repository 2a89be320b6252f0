use std::collections::HashSet;

use crate::discount::{adjust, Adjustment};
use crate::edge::Edge;
use crate::kruskal::{build_filtered, SpanningTree};

/// Edges barred from later spanning-tree passes, matched by exact value.
///
/// Only ever grows. Insertion order is kept for reporting.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    members: HashSet<Edge>,
    order: Vec<Edge>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `edge`; returns false if it was already excluded.
    pub fn insert(&mut self, edge: Edge) -> bool {
        if self.members.insert(edge) {
            self.order.push(edge);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, edge: &Edge) -> bool {
        self.members.contains(edge)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Excluded edges in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.order.iter()
    }

    pub fn into_vec(self) -> Vec<Edge> {
        self.order
    }
}

/// Why the alternative-tree search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SearchStop {
    /// An equal-cost tree with an active maximum edge exists.
    Found,
    /// Excluding edges changed the number of tree edges.
    TreeSizeChanged,
    /// Too few unexplored edges remain to build another tree.
    BudgetExhausted,
}

/// Outcome of the alternative-tree search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchTrace {
    /// 1 when an alternative was found, 0 otherwise.
    pub reduction: usize,
    /// Number of rebuilt trees.
    pub iterations: usize,
    /// Excluded edges in the order they were barred.
    pub excluded: Vec<Edge>,
    pub stop: SearchStop,
}

/// Look for a tree with the same edge count and adjusted cost as `primary`
/// whose most expensive edge is active.
///
/// `sorted` is the full edge list in Kruskal order and `target` the
/// adjustment of `primary`, whose maximum edge is the first one excluded.
/// Each pass rebuilds from scratch without the excluded edges, then excludes
/// the new maximum edge unless it is active and the cost matches. The loop
/// runs while `sorted.len() > primary.len() - 1 + excluded`, and each pass
/// excludes an edge not seen before, so it ends within `sorted.len()` passes.
pub fn search_alternative(
    sorted: &[Edge],
    slots: usize,
    primary: &SpanningTree,
    target: &Adjustment,
    threshold: i64,
) -> SearchTrace {
    let mut excluded = ExclusionSet::new();
    excluded.insert(target.max.edge);

    let budget = sorted.len();
    let base = primary.len().saturating_sub(1);
    let mut iterations = 0;
    let mut stop = SearchStop::BudgetExhausted;

    while budget > base + excluded.len() {
        iterations += 1;
        let tree = build_filtered(slots, sorted, |e| excluded.contains(e));
        if tree.len() != primary.len() {
            stop = SearchStop::TreeSizeChanged;
            break;
        }
        let Some(adj) = adjust(&tree, threshold) else {
            stop = SearchStop::TreeSizeChanged;
            break;
        };
        if adj.max.edge.active && adj.cost == target.cost {
            stop = SearchStop::Found;
            break;
        }
        excluded.insert(adj.max.edge);
    }

    SearchTrace {
        reduction: usize::from(stop == SearchStop::Found),
        iterations,
        excluded: excluded.into_vec(),
        stop,
    }
}
