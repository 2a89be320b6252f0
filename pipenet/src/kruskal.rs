use crate::edge::{sort_for_kruskal, Edge};
use crate::network::Network;
use crate::unionfind::UnionFind;

/// Edges accepted by one Kruskal pass, in acceptance order.
///
/// On a disconnected network this is a spanning forest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpanningTree {
    edges: Vec<Edge>,
}

impl SpanningTree {
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of all edge weights.
    ///
    /// Cannot overflow for edges of a [`Network`], which bounds the summed
    /// absolute costs by `i64::MAX`.
    pub fn total_weight(&self) -> i64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Number of inactive (to be built) edges in the tree.
    pub fn inactive_count(&self) -> usize {
        self.edges.iter().filter(|e| !e.active).count()
    }

    /// Whether the tree connects all `nodes` facilities.
    pub fn spans(&self, nodes: usize) -> bool {
        self.edges.len() + 1 == nodes
    }
}

/// All edges of `network` in Kruskal order.
pub fn sorted_edges(network: &Network) -> Vec<Edge> {
    let mut edges = network.edges();
    sort_for_kruskal(&mut edges);
    edges
}

/// Run Kruskal over `sorted` edges using a fresh union-find of `slots`
/// elements.
pub fn build(slots: usize, sorted: &[Edge]) -> SpanningTree {
    build_filtered(slots, sorted, |_| false)
}

/// Run Kruskal over `sorted` edges, ignoring every edge for which `skip`
/// returns true.
///
/// Every edge is visited; there is no early exit once the tree spans.
pub fn build_filtered<F>(slots: usize, sorted: &[Edge], skip: F) -> SpanningTree
where
    F: Fn(&Edge) -> bool,
{
    let mut uf = UnionFind::new(slots);
    let mut edges = Vec::new();
    for edge in sorted {
        if uf.connected(edge.u, edge.v) || skip(edge) {
            continue;
        }
        uf.union(edge.u, edge.v);
        edges.push(*edge);
    }
    SpanningTree { edges }
}

/// Number of connected components among `slots` union-find elements when
/// every edge is applied.
pub fn component_count(slots: usize, edges: &[Edge]) -> usize {
    let mut uf = UnionFind::new(slots);
    for edge in edges {
        uf.union(edge.u, edge.v);
    }
    uf.components()
}
