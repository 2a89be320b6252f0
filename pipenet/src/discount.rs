use crate::edge::Edge;
use crate::kruskal::SpanningTree;

/// The edge the discount applies to, with its position in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaxEdge {
    pub index: usize,
    pub edge: Edge,
}

/// Cost of a tree after discounting its most expensive edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adjustment {
    pub max: MaxEdge,
    /// Sum of all tree edge weights.
    pub total: i64,
    /// Amount subtracted: `min(threshold, max.edge.weight)`.
    pub discount: i64,
    /// `total - discount`.
    pub cost: i64,
}

/// Locate the most expensive edge of a tree.
///
/// Scans in acceptance order with a running maximum that starts at zero and
/// only moves on a strictly greater weight, so the first of several equal
/// maxima wins and index 0 is chosen when no weight is positive.
pub fn max_edge(edges: &[Edge]) -> Option<MaxEdge> {
    if edges.is_empty() {
        return None;
    }
    let mut largest = 0;
    let mut index = 0;
    for (i, edge) in edges.iter().enumerate() {
        if edge.weight > largest {
            index = i;
            largest = edge.weight;
        }
    }
    Some(MaxEdge {
        index,
        edge: edges[index],
    })
}

/// Apply the discount `threshold` to the tree's most expensive edge.
///
/// Returns `None` for an empty tree.
pub fn adjust(tree: &SpanningTree, threshold: i64) -> Option<Adjustment> {
    let max = max_edge(tree.edges())?;
    let total = tree.total_weight();
    let discount = threshold.min(max.edge.weight);
    Some(Adjustment {
        max,
        total,
        discount,
        cost: total - discount,
    })
}
