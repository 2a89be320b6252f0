use crate::discount::{adjust, Adjustment};
use crate::kruskal::{build, sorted_edges, SpanningTree};
use crate::network::Network;
use crate::search::{search_alternative, SearchTrace};

/// Full result of solving one network.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Minimum spanning tree (or forest) over all pipes.
    pub tree: SpanningTree,
    /// Discounted cost of `tree`; `None` when the tree has no edges.
    pub adjustment: Option<Adjustment>,
    /// Inactive pipes in `tree`.
    pub inactive: usize,
    /// Alternative-tree search, run only when the max edge is inactive.
    pub search: Option<SearchTrace>,
    /// Whether `tree` connects every facility.
    pub spanning: bool,
    /// Minimum number of pipes that must be built.
    pub answer: usize,
}

/// Solve a validated network.
pub fn solve(network: &Network) -> Solution {
    let slots = network.slots();
    let sorted = sorted_edges(network);
    let tree = build(slots, &sorted);
    let adjustment = adjust(&tree, network.discount());

    let search = adjustment
        .as_ref()
        .filter(|adj| !adj.max.edge.active)
        .map(|adj| search_alternative(&sorted, slots, &tree, adj, network.discount()));

    let inactive = tree.inactive_count();
    let reduction = search.as_ref().map_or(0, |s| s.reduction);

    Solution {
        spanning: tree.spans(network.nodes()),
        answer: inactive - reduction,
        tree,
        adjustment,
        inactive,
        search,
    }
}
