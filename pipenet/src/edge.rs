use std::cmp::Ordering;

/// A pipe between two facilities.
///
/// `active` pipes already exist; inactive ones would have to be built.
/// Edges are plain values: two edges are the same edge exactly when
/// endpoints, weight and activity all match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub weight: i64,
    pub active: bool,
}

impl Edge {
    pub fn new(u: usize, v: usize, weight: i64, active: bool) -> Self {
        Self {
            u,
            v,
            weight,
            active,
        }
    }
}

/// Order in which Kruskal considers edges: ascending weight, and at equal
/// weight an active edge comes before an inactive one.
///
/// Edges equal on both keys compare `Equal`; callers must use a stable sort
/// so those keep their input order.
pub fn kruskal_order(a: &Edge, b: &Edge) -> Ordering {
    match a.weight.cmp(&b.weight) {
        Ordering::Equal => match (a.active, b.active) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        },
        ord => ord,
    }
}

/// Stable-sort `edges` into Kruskal order.
pub fn sort_for_kruskal(edges: &mut [Edge]) {
    edges.sort_by(kruskal_order);
}
