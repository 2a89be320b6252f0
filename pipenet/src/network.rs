use smallvec::SmallVec;

use crate::edge::Edge;
use crate::error::InputError;

/// One raw pipe record as read from input: endpoints `a`, `b` and cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "(usize, usize, i64)", into = "(usize, usize, i64)")
)]
pub struct PipeRecord {
    pub a: usize,
    pub b: usize,
    pub cost: i64,
}

impl PipeRecord {
    pub fn new(a: usize, b: usize, cost: i64) -> Self {
        Self { a, b, cost }
    }
}

impl From<(usize, usize, i64)> for PipeRecord {
    fn from((a, b, cost): (usize, usize, i64)) -> Self {
        Self { a, b, cost }
    }
}

impl From<PipeRecord> for (usize, usize, i64) {
    fn from(p: PipeRecord) -> Self {
        (p.a, p.b, p.cost)
    }
}

/// An unvalidated problem instance: node count, discount threshold and the
/// pipe records in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem {
    pub nodes: usize,
    pub discount: i64,
    pub pipes: Vec<PipeRecord>,
}

impl Problem {
    pub fn new(nodes: usize, discount: i64, pipes: Vec<PipeRecord>) -> Self {
        Self {
            nodes,
            discount,
            pipes,
        }
    }

    /// Validate the records and build the adjacency structure.
    pub fn network(&self) -> Result<Network, InputError> {
        Network::build(self.nodes, self.pipes.len(), self.discount, &self.pipes)
    }
}

/// Largest supported node count. Union-find and adjacency storage are sized
/// by the node count, so it is bounded before anything is allocated.
pub const MAX_NODES: usize = 1 << 20;

/// Outgoing half of a pipe stored in the adjacency list of its first endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub to: usize,
    pub weight: i64,
    pub active: bool,
}

/// A validated pipe network.
///
/// Nodes are numbered `1..=nodes`; slot 0 exists but is never an endpoint.
/// The first `nodes - 1` records in input order are active pipes, every later
/// record is inactive. Activity is purely positional.
#[derive(Debug, Clone)]
pub struct Network {
    nodes: usize,
    discount: i64,
    pipe_count: usize,
    adjacency: Vec<SmallVec<[Link; 4]>>,
}

impl Network {
    /// Build a network from `declared` pipe records.
    ///
    /// Rejects networks where `|discount|` plus every `|cost|` exceeds
    /// `i64::MAX`, so tree totals and discounted costs never overflow.
    pub fn build(
        nodes: usize,
        declared: usize,
        discount: i64,
        pipes: &[PipeRecord],
    ) -> Result<Network, InputError> {
        if nodes == 0 {
            return Err(InputError::NoNodes);
        }
        if nodes > MAX_NODES {
            return Err(InputError::TooManyNodes {
                nodes,
                max: MAX_NODES,
            });
        }
        if declared != pipes.len() {
            return Err(InputError::EdgeCount {
                declared,
                actual: pipes.len(),
            });
        }

        let mut magnitude = u128::from(discount.unsigned_abs());
        let mut adjacency: Vec<SmallVec<[Link; 4]>> = vec![SmallVec::new(); nodes + 1];
        for (index, pipe) in pipes.iter().enumerate() {
            for node in [pipe.a, pipe.b] {
                if node == 0 || node > nodes {
                    return Err(InputError::NodeOutOfRange { index, node, nodes });
                }
            }
            magnitude += u128::from(pipe.cost.unsigned_abs());
            if magnitude > i64::MAX as u128 {
                return Err(InputError::CostOverflow);
            }
            adjacency[pipe.a].push(Link {
                to: pipe.b,
                weight: pipe.cost,
                active: index + 1 < nodes,
            });
        }

        Ok(Network {
            nodes,
            discount,
            pipe_count: pipes.len(),
            adjacency,
        })
    }

    /// Number of facilities.
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Union-find slots needed for 1-based node ids.
    pub fn slots(&self) -> usize {
        self.nodes + 1
    }

    pub fn discount(&self) -> i64 {
        self.discount
    }

    pub fn pipe_count(&self) -> usize {
        self.pipe_count
    }

    /// Pipes recorded under `node` as their first endpoint, in input order.
    pub fn links(&self, node: usize) -> &[Link] {
        &self.adjacency[node]
    }

    /// All pipes as edges, walking nodes ascending and each node's links in
    /// input order.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.pipe_count);
        for (u, links) in self.adjacency.iter().enumerate() {
            for link in links {
                edges.push(Edge::new(u, link.to, link.weight, link.active));
            }
        }
        edges
    }
}
