/// Deterministic synthetic networks with a known answer.
use pipenet::{PipeRecord, Problem};

/// Seeded LCG pseudo-random number generator.
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        // LCG with Knuth's constants
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// Uniform integer in `lo..=hi`.
    pub fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + (self.next_u64() >> 33) % (hi - lo + 1)
    }
}

/// Random tree of active pipes (weights 1..=100) over all facilities plus
/// `extra` inactive pipes (weights 101..=1000). The active tree is the unique
/// choice, so the answer is 0.
pub fn active_backbone(nodes: usize, extra: usize, seed: u64) -> Problem {
    assert!(nodes >= 2, "backbone needs at least two facilities");
    let mut rng = Rng::new(seed);
    let mut pipes = Vec::with_capacity(nodes - 1 + extra);
    for v in 2..=nodes {
        let parent = rng.range(1, v as u64 - 1) as usize;
        pipes.push(PipeRecord::new(parent, v, rng.range(1, 100) as i64));
    }
    push_random(&mut rng, &mut pipes, nodes, extra, 101, 1000);
    Problem::new(nodes, rng.range(0, 50) as i64, pipes)
}

/// Active tree over facilities `1..nodes` while facility `nodes` is reachable
/// only through `links` inactive pipes heavier than everything else. One new
/// pipe is always required, so the answer is 1.
pub fn detached_facility(nodes: usize, extra: usize, links: usize, seed: u64) -> Problem {
    assert!(nodes >= 3, "detached facility needs at least three facilities");
    assert!(links >= 1, "detached facility needs at least one link");
    let mut rng = Rng::new(seed);
    let last = nodes;
    let mut pipes = Vec::with_capacity(nodes - 1 + extra + links);
    for v in 2..last {
        let parent = rng.range(1, v as u64 - 1) as usize;
        pipes.push(PipeRecord::new(parent, v, rng.range(1, 100) as i64));
    }
    // fills the last active position
    pipes.push(PipeRecord::new(1, 2, rng.range(1, 100) as i64));
    push_random(&mut rng, &mut pipes, last - 1, extra, 101, 1000);
    for _ in 0..links {
        let a = rng.range(1, last as u64 - 1) as usize;
        pipes.push(PipeRecord::new(a, last, rng.range(1001, 2000) as i64));
    }
    Problem::new(nodes, rng.range(0, 50) as i64, pipes)
}

fn push_random(
    rng: &mut Rng,
    pipes: &mut Vec<PipeRecord>,
    nodes: usize,
    count: usize,
    lo: u64,
    hi: u64,
) {
    for _ in 0..count {
        let a = rng.range(1, nodes as u64) as usize;
        let b = rng.range(1, nodes as u64) as usize;
        pipes.push(PipeRecord::new(a, b, rng.range(lo, hi) as i64));
    }
}
