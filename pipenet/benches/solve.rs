use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pipenet::{solve, PipeRecord, Problem};

/// Deterministic random network: a random spanning path of active pipes
/// followed by `extra` inactive pipes between random facilities.
fn network(nodes: usize, extra: usize, seed: u64) -> Problem {
    let mut state = seed.wrapping_add(1);
    let mut next = move |bound: u64| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) % bound
    };

    let mut pipes = Vec::with_capacity(nodes - 1 + extra);
    for v in 2..=nodes {
        let u = 1 + next(v as u64 - 1) as usize;
        pipes.push(PipeRecord::new(u, v, 1 + next(1000) as i64));
    }
    for _ in 0..extra {
        let a = 1 + next(nodes as u64) as usize;
        let b = 1 + next(nodes as u64) as usize;
        pipes.push(PipeRecord::new(a, b, 1 + next(1000) as i64));
    }
    Problem::new(nodes, 500, pipes)
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for &(nodes, extra) in &[(100, 200), (1_000, 2_000), (10_000, 20_000)] {
        let net = network(nodes, extra, 42).network().unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{nodes}x{extra}")),
            &net,
            |b, net| b.iter(|| solve(black_box(net))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
