use criterion::{criterion_group, criterion_main, Criterion};
use grid_path_visualizer::{DijkstraSolver, GridConfig, GridSolver, DEFAULT_WALL_PROBABILITY};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

fn default_grid_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let config = GridConfig::default();
    let open = config.build().unwrap();
    let walled = open.with_random_walls(&mut rng, DEFAULT_WALL_PROBABILITY);
    let solver = DijkstraSolver;
    for (name, grid) in [("open", open), ("random walls", walled)] {
        let mut grid = grid;
        c.bench_function(
            format!("dijkstra {}x{}, {name}", config.rows, config.cols).as_str(),
            |b| b.iter(|| black_box(solver.get_path(&mut grid))),
        );
    }
}

criterion_group!(benches, default_grid_bench);
criterion_main!(benches);
