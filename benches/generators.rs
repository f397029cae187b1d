use criterion::{criterion_group, criterion_main, Criterion};
use mazes::{
    generators::{self, CarveOptions},
    grid::Grid,
    grid_dimensions::GridDimensions,
    random::Lcg31,
    units::{Height, Width},
};

fn dimensions_99() -> GridDimensions {
    GridDimensions::new(Width(99), Height(99)).unwrap()
}

fn bench_complex_maze_99(c: &mut Criterion) {
    let options = CarveOptions::default();
    c.bench_function("complex_maze_99", move |b| {
        b.iter(|| {
            let mut g = Grid::new(dimensions_99());
            generators::carve(&mut g, &mut Lcg31::new(1), &options).unwrap()
        })
    });
}

fn bench_backtracker_maze_99(c: &mut Criterion) {
    let options = CarveOptions::backtracker();
    c.bench_function("backtracker_maze_99", move |b| {
        b.iter(|| {
            let mut g = Grid::new(dimensions_99());
            generators::carve(&mut g, &mut Lcg31::new(1), &options).unwrap()
        })
    });
}

criterion_group!(benches, bench_complex_maze_99, bench_backtracker_maze_99);
criterion_main!(benches);
