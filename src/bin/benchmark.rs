//! Headless generation throughput benchmark

use std::time::Instant;
use rand::{SeedableRng, rngs::StdRng};
use game_of_life::domain::{ConwayRule, Grid, advance_generation};

fn benchmark_generation(size: usize, iterations: u32) -> f64 {
    let rule = ConwayRule;
    let mut grid = Grid::new(size, size);
    grid.randomize(&mut StdRng::seed_from_u64(size as u64), 0.3);

    let start = Instant::now();
    for _ in 0..iterations {
        advance_generation(&mut grid, &rule);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Generation Benchmark ===\n");

    let sizes = [64, 128, 256, 512, 1024];
    let iterations = 20;

    println!("{:>10} {:>12} {:>16}", "Size", "ms/gen", "Mcells/sec");
    println!("{:-<40}", "");

    for size in sizes {
        let ms = benchmark_generation(size, iterations);
        let cells = (size * size) as f64;
        println!(
            "{:>10} {:>12.3} {:>16.1}",
            format!("{}x{}", size, size),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0
        );
    }
}
