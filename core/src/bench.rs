//! Fixed-depth search benchmark from the opening position.

use std::time::Instant;

use board::Board;
use search::{Engine, SearchConfig};

pub fn run(depth: u8, stones: u32) {
    println!("Running benchmark: depth {depth}\n");

    let board = Board::new(stones);
    let mut engine = Engine::new(SearchConfig::new(depth, true));

    let start = Instant::now();
    let result = engine.choose(&board);
    let elapsed = start.elapsed();

    println!("=== Benchmark Summary ===");
    let Some(mv) = result.mv else {
        println!("Benchmark failed to complete");
        return;
    };
    println!("Best move: {mv}");
    println!("Score: {:.2}", result.value);
    println!("Nodes: {}", result.nodes);
    println!(
        "NPS: {:.0}",
        result.nodes as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );
    println!("Time: {} ms", elapsed.as_millis());
}
