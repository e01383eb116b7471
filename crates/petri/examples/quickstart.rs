//! Petri quickstart: build a universe, stamp a pattern, step it.
//!
//! Demonstrates:
//!   1. Building a validated GridConfig with a spawning pool
//!   2. Stamping a catalog pattern into the grid
//!   3. Stepping at interactive scale and reading live cells
//!   4. Perturbing a region with randomize()
//!   5. Rendering a small board excerpt
//!
//! Run with:
//!   cargo run --example quickstart

use std::time::Instant;

use petri::prelude::*;

// ─── Board parameters ───────────────────────────────────────────
//
// The interactive host drives a 500-wide, 350-tall universe; a
// renderer maps each cell to a square of pixels and calls step()
// once per frame.

const ROWS: usize = 350;
const COLS: usize = 500;
const TICKS: usize = 120;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Petri Quickstart ===\n");

    // 1. Configure the universe: one spawning pool that re-seeds a
    //    30×30 region with probability 0.01 per tick.
    let config = GridConfig {
        rows: ROWS,
        cols: COLS,
        seed: 42,
        pools: vec![PoolConfig::new((100, 40), (30, 30))],
    };
    let mut grid = Grid::new(config)?;
    println!("Universe: {}x{} cells, 1 spawning pool", grid.rows(), grid.cols());

    // 2. Stamp a glider well away from the boundary.
    grid.insert_construct(&catalog::glider(), (50, 50))?;
    println!("Inserted glider at (50, 50), population {}\n", grid.population());

    // 3. Step and watch the population evolve.
    let started = Instant::now();
    for tick in 1..=TICKS {
        grid.step();
        if tick % 30 == 0 {
            println!("  tick {:>3}: population {}", tick, grid.population());
        }
    }
    let elapsed = started.elapsed();
    println!(
        "\n{TICKS} ticks in {:.1} ms ({:.0} ticks/sec)",
        elapsed.as_secs_f64() * 1e3,
        TICKS as f64 / elapsed.as_secs_f64(),
    );

    // 4. Perturb: scatter a 20×20 patch of noise where a pointer click
    //    would land, then keep stepping.
    grid.randomize((200, 300));
    println!("\nRandomized a {RANDOMIZE_SPAN}x{RANDOMIZE_SPAN} patch at (200, 300)");
    for _ in 0..30 {
        grid.step();
    }
    println!("Population after the burst settles: {}", grid.population());

    // 5. Render a small excerpt around the pool on its own board.
    let mut closeup = Grid::new(GridConfig::new(12, 24, 7))?;
    closeup.insert_construct(&catalog::glider(), (2, 4))?;
    closeup.insert_construct(&catalog::block(), (5, 14))?;
    closeup.step();
    println!("\nA 12x24 close-up, one tick after seeding:\n{closeup}");

    Ok(())
}
