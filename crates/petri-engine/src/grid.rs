//! The bounded-universe automaton engine.

use std::fmt;

use petri_core::{Construct, ALIVE_GLYPH, DEAD_GLYPH};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::config::{ConfigError, GridConfig, PoolConfig};
use crate::error::GridError;
use crate::scratch::NeighborScratch;

/// The eight Moore-neighborhood offsets as `(row, col)` deltas, in the
/// order the scratch accumulators are indexed.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Side length of the square patch written by [`Grid::randomize`].
pub const RANDOMIZE_SPAN: usize = 20;

/// A fixed-size Game of Life universe.
///
/// The buffer is rows × cols, row-major, every element exactly 0 or 1,
/// allocated once at construction and never resized. The stepping
/// boundary is non-wrapping: cells outside the grid are permanently
/// dead. The one deliberate exception is [`randomize`](Grid::randomize),
/// whose patch addressing wraps modulo the grid dimensions.
#[derive(Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
    scratch: NeighborScratch,
    pools: Vec<PoolConfig>,
    rng: ChaCha8Rng,
}

impl Grid {
    /// Build an all-dead grid from a configuration.
    ///
    /// # Errors
    ///
    /// Returns the first violation reported by
    /// [`GridConfig::validate`].
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let cell_count = config.rows * config.cols;
        Ok(Self {
            rows: config.rows,
            cols: config.cols,
            cells: vec![0; cell_count],
            scratch: NeighborScratch::new(cell_count),
            pools: config.pools,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Read-only view of the current buffer: row-major, one byte per
    /// cell, each exactly 0 or 1.
    pub fn state(&self) -> &[u8] {
        &self.cells
    }

    /// Whether the cell at `(row, col)` is alive.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.rows && col < self.cols,
            "({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col] == 1
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().map(|&cell| cell as usize).sum()
    }

    /// Advance exactly one generation and return the committed state.
    ///
    /// The entire transition is computed from an immutable snapshot of
    /// the prior state, so there are no read-after-write hazards within
    /// a tick. Spawning pools fire against the staged next state after
    /// rule evaluation; their writes neither see nor feed this tick's
    /// neighbor counts. The staged buffer is then committed atomically.
    pub fn step(&mut self) -> &[u8] {
        self.scratch.clear();
        self.accumulate_neighbors();
        self.apply_rule();
        self.apply_pools();
        std::mem::swap(&mut self.cells, &mut self.scratch.next);
        &self.cells
    }

    /// Overlay a shifted copy of the current buffer into each offset's
    /// accumulator, then sum the eight accumulators elementwise into the
    /// counts buffer.
    ///
    /// Each overlay is a run of whole-row slice copies restricted to the
    /// band where the shifted source stays in bounds; reads that would
    /// fall outside the grid contribute nothing, which is exactly the
    /// non-wrapping boundary.
    fn accumulate_neighbors(&mut self) {
        let rows = self.rows;
        let cols = self.cols;
        let cells = &self.cells;
        for (&(dr, dc), accumulator) in OFFSETS_8.iter().zip(&mut self.scratch.accumulators) {
            let row_start = (-dr).max(0) as usize;
            let row_end = rows - dr.max(0) as usize;
            let col_start = (-dc).max(0) as usize;
            let col_end = cols - dc.max(0) as usize;
            if col_start >= col_end {
                // Single-column grid shifted sideways: nothing in bounds.
                continue;
            }
            let width = col_end - col_start;
            let shift = dr as isize * cols as isize + dc as isize;
            for row in row_start..row_end {
                let dst = row * cols + col_start;
                let src = (dst as isize + shift) as usize;
                accumulator[dst..dst + width].copy_from_slice(&cells[src..src + width]);
            }
        }

        let NeighborScratch {
            accumulators,
            counts,
            ..
        } = &mut self.scratch;
        for accumulator in accumulators.iter() {
            for (count, &overlay) in counts.iter_mut().zip(accumulator) {
                *count += overlay;
            }
        }
    }

    /// Apply B3/S23 to every cell, writing the staged next state.
    fn apply_rule(&mut self) {
        let NeighborScratch { counts, next, .. } = &mut self.scratch;
        for ((staged, &current), &count) in
            next.iter_mut().zip(&self.cells).zip(counts.iter())
        {
            *staged = match (current, count) {
                (0, 3) => 1,
                (1, 2) | (1, 3) => 1,
                _ => 0,
            };
        }
    }

    /// Fire each configured pool against the staged next state.
    ///
    /// Pools are evaluated independently in configuration order; a pool
    /// that fires overwrites its whole rectangle regardless of what the
    /// rule pass produced there.
    fn apply_pools(&mut self) {
        let cols = self.cols;
        for pool in &self.pools {
            if self.rng.random::<f64>() >= pool.probability {
                continue;
            }
            let (row0, col0) = pool.origin;
            let (height, width) = pool.size;
            for row in row0..row0 + height {
                let start = row * cols + col0;
                for cell in &mut self.scratch.next[start..start + width] {
                    *cell = u8::from(self.rng.random::<bool>());
                }
            }
        }
    }

    /// Stamp a construct's matrix over the sub-rectangle at `target`.
    ///
    /// `target` is the top-left corner `(top, left)`. Every covered
    /// cell is overwritten, dead pattern cells included.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when the target rectangle
    /// does not fit inside the grid; the grid is left untouched.
    pub fn insert_construct(
        &mut self,
        construct: &Construct,
        target: (usize, usize),
    ) -> Result<(), GridError> {
        let (top, left) = target;
        let (height, width) = construct.shape();
        if top >= self.rows
            || left >= self.cols
            || height > self.rows - top
            || width > self.cols - left
        {
            return Err(GridError::OutOfBounds {
                target,
                shape: (height, width),
                grid: (self.rows, self.cols),
            });
        }
        for row in 0..height {
            let start = (top + row) * self.cols + left;
            for (cell, &alive) in self.cells[start..start + width]
                .iter_mut()
                .zip(construct.row(row))
            {
                *cell = u8::from(alive);
            }
        }
        Ok(())
    }

    /// Overwrite a [`RANDOMIZE_SPAN`]² patch anchored at `target` with
    /// independent Bernoulli(0.5) samples.
    ///
    /// Patch addressing wraps circularly modulo the grid dimensions, so
    /// a target near the high-index edge spills onto the low-index edge.
    /// On grids smaller than the patch the wrapped indices revisit
    /// cells and the last sample written wins.
    pub fn randomize(&mut self, target: (usize, usize)) {
        let row0 = target.0 % self.rows;
        let col0 = target.1 % self.cols;
        for dr in 0..RANDOMIZE_SPAN {
            let row = (row0 + dr) % self.rows;
            for dc in 0..RANDOMIZE_SPAN {
                let col = (col0 + dc) % self.cols;
                self.cells[row * self.cols + col] = u8::from(self.rng.random::<bool>());
            }
        }
    }

    /// Coordinates of every live cell in row-major order.
    ///
    /// Pure query. Rows with no live cells are skipped after a single
    /// containment scan, so sparse boards cost little more than the
    /// live population itself.
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        let mut coords = Vec::new();
        for (row, cells) in self.cells.chunks_exact(self.cols).enumerate() {
            if !cells.contains(&1) {
                continue;
            }
            coords.extend(
                cells
                    .iter()
                    .enumerate()
                    .filter(|&(_, &cell)| cell == 1)
                    .map(|(col, _)| (row, col)),
            );
        }
        coords
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks_exact(self.cols) {
            for &cell in row {
                write!(f, "{}", if cell == 1 { ALIVE_GLYPH } else { DEAD_GLYPH })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petri_core::catalog;

    fn plain_grid(rows: usize, cols: usize) -> Grid {
        Grid::new(GridConfig::new(rows, cols, 42)).unwrap()
    }

    #[test]
    fn new_rejects_invalid_config() {
        assert!(matches!(
            Grid::new(GridConfig::new(0, 10, 42)),
            Err(ConfigError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn new_grid_is_all_dead() {
        let grid = plain_grid(8, 12);
        assert_eq!(grid.rows(), 8);
        assert_eq!(grid.cols(), 12);
        assert_eq!(grid.population(), 0);
        assert!(grid.live_cells().is_empty());
        assert!(grid.state().iter().all(|&cell| cell == 0));
    }

    #[test]
    fn insert_construct_stamps_the_rectangle() {
        let mut grid = plain_grid(8, 8);
        grid.insert_construct(&catalog::block(), (3, 4)).unwrap();
        assert_eq!(grid.live_cells(), vec![(3, 4), (3, 5), (4, 4), (4, 5)]);

        // Dead pattern cells overwrite too.
        grid.insert_construct(&catalog::glider(), (3, 4)).unwrap();
        assert!(grid.is_alive(3, 4));
        assert!(!grid.is_alive(4, 4));
        assert_eq!(grid.population(), 5);
    }

    #[test]
    fn insert_construct_rejects_out_of_bounds() {
        let mut grid = plain_grid(8, 8);
        let err = grid.insert_construct(&catalog::glider(), (6, 6)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                target: (6, 6),
                shape: (3, 3),
                grid: (8, 8),
            }
        );
        assert_eq!(grid.population(), 0, "rejected insert must not write");
    }

    #[test]
    fn insert_construct_flush_with_edge_succeeds() {
        let mut grid = plain_grid(8, 8);
        grid.insert_construct(&catalog::glider(), (5, 5)).unwrap();
        assert_eq!(grid.population(), 5);
    }

    #[test]
    fn randomize_stays_inside_the_wrapped_patch() {
        let mut grid = plain_grid(50, 50);
        grid.randomize((5, 5));
        for (row, col) in grid.live_cells() {
            assert!((5..25).contains(&row), "row {row} outside patch");
            assert!((5..25).contains(&col), "col {col} outside patch");
        }
    }

    #[test]
    fn randomize_wraps_past_the_high_edge() {
        let mut grid = plain_grid(30, 30);
        grid.randomize((25, 25));

        // The patch is rows {25..30, 0..15} x cols {25..30, 0..15}.
        for (row, col) in grid.live_cells() {
            assert!(row >= 25 || row < 15, "row {row} outside wrapped patch");
            assert!(col >= 25 || col < 15, "col {col} outside wrapped patch");
        }
        // 15x15 wrapped quadrant of fair coin flips: some cell is alive.
        let wrapped = grid
            .live_cells()
            .into_iter()
            .filter(|&(row, col)| row < 15 && col < 15)
            .count();
        assert!(wrapped > 0, "wrap-around must reach the low-index corner");
    }

    #[test]
    fn pool_probability_zero_never_fires() {
        let mut config = GridConfig::new(10, 10, 7);
        config.pools.push(PoolConfig {
            origin: (2, 2),
            size: (5, 5),
            probability: 0.0,
        });
        let mut grid = Grid::new(config).unwrap();
        for _ in 0..100 {
            grid.step();
        }
        assert_eq!(grid.population(), 0, "p=0 pool must never write");
    }

    #[test]
    fn pool_probability_one_fires_every_tick() {
        let mut config = GridConfig::new(10, 10, 7);
        config.pools.push(PoolConfig {
            origin: (0, 0),
            size: (10, 10),
            probability: 1.0,
        });
        let mut grid = Grid::new(config).unwrap();
        let mut previous = grid.state().to_vec();
        for _ in 0..8 {
            let state = grid.step().to_vec();
            // 100 fresh coin flips: all-dead or a repeat of the previous
            // fill is astronomically unlikely.
            assert!(state.iter().any(|&cell| cell == 1));
            assert_ne!(state, previous, "p=1 pool must rewrite every tick");
            previous = state;
        }
    }

    #[test]
    fn pool_writes_are_confined_to_the_rectangle() {
        let mut config = GridConfig::new(12, 12, 99);
        config.pools.push(PoolConfig {
            origin: (4, 6),
            size: (3, 2),
            probability: 1.0,
        });
        let mut grid = Grid::new(config).unwrap();
        for _ in 0..20 {
            grid.step();
            for (row, col) in grid.live_cells() {
                assert!((4..7).contains(&row) && (6..8).contains(&col));
            }
        }
    }

    #[test]
    fn same_seed_same_run() {
        let mut config = GridConfig::new(20, 20, 1234);
        config.pools.push(PoolConfig {
            origin: (5, 5),
            size: (8, 8),
            probability: 0.5,
        });

        let mut a = Grid::new(config.clone()).unwrap();
        let mut b = Grid::new(config).unwrap();
        a.randomize((0, 0));
        b.randomize((0, 0));
        for _ in 0..50 {
            a.step();
            b.step();
        }
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn display_renders_one_glyph_per_cell() {
        let mut grid = plain_grid(2, 2);
        grid.insert_construct(&catalog::block(), (0, 0)).unwrap();
        let rendered = format!("{grid}");
        assert_eq!(rendered.lines().count(), 2);
        assert_eq!(rendered.matches(ALIVE_GLYPH).count(), 4);
    }
}
