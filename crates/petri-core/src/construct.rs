//! Immutable rectangular bit-pattern templates.
//!
//! A [`Construct`] is a reusable shape stamped into a grid: a fixed
//! rows × cols boolean matrix with no identity beyond its content. There
//! are no mutation operations; a "modified" construct is always a new
//! instance.

use std::fmt;

use crate::error::ConstructError;

/// Glyph for a live cell in pattern renderings.
pub const ALIVE_GLYPH: char = '■';
/// Glyph for a dead cell in pattern renderings.
pub const DEAD_GLYPH: char = '□';

/// An immutable rectangular boolean pattern, stored row-major.
///
/// Construction validates the shape: ragged input is rejected, never
/// padded or truncated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Construct {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Construct {
    /// Build a construct from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructError::Empty`] if there are no rows or the
    /// rows have zero width, and [`ConstructError::Ragged`] if any row's
    /// length differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, ConstructError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(ConstructError::Empty);
        }
        let mut cells = Vec::with_capacity(height * width);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ConstructError::Ragged {
                    row: index,
                    expected: width,
                    got: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            rows: height,
            cols: width,
            cells,
        })
    }

    /// Synthesize a side × side construct from the low `side * side`
    /// bits of `bits`.
    ///
    /// The bit string is read big-endian and reshaped row-major: the
    /// most significant of the `side * side` bits is cell `(0, 0)`, the
    /// least significant is the bottom-right cell, so
    /// `from_bits(2, 0b0001)` lights only cell `(1, 1)`. Higher bits of
    /// `bits` are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `side` is zero or `side * side` exceeds 128.
    pub fn from_bits(side: usize, bits: u128) -> Self {
        assert!(side > 0, "side must be non-zero");
        let n = side * side;
        assert!(n <= 128, "side {side} exceeds the 128-bit pattern word");
        let cells = (0..n).map(|i| bits >> (n - 1 - i) & 1 == 1).collect();
        Self {
            rows: side,
            cols: side,
            cells,
        }
    }

    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Read-only view of the pattern, row-major.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// One row of the pattern.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside the pattern.
    pub fn row(&self, row: usize) -> &[bool] {
        assert!(row < self.rows, "row {row} outside {}-row pattern", self.rows);
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Cell state at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the pattern.
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.rows && col < self.cols,
            "({row}, {col}) outside {}x{} pattern",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Whether every cell of the pattern is alive.
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|&cell| cell)
    }
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks_exact(self.cols) {
            for &cell in row {
                write!(f, "{}", if cell { ALIVE_GLYPH } else { DEAD_GLYPH })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn from_rows_accepts_rectangular_input() {
        let c = Construct::from_rows(vec![
            vec![true, false, true],
            vec![false, true, false],
        ])
        .unwrap();
        assert_eq!(c.shape(), (2, 3));
        assert!(c.get(0, 0));
        assert!(!c.get(1, 2));
        assert_eq!(c.population(), 3);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = Construct::from_rows(vec![vec![true, true], vec![true]]).unwrap_err();
        assert_eq!(
            err,
            ConstructError::Ragged {
                row: 1,
                expected: 2,
                got: 1,
            }
        );
    }

    #[test]
    fn from_rows_rejects_empty_input() {
        assert_eq!(Construct::from_rows(vec![]).unwrap_err(), ConstructError::Empty);
        assert_eq!(
            Construct::from_rows(vec![vec![], vec![]]).unwrap_err(),
            ConstructError::Empty
        );
    }

    #[test]
    fn from_bits_lays_out_big_endian_row_major() {
        // 0b1000 -> top-left only; 0b0001 -> bottom-right only.
        let top_left = Construct::from_bits(2, 0b1000);
        assert!(top_left.get(0, 0));
        assert_eq!(top_left.population(), 1);

        let bottom_right = Construct::from_bits(2, 0b0001);
        assert!(bottom_right.get(1, 1));
        assert_eq!(bottom_right.population(), 1);
    }

    #[test]
    fn from_bits_full_word_is_filled() {
        let c = Construct::from_bits(3, (1 << 9) - 1);
        assert!(c.is_filled());
        assert_eq!(c.population(), 9);
    }

    #[test]
    fn display_uses_one_glyph_per_cell() {
        let c = Construct::from_bits(2, 0b1001);
        let rendered = format!("{c}");
        let expected = format!("{ALIVE_GLYPH}{DEAD_GLYPH}\n{DEAD_GLYPH}{ALIVE_GLYPH}\n");
        assert_eq!(rendered, expected);
    }

    #[test]
    fn row_returns_the_row_slice() {
        let c = Construct::from_rows(vec![vec![true, false], vec![false, true]]).unwrap();
        assert_eq!(c.row(0), &[true, false]);
        assert_eq!(c.row(1), &[false, true]);
    }

    proptest! {
        #[test]
        fn from_bits_population_matches_popcount(
            side in 2usize..=5,
            raw in any::<u128>(),
        ) {
            let n = side * side;
            let bits = raw & ((1u128 << n) - 1);
            let c = Construct::from_bits(side, bits);
            prop_assert_eq!(c.population(), bits.count_ones() as usize);
        }

        #[test]
        fn from_bits_cells_match_bit_positions(
            side in 2usize..=4,
            raw in any::<u128>(),
        ) {
            let n = side * side;
            let bits = raw & ((1u128 << n) - 1);
            let c = Construct::from_bits(side, bits);
            for row in 0..side {
                for col in 0..side {
                    let shift = n - 1 - (row * side + col);
                    prop_assert_eq!(c.get(row, col), bits >> shift & 1 == 1);
                }
            }
        }
    }
}
