//! Named pattern templates.
//!
//! The classic shapes used throughout the tests and examples: the block
//! still life, the blinker oscillator, and the glider spaceship.

use crate::Construct;

/// Build a construct from 0/1 integer rows.
fn from_ints(rows: &[&[u8]]) -> Construct {
    Construct::from_rows(
        rows.iter()
            .map(|row| row.iter().map(|&bit| bit != 0).collect())
            .collect(),
    )
    .expect("catalog shapes are rectangular")
}

/// The 2×2 block, the smallest still life.
pub fn block() -> Construct {
    from_ints(&[
        &[1, 1],
        &[1, 1],
    ])
}

/// The vertical three-cell blinker, the period-2 oscillator.
pub fn blinker() -> Construct {
    from_ints(&[
        &[1],
        &[1],
        &[1],
    ])
}

/// The glider, the smallest diagonal spaceship.
pub fn glider() -> Construct {
    from_ints(&[
        &[1, 1, 1],
        &[0, 0, 1],
        &[0, 1, 0],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_shapes_and_populations() {
        assert_eq!(block().shape(), (2, 2));
        assert_eq!(block().population(), 4);
        assert!(block().is_filled());

        assert_eq!(blinker().shape(), (3, 1));
        assert_eq!(blinker().population(), 3);

        assert_eq!(glider().shape(), (3, 3));
        assert_eq!(glider().population(), 5);
        assert!(!glider().is_filled());
    }
}
