//! Randomized fingerprint distinctness properties.

use life_engine::core::Grid;
use life_engine::engine::fingerprint;
use proptest::prelude::*;

fn arb_grid(max_side: usize) -> impl Strategy<Value = Grid> {
    (1..=max_side, 1..=max_side)
        .prop_flat_map(|(height, width)| {
            proptest::collection::vec(any::<bool>(), height * width)
                .prop_map(move |cells| {
                    let mut grid = Grid::new(height, width);
                    for (i, alive) in cells.into_iter().enumerate() {
                        grid.set(i / width, i % width, alive);
                    }
                    grid
                })
        })
}

proptest! {
    #[test]
    fn fingerprint_is_deterministic(grid in arb_grid(12)) {
        prop_assert_eq!(fingerprint(&grid), fingerprint(&grid.clone()));
    }

    #[test]
    fn single_cell_flip_changes_fingerprint(
        grid in arb_grid(12),
        row_seed in any::<usize>(),
        col_seed in any::<usize>(),
    ) {
        let row = row_seed % grid.height();
        let col = col_seed % grid.width();

        let mut flipped = grid.clone();
        flipped.set(row, col, !grid.get(row, col));

        prop_assert_ne!(fingerprint(&grid), fingerprint(&flipped));
    }

    #[test]
    fn dimensions_always_distinguish(
        height in 1usize..=16,
        width in 1usize..=16,
        other_height in 1usize..=16,
        other_width in 1usize..=16,
    ) {
        prop_assume!((height, width) != (other_height, other_width));

        // All-dead grids have identical (empty) bit patterns, so only the
        // encoded dimensions can keep them apart.
        let a = fingerprint(&Grid::new(height, width));
        let b = fingerprint(&Grid::new(other_height, other_width));

        prop_assert_ne!(a, b);
    }
}
