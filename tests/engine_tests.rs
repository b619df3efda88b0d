//! Step-engine and pattern behavior tests using the built-in pattern library.

use life_engine::core::{Grid, RuleSet};
use life_engine::engine::{count_live_neighbors, fingerprint, step};
use life_engine::patterns;

fn step_n(grid: &Grid, rules: &RuleSet, n: u64) -> Grid {
    let mut current = grid.clone();
    for _ in 0..n {
        current = step(&current, rules).grid;
    }
    current
}

// =============================================================================
// Neighbor Counting
// =============================================================================

#[test]
fn test_lone_center_cell_has_zero_neighbors() {
    let mut grid = Grid::new(3, 3);
    grid.set(1, 1, true);

    assert_eq!(count_live_neighbors(&grid, 1, 1), 0);

    // No survival from 0 neighbors under Conway rules.
    let result = step(&grid, &RuleSet::conway());
    assert!(result.changed);
    assert!(!result.grid.has_life());
}

#[test]
fn test_full_moore_neighborhood() {
    let grid = Grid::from_rows(&["###", "###", "###"]).unwrap();

    assert_eq!(count_live_neighbors(&grid, 1, 1), 8);
    assert_eq!(count_live_neighbors(&grid, 0, 0), 3);
    assert_eq!(count_live_neighbors(&grid, 0, 1), 5);
}

// =============================================================================
// Still Lifes
// =============================================================================

#[test]
fn test_still_lifes_are_fixed_points() {
    for pattern in [&patterns::BLOCK, &patterns::BEEHIVE, &patterns::TUB] {
        let grid = pattern.grid(2);
        let result = step(&grid, &RuleSet::conway());

        assert!(!result.changed, "{} should not change", pattern.name);
        assert_eq!(result.grid, grid, "{} content unchanged", pattern.name);
    }
}

// =============================================================================
// Oscillators
// =============================================================================

#[test]
fn test_blinker_returns_to_origin_after_two_steps() {
    let grid = patterns::BLINKER.grid(2);
    let origin = fingerprint(&grid);

    let one = step_n(&grid, &RuleSet::conway(), 1);
    assert_ne!(fingerprint(&one), origin);

    let two = step_n(&grid, &RuleSet::conway(), 2);
    assert_eq!(fingerprint(&two), origin);
}

#[test]
fn test_period_two_oscillators() {
    for pattern in [&patterns::TOAD, &patterns::BEACON] {
        let grid = pattern.grid(2);
        let flipped = step_n(&grid, &RuleSet::conway(), 1);
        let back = step_n(&grid, &RuleSet::conway(), 2);

        assert_ne!(flipped, grid, "{} changes at odd phases", pattern.name);
        assert_eq!(back, grid, "{} has period 2", pattern.name);
    }
}

#[test]
fn test_pulsar_has_period_three() {
    let grid = patterns::PULSAR.grid(2);

    let states: Vec<Grid> = (0..=3).map(|n| step_n(&grid, &RuleSet::conway(), n)).collect();

    assert_eq!(states[3], states[0]);
    assert_ne!(states[1], states[0]);
    assert_ne!(states[2], states[0]);
    assert_ne!(states[2], states[1]);
}

// =============================================================================
// Spaceships
// =============================================================================

#[test]
fn test_glider_conserves_population_while_travelling() {
    // 12x12 leaves room for 24 steps of diagonal travel from the corner.
    let mut grid = Grid::new(12, 12);
    patterns::GLIDER.stamp(&mut grid, 1, 1);

    let mut current = grid.clone();
    for generation in 1..=20 {
        current = step(&current, &RuleSet::conway()).grid;
        assert_eq!(
            current.population(),
            5,
            "glider population at generation {generation}"
        );
    }
}

#[test]
fn test_glider_translates_with_congruent_shape() {
    let mut grid = Grid::new(12, 12);
    patterns::GLIDER.stamp(&mut grid, 1, 1);

    let moved = step_n(&grid, &RuleSet::conway(), 4);

    assert_ne!(fingerprint(&moved), fingerprint(&grid), "it has moved");

    // One full period shifts the glider one cell down and one right.
    let shifted: Vec<_> = grid.live_cells().map(|(r, c)| (r + 1, c + 1)).collect();
    let arrived: Vec<_> = moved.live_cells().collect();
    assert_eq!(arrived, shifted);
}

#[test]
fn test_lwss_translates_horizontally() {
    let mut grid = Grid::new(10, 30);
    patterns::LWSS.stamp(&mut grid, 3, 20);

    let moved = step_n(&grid, &RuleSet::conway(), 4);

    // One full period shifts the ship two cells toward the wall it faces.
    let shifted: Vec<_> = grid.live_cells().map(|(r, c)| (r, c - 2)).collect();
    let arrived: Vec<_> = moved.live_cells().collect();
    assert_eq!(arrived, shifted);
}

// =============================================================================
// Extinction
// =============================================================================

#[test]
fn test_lone_cell_extinction_is_a_fixed_point() {
    let mut grid = Grid::new(5, 5);
    grid.set(2, 2, true);

    let first = step(&grid, &RuleSet::conway());
    assert!(first.changed);
    assert!(!first.grid.has_life());

    let second = step(&first.grid, &RuleSet::conway());
    assert!(!second.changed, "dead stays dead");
    assert!(!second.grid.has_life());
}

// =============================================================================
// Rule Variants
// =============================================================================

#[test]
fn test_variants_diverge_from_conway() {
    // A shape with a 6-neighbor dead cell evolves differently under
    // HighLife than under Conway from the very first step.
    let grid = Grid::from_rows(&[".....", ".###.", ".#.#.", ".#...", "....."]).unwrap();

    let conway = step(&grid, &RuleSet::conway()).grid;
    let highlife = step(&grid, &RuleSet::highlife()).grid;

    assert_ne!(conway, highlife);
}

#[test]
fn test_rules_parsed_from_strings_behave_identically() {
    let grid = patterns::R_PENTOMINO.grid(4);
    let parsed: RuleSet = "B3/S23".parse().unwrap();

    assert_eq!(
        step_n(&grid, &parsed, 10),
        step_n(&grid, &RuleSet::conway(), 10)
    );
}
