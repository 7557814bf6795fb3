//! Property tests for the shield pipeline over seeded random mazes.

use picket_core::{Action, Cell};
use picket_shield::{
    admissible, build_occupancy, evaluate, propagate, LocalShield, Metric, MetricKind,
    MinTimeToCapture, ProbabilityClass,
};
use picket_space::{Grid, VisibilityMap};
use picket_test_utils::{random_free_cells, random_maze};
use proptest::prelude::*;

/// A maze, a free agent cell, and up to three adversary cells.
fn arb_snapshot() -> impl Strategy<Value = (Grid, Cell, Vec<Cell>)> {
    (2usize..12, 2usize..12, 0.0f64..0.45, any::<u64>(), 0usize..4).prop_map(
        |(rows, cols, density, seed, n)| {
            let mut grid = random_maze(rows, cols, density, seed);
            let agent = Cell::new((seed % rows as u64) as i32, 0);
            grid.set_wall(agent, false);
            let adversaries = random_free_cells(&grid, n + 1, seed ^ 0x5eed)
                .into_iter()
                .filter(|&c| c != agent)
                .take(n)
                .collect();
            (grid, agent, adversaries)
        },
    )
}

fn arb_metric() -> impl Strategy<Value = MetricKind> {
    prop_oneof![
        Just(MetricKind::ProbabilityClass),
        Just(MetricKind::MinTimeToCapture)
    ]
}

fn worst_outside_open<M: Metric>(
    grid: &Grid,
    agent: Cell,
    adversaries: &[Cell],
    h: u32,
    metric: &M,
) -> Result<(), TestCaseError> {
    let eval = evaluate(grid, agent, adversaries, h, h, metric).unwrap();
    for t in 0..=h {
        for cell in grid.extent().cells() {
            if !eval.visibility.is_open(cell) || eval.occupancy.contains(t, cell) {
                prop_assert_eq!(
                    eval.field.value(t, cell),
                    Some(metric.worst_value(t)),
                    "t={} cell={}",
                    t,
                    cell
                );
            }
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn horizon_zero_returns_legal(
        (grid, agent, adversaries) in arb_snapshot(),
        metric in arb_metric(),
        legal in proptest::sample::subsequence(Action::ALL.to_vec(), 0..=5),
    ) {
        let shield = LocalShield::builder().horizon(0).metric(metric).build().unwrap();
        let d = shield.decide(&grid, agent, &adversaries, &legal).unwrap();
        prop_assert_eq!(d.safe_actions, legal.clone());

        let eval = evaluate(&grid, agent, &adversaries, 0, 0, &MinTimeToCapture).unwrap();
        prop_assert_eq!(admissible(agent, &legal, &eval.field, &MinTimeToCapture), legal);
    }

    #[test]
    fn safe_actions_are_an_ordered_subset_of_legal(
        (grid, agent, adversaries) in arb_snapshot(),
        metric in arb_metric(),
        h in 0u32..8,
    ) {
        let shield = LocalShield::builder().horizon(h).metric(metric).build().unwrap();
        let legal = grid.legal_actions(agent);
        let d = shield.decide(&grid, agent, &adversaries, &legal).unwrap();
        let mut rest = legal.iter();
        for a in &d.safe_actions {
            prop_assert!(rest.any(|b| b == a), "{:?} not in order within {:?}", a, legal);
        }
    }

    #[test]
    fn occupancy_layers_never_shrink(
        (grid, agent, adversaries) in arb_snapshot(),
        h in 0u32..10,
    ) {
        let map = VisibilityMap::scan(&grid, agent, &adversaries, h).unwrap();
        let occ = build_occupancy(&map, &adversaries, h);
        prop_assert_eq!(occ.horizon(), h);
        prop_assert!(occ.is_monotone());
        for layer in occ.iter() {
            for cell in layer.cells() {
                prop_assert!(map.is_open(cell));
            }
        }
    }

    #[test]
    fn non_open_and_occupied_cells_hold_worst_value(
        (grid, agent, adversaries) in arb_snapshot(),
        h in 0u32..7,
    ) {
        worst_outside_open(&grid, agent, &adversaries, h, &ProbabilityClass::default())?;
        worst_outside_open(&grid, agent, &adversaries, h, &MinTimeToCapture)?;
    }

    #[test]
    fn unknown_cells_are_never_safe_targets(
        (grid, agent, adversaries) in arb_snapshot(),
        h in 1u32..7,
    ) {
        let metric = ProbabilityClass::default();
        let eval = evaluate(&grid, agent, &adversaries, h, h, &metric).unwrap();
        let s1 = eval.field.layer(1).unwrap();
        for cell in grid.extent().cells() {
            if !eval.visibility.is_known(cell) {
                prop_assert!(!metric.is_safe(s1.get(cell).unwrap(), h));
            }
        }
    }

    #[test]
    fn no_adversaries_keeps_legal(
        (grid, agent, _adversaries) in arb_snapshot(),
        metric in arb_metric(),
        h in 0u32..8,
    ) {
        let shield = LocalShield::builder().horizon(h).metric(metric).build().unwrap();
        let legal = grid.legal_actions(agent);
        let d = shield.decide(&grid, agent, &[], &legal).unwrap();
        prop_assert_eq!(d.safe_actions, legal);
    }

    #[test]
    fn suffix_propagation_matches_shorter_run(
        (grid, agent, adversaries) in arb_snapshot(),
        h in 1u32..7,
    ) {
        let map = VisibilityMap::scan(&grid, agent, &adversaries, h).unwrap();
        let occ = build_occupancy(&map, &adversaries, h);
        let metric = ProbabilityClass::default();
        let full = propagate(&map, &occ, &metric);
        let tail = propagate(&map, &occ.suffix(1).unwrap(), &metric);
        for t in 0..h {
            prop_assert_eq!(tail.layer(t), full.layer(t + 1));
        }
    }
}
