//! Property tests for the bounded visibility scan.

use picket_core::Cell;
use picket_space::{Grid, Visibility, VisibilityMap};
use proptest::prelude::*;

fn arb_grid() -> impl Strategy<Value = (Grid, Cell)> {
    (1usize..9, 1usize..9).prop_flat_map(|(rows, cols)| {
        (
            proptest::collection::vec(proptest::bool::weighted(0.3), rows * cols),
            0..rows as i32,
            0..cols as i32,
        )
            .prop_map(move |(walls, r, c)| {
                let mut grid = Grid::from_walls(rows, cols, walls).unwrap();
                let agent = Cell::new(r, c);
                grid.set_wall(agent, false);
                (grid, agent)
            })
    })
}

/// Reference distances by Bellman-Ford style relaxation over free cells.
fn relaxed_distances(grid: &Grid, agent: Cell) -> Vec<Option<u32>> {
    let extent = grid.extent();
    let mut dist = vec![None; extent.cell_count()];
    dist[extent.index(agent).unwrap()] = Some(0u32);
    loop {
        let mut changed = false;
        for cell in extent.cells() {
            if !grid.is_free(cell) {
                continue;
            }
            let i = extent.index(cell).unwrap();
            for nb in extent.neighbours(cell) {
                let Some(d) = dist[extent.index(nb).unwrap()] else {
                    continue;
                };
                if dist[i].is_none_or(|cur| d + 1 < cur) {
                    dist[i] = Some(d + 1);
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}

proptest! {
    #[test]
    fn scan_is_deterministic((grid, agent) in arb_grid(), h in 0u32..6) {
        let a = VisibilityMap::scan(&grid, agent, &[], h).unwrap();
        let b = VisibilityMap::scan(&grid, agent, &[], h).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn known_iff_path_distance_within_horizon((grid, agent) in arb_grid(), h in 0u32..6) {
        let map = VisibilityMap::scan(&grid, agent, &[], h).unwrap();
        let reference = relaxed_distances(&grid, agent);
        let extent = grid.extent();
        for cell in extent.cells() {
            let kind = map.get(cell).unwrap();
            if grid.is_wall(cell) {
                prop_assert_eq!(kind, Visibility::Wall);
                continue;
            }
            let within = reference[extent.index(cell).unwrap()].is_some_and(|d| d <= h);
            prop_assert_eq!(kind != Visibility::Unknown, within, "cell {}", cell);
            if within {
                prop_assert_eq!(map.distance(cell), reference[extent.index(cell).unwrap()]);
            }
        }
    }

    #[test]
    fn larger_horizon_never_hides_cells((grid, agent) in arb_grid(), h in 0u32..5) {
        let near = VisibilityMap::scan(&grid, agent, &[], h).unwrap();
        let far = VisibilityMap::scan(&grid, agent, &[], h + 1).unwrap();
        for cell in grid.extent().cells() {
            if near.is_known(cell) {
                prop_assert!(far.is_known(cell));
            }
        }
    }
}
