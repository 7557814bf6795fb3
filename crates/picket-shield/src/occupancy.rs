//! Forward expansion of possible adversary positions.
//!
//! Adversaries move nondeterministically: at every step each one may stay or
//! move to any 4-adjacent open cell of the visibility map. The builder never
//! removes a cell once it is marked, so every layer contains the previous
//! one. Motion into Unknown cells is not modelled; an adversary that leaves
//! the visible region is no longer tracked.

use indexmap::IndexSet;
use picket_core::{Action, Cell};
use picket_space::VisibilityMap;

/// Cells possibly holding an adversary at one relative time step.
///
/// Iteration follows discovery order, which is deterministic for a given
/// map and seed list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OccupancyLayer {
    cells: IndexSet<Cell>,
}

impl OccupancyLayer {
    /// Number of possibly-occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is possibly occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `cell` is possibly occupied.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Possibly-occupied cells in discovery order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Possibly-occupied cells sorted row-major.
    pub fn sorted(&self) -> Vec<Cell> {
        let mut out: Vec<Cell> = self.cells().collect();
        out.sort_unstable();
        out
    }

    /// Whether every cell of `self` is also in `other`.
    pub fn is_subset(&self, other: &OccupancyLayer) -> bool {
        self.cells.is_subset(&other.cells)
    }
}

/// The layers `G_0 ..= G_h` of possible adversary positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancySequence {
    layers: Vec<OccupancyLayer>,
}

impl OccupancySequence {
    /// The horizon `h`; the sequence holds `h + 1` layers.
    pub fn horizon(&self) -> u32 {
        (self.layers.len() - 1) as u32
    }

    /// Layer `G_t`, or `None` if `t > h`.
    pub fn layer(&self, t: u32) -> Option<&OccupancyLayer> {
        self.layers.get(t as usize)
    }

    /// Whether `cell` is possibly occupied at step `t`. False for `t > h`.
    pub fn contains(&self, t: u32, cell: Cell) -> bool {
        self.layer(t).is_some_and(|l| l.contains(cell))
    }

    /// The layers `G_start ..= G_h` re-indexed from zero.
    ///
    /// Returns `None` if `start > h`.
    pub fn suffix(&self, start: u32) -> Option<OccupancySequence> {
        let layers = self.layers.get(start as usize..)?.to_vec();
        (!layers.is_empty()).then_some(OccupancySequence { layers })
    }

    /// Whether `G_t ⊆ G_{t+1}` for every `t < h`.
    pub fn is_monotone(&self) -> bool {
        self.layers.windows(2).all(|w| w[0].is_subset(&w[1]))
    }

    /// Iterate `G_0 ..= G_h`.
    pub fn iter(&self) -> impl Iterator<Item = &OccupancyLayer> {
        self.layers.iter()
    }
}

/// Expand `initial` adversary cells forward for `horizon` steps.
///
/// `G_0` is `initial` deduplicated, keeping only cells the map can hold an
/// observed adversary on (in bounds, Known, not a wall). Then
/// `G_{t+1} = G_t ∪ { open 4-neighbours of G_t }`.
pub fn build_occupancy(map: &VisibilityMap, initial: &[Cell], horizon: u32) -> OccupancySequence {
    let seed: IndexSet<Cell> = initial.iter().copied().filter(|&c| map.is_open(c)).collect();
    let mut layers = Vec::with_capacity(horizon as usize + 1);
    layers.push(OccupancyLayer { cells: seed });

    for t in 0..horizon as usize {
        let prev = &layers[t].cells;
        let mut next = prev.clone();
        for &cell in prev {
            for action in Action::MOVES {
                if let Some(to) = map.open_step(cell, action) {
                    next.insert(to);
                }
            }
        }
        log::trace!("occupancy G_{} has {} cells", t + 1, next.len());
        layers.push(OccupancyLayer { cells: next });
    }

    OccupancySequence { layers }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picket_space::{Grid, Layout};

    fn map_for(text: &str, h: u32) -> (VisibilityMap, Vec<Cell>) {
        let l = Layout::parse(text).unwrap();
        let map = VisibilityMap::scan(&l.grid, l.require_agent().unwrap(), &l.adversaries, h)
            .unwrap();
        (map, l.adversaries)
    }

    #[test]
    fn corner_adversary_one_step() {
        let grid = Grid::new(5, 5).unwrap();
        let map = VisibilityMap::scan(&grid, Cell::new(2, 2), &[Cell::new(0, 0)], 1).unwrap();
        // h = 1 only makes distance-1 cells Known, so the corner is Unknown.
        let occ = build_occupancy(&map, &[Cell::new(0, 0)], 1);
        assert!(occ.layer(0).unwrap().is_empty());

        let map = VisibilityMap::scan(&grid, Cell::new(2, 2), &[Cell::new(0, 0)], 4).unwrap();
        let occ = build_occupancy(&map, &[Cell::new(0, 0)], 1);
        assert_eq!(occ.layer(0).unwrap().sorted(), vec![Cell::new(0, 0)]);
        assert_eq!(
            occ.layer(1).unwrap().sorted(),
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0)]
        );
    }

    #[test]
    fn duplicates_are_merged() {
        let (map, _) = map_for("P..", 2);
        let occ = build_occupancy(&map, &[Cell::new(0, 2), Cell::new(0, 2)], 0);
        assert_eq!(occ.layer(0).unwrap().len(), 1);
    }

    #[test]
    fn walls_are_never_occupied() {
        let (map, advs) = map_for("P.%G.", 4);
        let occ = build_occupancy(&map, &advs, 4);
        // The adversary sits behind a wall: unreachable, so Unknown.
        assert!(occ.layer(0).unwrap().is_empty());

        let (map, advs) = map_for("P.G%.", 4);
        let occ = build_occupancy(&map, &advs, 4);
        for layer in occ.iter() {
            assert!(!layer.contains(Cell::new(0, 3)));
        }
    }

    #[test]
    fn expansion_stops_at_unknown_cells() {
        // h = 2: cells (0,0)..(0,2) Known, (0,3).. Unknown.
        let (map, advs) = map_for("PG...", 2);
        let occ = build_occupancy(&map, &advs, 2);
        assert_eq!(
            occ.layer(2).unwrap().sorted(),
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]
        );
    }

    #[test]
    fn layers_grow_monotonically() {
        let (map, advs) = map_for("G....\n.%%%.\n....P", 8);
        let occ = build_occupancy(&map, &advs, 8);
        assert_eq!(occ.horizon(), 8);
        assert!(occ.is_monotone());
    }

    #[test]
    fn suffix_reindexes_layers() {
        let (map, advs) = map_for("PG...", 4);
        let occ = build_occupancy(&map, &advs, 3);
        let tail = occ.suffix(1).unwrap();
        assert_eq!(tail.horizon(), 2);
        assert_eq!(tail.layer(0), occ.layer(1));
        assert!(occ.suffix(4).is_none());
    }

    #[test]
    fn contains_beyond_horizon_is_false() {
        let (map, advs) = map_for("PG", 1);
        let occ = build_occupancy(&map, &advs, 1);
        assert!(occ.contains(1, Cell::new(0, 1)));
        assert!(!occ.contains(2, Cell::new(0, 1)));
    }
}
