//! Backward induction of per-cell safety values.
//!
//! Layers are computed from `S_h` down to `S_0`. Each interior layer is the
//! metric's `combine` over the five actions of the next layer's values,
//! with blocked transitions falling back to the value of staying put.

use crate::metric::Metric;
use crate::occupancy::OccupancySequence;
use picket_core::{Action, Cell};
use picket_space::{Extent, VisibilityMap};

/// Safety values for every cell at one relative time step.
#[derive(Clone, Debug, PartialEq)]
pub struct SafetyLayer<V> {
    extent: Extent,
    values: Vec<V>,
}

impl<V: Copy> SafetyLayer<V> {
    /// Value at `cell`, or `None` if out of bounds.
    pub fn get(&self, cell: Cell) -> Option<V> {
        self.extent.index(cell).map(|i| self.values[i])
    }
}

/// The layers `S_0 ..= S_h` produced by [`propagate`].
#[derive(Clone, Debug, PartialEq)]
pub struct SafetyValueField<V> {
    layers: Vec<SafetyLayer<V>>,
}

impl<V: Copy> SafetyValueField<V> {
    /// The horizon `h`; the field holds `h + 1` layers.
    pub fn horizon(&self) -> u32 {
        (self.layers.len() - 1) as u32
    }

    /// Layer `S_t`, or `None` if `t > h`.
    pub fn layer(&self, t: u32) -> Option<&SafetyLayer<V>> {
        self.layers.get(t as usize)
    }

    /// `S_t(cell)`, or `None` if `t > h` or `cell` is out of bounds.
    pub fn value(&self, t: u32, cell: Cell) -> Option<V> {
        self.layer(t).and_then(|l| l.get(cell))
    }
}

/// Compute `S_0 ..= S_h` over `map` for the adversary layers `occupancy`.
///
/// The horizon is the occupancy sequence's own horizon. Cells that are not
/// open (walls and Unknown cells) and cells in `G_t` hold `worst(t)`. Every
/// other cell takes `combine` over all five actions of `S_{t+1}` at the
/// target; an out-of-bounds, wall, or Unknown target contributes
/// `S_{t+1}(c)` instead.
pub fn propagate<M: Metric>(
    map: &VisibilityMap,
    occupancy: &OccupancySequence,
    metric: &M,
) -> SafetyValueField<M::Value> {
    let extent = map.extent();
    let horizon = occupancy.horizon();

    let base = extent
        .cells()
        .map(|cell| {
            if map.is_open(cell) && !occupancy.contains(horizon, cell) {
                metric.best_value(horizon)
            } else {
                metric.worst_value(horizon)
            }
        })
        .collect();
    let mut reversed = vec![SafetyLayer {
        extent,
        values: base,
    }];

    for t in (0..horizon).rev() {
        let next = &reversed[reversed.len() - 1];
        let values = extent
            .cells()
            .enumerate()
            .map(|(i, cell)| {
                if !map.is_open(cell) || occupancy.contains(t, cell) {
                    return metric.worst_value(t);
                }
                let stay = next.values[i];
                Action::ALL
                    .into_iter()
                    .map(|a| {
                        map.open_step(cell, a)
                            .and_then(|to| next.get(to))
                            .unwrap_or(stay)
                    })
                    .fold(stay, |acc, v| metric.combine(acc, v))
            })
            .collect();
        reversed.push(SafetyLayer { extent, values });
    }

    reversed.reverse();
    SafetyValueField { layers: reversed }
}
