//! One-step admissibility of the agent's legal actions.

use crate::backprop::SafetyValueField;
use crate::metric::Metric;
use picket_core::{Action, Cell};

/// Filter `legal` down to the actions whose one-step safety value passes
/// `metric`.
///
/// With horizon 0 shielding is disabled and `legal` is returned unchanged.
/// Otherwise an action is kept iff its target cell (the agent's own cell
/// for [`Action::Stop`]) is in bounds and `S_1(target)` is safe. The
/// result preserves the order of `legal` and may be empty; falling back to
/// the legal set is the caller's choice.
pub fn admissible<M: Metric>(
    agent: Cell,
    legal: &[Action],
    field: &SafetyValueField<M::Value>,
    metric: &M,
) -> Vec<Action> {
    let horizon = field.horizon();
    let Some(s1) = field.layer(1) else {
        return legal.to_vec();
    };
    legal
        .iter()
        .copied()
        .filter(|a| {
            a.apply(agent)
                .and_then(|to| s1.get(to))
                .is_some_and(|v| metric.is_safe(v, horizon))
        })
        .collect()
}
