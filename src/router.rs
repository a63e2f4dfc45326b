// Copyright 2026 the qmap-router authors
//
// Licensed under the Apache License, Version 2.0. You may obtain a copy
// of this license in the LICENSE.txt file in the root directory of this
// source tree or at http://www.apache.org/licenses/LICENSE-2.0.

use crate::error::{Result, RouterError};
use crate::ir::Ir;
use crate::layout::Layout;
use crate::operation::Operation;
use crate::qubit::LogicalQubit;
use crate::sabre::cost::FIDELITY_WEIGHT;
use crate::sabre::{front_layer, select_best_swap};
use crate::topology::Topology;

/// Tunables for a routing pass, defaulting to fixed constants but
/// overridable by a caller (or the `qmap-route` CLI) without recompiling,
/// the way transpiler passes take explicit numeric parameters (e.g.
/// extended-set weight, decay rate) rather than reading global state.
#[derive(Clone, Debug)]
pub struct RouterConfig {
    /// Weight applied to `1 - fidelity` in the combined cost function.
    pub fidelity_weight: f64,
    /// Overrides the `diameter(topology) * |F|` safety ceiling on SWAPs
    /// inserted per gate. `None` uses the default ceiling.
    pub safety_bound_multiplier: Option<u32>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        RouterConfig {
            fidelity_weight: FIDELITY_WEIGHT,
            safety_bound_multiplier: None,
        }
    }
}

/// A non-fatal diagnostic raised while routing a specific gate. The gate
/// itself is still emitted, un-routed, into the output IR.
#[derive(Clone, Debug, PartialEq)]
pub struct RouterWarning {
    pub ctl: LogicalQubit,
    pub tgt: LogicalQubit,
    pub error: RouterError,
}

/// The result of a successful routing pass: the routed IR plus any
/// non-fatal diagnostics collected along the way.
#[derive(Clone, Debug, Default)]
pub struct RoutedIr {
    pub ir: Ir,
    pub warnings: Vec<RouterWarning>,
}

/// The SABRE-inspired look-ahead router. Single-threaded and synchronous:
/// one `route` call owns its `Layout` and traversal state for the
/// duration of the pass and produces one output IR from one input IR.
pub struct Router {
    config: RouterConfig,
}

impl Router {
    pub fn new(config: RouterConfig) -> Self {
        Router { config }
    }

    /// Route `ir` against `topology`, inserting SWAPs so every two-qubit
    /// gate lands on an adjacent physical pair.
    ///
    /// Fails only on `RouterError::MalformedInput` (§7): an input IR that
    /// violates well-formedness is rejected wholesale, with no output IR
    /// emitted. All other errors are recovered per-gate and surfaced as
    /// warnings in the returned [`RoutedIr`].
    pub fn route(&self, ir: &Ir, topology: &dyn Topology) -> Result<RoutedIr> {
        self.route_cancellable(ir, topology, None)
    }

    /// As [`Router::route`], but checks `cancel` once per outer-loop
    /// iteration and returns `RouterError::Cancelled` without emitting a
    /// partial IR if it ever returns `true`.
    pub fn route_cancellable(
        &self,
        ir: &Ir,
        topology: &dyn Topology,
        cancel: Option<&dyn Fn() -> bool>,
    ) -> Result<RoutedIr> {
        let num_qubits = ir.validate()?;
        let mut layout = Layout::identity(num_qubits);
        let mut out = Ir::new();
        out.push(Operation::LayoutMark {
            snapshot: layout.snapshot(),
        });

        let input = ir.as_slice();
        let diameter = topology.diameter();
        let mut warnings = Vec::new();
        let mut i = 0;
        while i < input.len() {
            if let Some(cancel) = cancel {
                if cancel() {
                    return Err(RouterError::Cancelled);
                }
            }
            match &input[i] {
                Operation::SingleGate { .. } => {
                    out.push(input[i].clone());
                    i += 1;
                }
                Operation::TryTwoQubit { name, ctl, tgt } => {
                    self.route_two_qubit_gate(
                        name, *ctl, *tgt, &mut layout, topology, diameter, &input[i..], &mut out,
                        &mut warnings,
                    );
                    i += 1;
                }
                other => {
                    out.push(other.clone());
                    i += 1;
                }
            }
        }
        Ok(RoutedIr { ir: out, warnings })
    }

    #[allow(clippy::too_many_arguments)]
    fn route_two_qubit_gate(
        &self,
        name: &str,
        ctl: LogicalQubit,
        tgt: LogicalQubit,
        layout: &mut Layout,
        topology: &dyn Topology,
        diameter: u32,
        remaining: &[Operation],
        out: &mut Ir,
        warnings: &mut Vec<RouterWarning>,
    ) {
        let mut p1 = layout.of(ctl);
        let mut p2 = layout.of(tgt);
        let mut swaps_for_this_gate: u32 = 0;

        while !topology.adjacent(p1, p2) {
            let front = front_layer(remaining);
            let safety_bound = self
                .config
                .safety_bound_multiplier
                .unwrap_or(diameter)
                .saturating_mul(front.len() as u32)
                .max(1);

            if swaps_for_this_gate >= safety_bound {
                tracing::warn!(
                    ?ctl,
                    ?tgt,
                    swaps_for_this_gate,
                    "safety bound exceeded routing two-qubit gate"
                );
                warnings.push(RouterWarning {
                    ctl,
                    tgt,
                    error: RouterError::SafetyBoundExceeded(ctl, tgt, swaps_for_this_gate),
                });
                break;
            }

            let Some((sp1, sp2)) =
                select_best_swap(&front, layout, topology, self.config.fidelity_weight)
            else {
                tracing::warn!(?ctl, ?tgt, "no candidate swap found");
                warnings.push(RouterWarning {
                    ctl,
                    tgt,
                    error: RouterError::NoCandidateSwap(ctl, tgt),
                });
                break;
            };

            let cost = 1.0 - topology.fidelity(sp1, sp2);
            out.push(Operation::InsertSwap {
                p1: sp1,
                p2: sp2,
                cost,
            });
            layout.apply_swap(sp1, sp2);
            swaps_for_this_gate += 1;
            tracing::debug!(?sp1, ?sp2, swaps_for_this_gate, "inserted swap");

            p1 = layout.of(ctl);
            p2 = layout.of(tgt);
        }

        if swaps_for_this_gate > 0 {
            out.push(Operation::LayoutMark {
                snapshot: layout.snapshot(),
            });
        }

        out.push(Operation::TryTwoQubit {
            name: name.to_string(),
            ctl,
            tgt,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qubit::PhysicalQubit;
    use crate::topology::CouplingMap;

    fn two(name: &str, ctl: u32, tgt: u32) -> Operation {
        Operation::TryTwoQubit {
            name: name.to_string(),
            ctl: LogicalQubit(ctl),
            tgt: LogicalQubit(tgt),
        }
    }

    fn single(name: &str, q: u32) -> Operation {
        Operation::SingleGate {
            name: name.to_string(),
            q: LogicalQubit(q),
        }
    }

    fn count_swaps(ir: &Ir) -> usize {
        ir.iter()
            .filter(|op| matches!(op, Operation::InsertSwap { .. }))
            .count()
    }

    #[test]
    fn s1_linear_three_already_routed_emits_no_swaps() {
        let topo = CouplingMap::linear(3);
        let ir: Ir = vec![two("CNOT", 0, 1), two("CNOT", 1, 2)]
            .into_iter()
            .collect();
        let router = Router::new(RouterConfig::default());
        let routed = router.route(&ir, &topo).unwrap();
        assert_eq!(count_swaps(&routed.ir), 0);
        assert!(routed.warnings.is_empty());
        let gates: Vec<&Operation> = routed
            .ir
            .iter()
            .filter(|op| !matches!(op, Operation::LayoutMark { .. }))
            .collect();
        assert_eq!(gates, vec![&two("CNOT", 0, 1), &two("CNOT", 1, 2)]);
    }

    #[test]
    fn s2_linear_three_requires_one_swap() {
        let topo = CouplingMap::linear(3);
        let ir: Ir = vec![two("CNOT", 0, 2)].into_iter().collect();
        let router = Router::new(RouterConfig::default());
        let routed = router.route(&ir, &topo).unwrap();
        assert_eq!(count_swaps(&routed.ir), 1);
    }

    #[test]
    fn s3_grid_diagonal_gate_one_swap_on_expected_edge() {
        let topo = CouplingMap::grid2x2();
        let ir: Ir = vec![two("CNOT", 0, 3)].into_iter().collect();
        let router = Router::new(RouterConfig::default());
        let routed = router.route(&ir, &topo).unwrap();
        assert_eq!(count_swaps(&routed.ir), 1);
        let swap = routed
            .ir
            .iter()
            .find_map(|op| match op {
                Operation::InsertSwap { p1, p2, .. } => Some((*p1, *p2)),
                _ => None,
            })
            .unwrap();
        assert!(
            swap == (PhysicalQubit(0), PhysicalQubit(1))
                || swap == (PhysicalQubit(0), PhysicalQubit(2))
        );
    }

    #[test]
    fn s6_single_qubit_passthrough() {
        let topo = CouplingMap::linear(3);
        let ir: Ir = vec![single("H", 0), single("X", 1), two("CNOT", 0, 1)]
            .into_iter()
            .collect();
        let router = Router::new(RouterConfig::default());
        let routed = router.route(&ir, &topo).unwrap();
        assert_eq!(count_swaps(&routed.ir), 0);
        let non_layout: Vec<&Operation> = routed
            .ir
            .iter()
            .filter(|op| !matches!(op, Operation::LayoutMark { .. }))
            .collect();
        assert_eq!(
            non_layout,
            vec![&single("H", 0), &single("X", 1), &two("CNOT", 0, 1)]
        );
    }

    #[test]
    fn malformed_input_is_rejected_before_emitting_anything() {
        let topo = CouplingMap::linear(2);
        let ir: Ir = vec![two("CNOT", 1, 1)].into_iter().collect();
        let router = Router::new(RouterConfig::default());
        assert!(matches!(
            router.route(&ir, &topo),
            Err(RouterError::MalformedInput(_))
        ));
    }

    #[test]
    fn unreachable_gate_is_emitted_unrouted_with_warning() {
        let mut topo = CouplingMap::new();
        topo.add_qubit(PhysicalQubit(0));
        topo.add_qubit(PhysicalQubit(1));
        let ir: Ir = vec![two("CNOT", 0, 1)].into_iter().collect();
        let router = Router::new(RouterConfig::default());
        let routed = router.route(&ir, &topo).unwrap();
        assert_eq!(count_swaps(&routed.ir), 0);
        assert_eq!(routed.warnings.len(), 1);
        assert!(routed
            .ir
            .iter()
            .any(|op| matches!(op, Operation::TryTwoQubit { .. })));
    }

    #[test]
    fn cancellation_returns_before_emitting_partial_ir() {
        let topo = CouplingMap::linear(3);
        let ir: Ir = vec![two("CNOT", 0, 2)].into_iter().collect();
        let router = Router::new(RouterConfig::default());
        let result = router.route_cancellable(&ir, &topo, Some(&|| true));
        assert!(matches!(result, Err(RouterError::Cancelled)));
    }

    #[test]
    fn determinism_same_input_same_output() {
        let topo = CouplingMap::heavy_hex_patch();
        let ir: Ir = vec![two("CNOT", 0, 3), two("CNOT", 1, 2), single("H", 5)]
            .into_iter()
            .collect();
        let router = Router::new(RouterConfig::default());
        let a = router.route(&ir, &topo).unwrap();
        let b = router.route(&ir, &topo).unwrap();
        assert_eq!(a.ir, b.ir);
    }
}
