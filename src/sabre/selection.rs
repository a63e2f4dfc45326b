// Copyright 2026 the qmap-router authors
//
// Licensed under the Apache License, Version 2.0. You may obtain a copy
// of this license in the LICENSE.txt file in the root directory of this
// source tree or at http://www.apache.org/licenses/LICENSE-2.0.

use crate::layout::Layout;
use crate::qubit::PhysicalQubit;
use crate::sabre::candidates::candidate_swaps;
use crate::sabre::cost::combined_cost;
use crate::sabre::front_layer::FrontGate;
use crate::topology::Topology;

/// Return the candidate SWAP that minimises `combined_cost`, breaking ties
/// by `(min(p1, p2), max(p1, p2))` lexicographic order for determinism.
///
/// Unlike the randomized tie-break of the SABRE heuristic this crate is
/// modelled on, determinism is a binding testable property here (same
/// input + topology must produce the same output across runs), so ties are
/// resolved by enumeration order rather than a seeded RNG.
pub fn select_best_swap(
    front: &[FrontGate<'_>],
    layout: &Layout,
    topology: &dyn Topology,
    fidelity_weight: f64,
) -> Option<(PhysicalQubit, PhysicalQubit)> {
    let candidates = candidate_swaps(front, layout, topology);
    candidates
        .into_iter()
        .map(|(p1, p2)| {
            let mut trial = layout.clone();
            trial.apply_swap(p1, p2);
            let cost = combined_cost(&trial, front, p1, p2, topology, fidelity_weight);
            (cost, p1, p2)
        })
        .min_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| (a.1, a.2).cmp(&(b.1, b.2)))
        })
        .map(|(_, p1, p2)| (p1, p2))
}
