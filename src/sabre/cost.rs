// Copyright 2026 the qmap-router authors
//
// Licensed under the Apache License, Version 2.0. You may obtain a copy
// of this license in the LICENSE.txt file in the root directory of this
// source tree or at http://www.apache.org/licenses/LICENSE-2.0.

use crate::layout::Layout;
use crate::qubit::PhysicalQubit;
use crate::sabre::front_layer::FrontGate;
use crate::topology::Topology;

/// A 10% fidelity loss is treated as roughly equivalent to one extra unit
/// of routing distance. This is the default weight; [`crate::router::RouterConfig`]
/// may override it.
pub const FIDELITY_WEIGHT: f64 = 10.0;

/// `distance_cost(L, F) = sum over gates g in F of shortest_path_length(L.of(g.ctl), L.of(g.tgt))`.
///
/// A gate already on adjacent physical qubits contributes 1. A
/// disconnected pair contributes 0, matching a forgiving cost that treats
/// "no path" as "no information" rather than penalising it.
pub fn distance_cost(layout: &Layout, front: &[FrontGate<'_>], topology: &dyn Topology) -> f64 {
    front
        .iter()
        .map(|g| {
            let p1 = layout.of(g.ctl);
            let p2 = layout.of(g.tgt);
            topology.shortest_path_length(p1, p2).unwrap_or(0) as f64
        })
        .sum()
}

/// `fidelity_penalty(p1, p2) = (1 - fidelity(p1, p2)) * weight`.
pub fn fidelity_penalty(
    p1: PhysicalQubit,
    p2: PhysicalQubit,
    topology: &dyn Topology,
    weight: f64,
) -> f64 {
    (1.0 - topology.fidelity(p1, p2)) * weight
}

/// `combined_cost(L', F, p1, p2) = distance_cost(L', F) + fidelity_penalty(p1, p2)`.
pub fn combined_cost(
    layout: &Layout,
    front: &[FrontGate<'_>],
    p1: PhysicalQubit,
    p2: PhysicalQubit,
    topology: &dyn Topology,
    weight: f64,
) -> f64 {
    distance_cost(layout, front, topology) + fidelity_penalty(p1, p2, topology, weight)
}
