// Copyright 2026 the qmap-router authors
//
// Licensed under the Apache License, Version 2.0. You may obtain a copy
// of this license in the LICENSE.txt file in the root directory of this
// source tree or at http://www.apache.org/licenses/LICENSE-2.0.

use hashbrown::HashSet;

use crate::layout::Layout;
use crate::qubit::PhysicalQubit;
use crate::sabre::front_layer::FrontGate;
use crate::topology::Topology;

/// Enumerate the candidate SWAPs that could help route the given front
/// layer: every physical qubit holding a front-layer logical qubit, paired
/// with each of its topology neighbours, de-duplicated as unordered pairs.
pub fn candidate_swaps(
    front: &[FrontGate<'_>],
    layout: &Layout,
    topology: &dyn Topology,
) -> Vec<(PhysicalQubit, PhysicalQubit)> {
    let mut physical: Vec<PhysicalQubit> = front
        .iter()
        .flat_map(|g| [layout.of(g.ctl), layout.of(g.tgt)])
        .collect();
    physical.sort();
    physical.dedup();

    let mut seen: HashSet<(PhysicalQubit, PhysicalQubit)> = HashSet::new();
    let mut candidates = Vec::new();
    for &p in &physical {
        for n in topology.neighbours(p) {
            let pair = if p.0 <= n.0 { (p, n) } else { (n, p) };
            if seen.insert(pair) {
                candidates.push(pair);
            }
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qubit::LogicalQubit;
    use crate::topology::CouplingMap;

    #[test]
    fn enumerates_unique_unordered_pairs() {
        let topo = CouplingMap::linear(3);
        let layout = Layout::identity(3);
        let front = vec![FrontGate {
            name: "CNOT",
            ctl: LogicalQubit(0),
            tgt: LogicalQubit(2),
        }];
        let candidates = candidate_swaps(&front, &layout, &topo);
        let mut sorted = candidates.clone();
        sorted.sort();
        assert_eq!(
            sorted,
            vec![
                (PhysicalQubit(0), PhysicalQubit(1)),
                (PhysicalQubit(1), PhysicalQubit(2)),
            ]
        );
    }

    #[test]
    fn empty_front_yields_no_candidates() {
        let topo = CouplingMap::linear(3);
        let layout = Layout::identity(3);
        assert!(candidate_swaps(&[], &layout, &topo).is_empty());
    }
}
