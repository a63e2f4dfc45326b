// Copyright 2026 the qmap-router authors
//
// Licensed under the Apache License, Version 2.0. You may obtain a copy
// of this license in the LICENSE.txt file in the root directory of this
// source tree or at http://www.apache.org/licenses/LICENSE-2.0.

use std::cell::RefCell;

use hashbrown::{HashMap, HashSet};
use rustworkx_core::petgraph::prelude::*;
use rustworkx_core::shortest_path::dijkstra;

use crate::qubit::PhysicalQubit;

/// Fidelity assumed for an edge that exists in the coupling graph but has
/// no explicit measurement: absence of data should not suppress a link.
pub const DEFAULT_EDGE_FIDELITY: f64 = 0.99;

/// Adjacency, shortest-path and fidelity queries against a target device.
///
/// Every method is total: querying an unknown physical qubit returns the
/// "no connection" answer (`false` / empty / `None` / `0.0`) rather than
/// signalling an error. The router relies on this.
pub trait Topology {
    fn adjacent(&self, a: PhysicalQubit, b: PhysicalQubit) -> bool;
    fn neighbours(&self, a: PhysicalQubit) -> Vec<PhysicalQubit>;
    fn shortest_path_length(&self, a: PhysicalQubit, b: PhysicalQubit) -> Option<u32>;
    fn fidelity(&self, a: PhysicalQubit, b: PhysicalQubit) -> f64;
    fn physical_qubits(&self) -> Vec<PhysicalQubit>;

    /// The graph diameter: the largest finite shortest-path length between
    /// any two qubits, or 0 for an empty or single-node graph. Used by the
    /// router as part of its per-gate SWAP-insertion safety bound.
    fn diameter(&self) -> u32 {
        let qubits = self.physical_qubits();
        let mut max = 0u32;
        for (i, &a) in qubits.iter().enumerate() {
            for &b in &qubits[i + 1..] {
                if let Some(d) = self.shortest_path_length(a, b) {
                    max = max.max(d);
                }
            }
        }
        max
    }
}

/// A simple, undirected coupling graph over integer physical-qubit ids,
/// with a symmetric per-edge fidelity table.
///
/// Shortest paths are computed lazily on a per-unordered-pair basis and
/// memoised in a [`RefCell`]-guarded cache: an eager all-pairs BFS is
/// unnecessary at the device sizes this crate targets (a few hundred
/// qubits), and recomputing on demand keeps a `CouplingMap` trivially
/// shareable across independently-invoked routing passes.
pub struct CouplingMap {
    graph: UnGraph<(), ()>,
    index_of: HashMap<PhysicalQubit, NodeIndex>,
    qubit_of: HashMap<NodeIndex, PhysicalQubit>,
    fidelities: HashMap<(PhysicalQubit, PhysicalQubit), f64>,
    distance_cache: RefCell<HashMap<(PhysicalQubit, PhysicalQubit), Option<u32>>>,
}

fn canonical(a: PhysicalQubit, b: PhysicalQubit) -> (PhysicalQubit, PhysicalQubit) {
    if a.0 <= b.0 {
        (a, b)
    } else {
        (b, a)
    }
}

impl CouplingMap {
    pub fn new() -> Self {
        CouplingMap {
            graph: UnGraph::new_undirected(),
            index_of: HashMap::new(),
            qubit_of: HashMap::new(),
            fidelities: HashMap::new(),
            distance_cache: RefCell::new(HashMap::new()),
        }
    }

    /// Construct from an explicit list of physical qubits and undirected
    /// edges, with every edge defaulting to [`DEFAULT_EDGE_FIDELITY`].
    pub fn from_edges(qubits: impl IntoIterator<Item = PhysicalQubit>, edges: &[(u32, u32)]) -> Self {
        let mut map = CouplingMap::new();
        for q in qubits {
            map.add_qubit(q);
        }
        for &(a, b) in edges {
            map.add_edge(PhysicalQubit(a), PhysicalQubit(b));
        }
        map
    }

    fn node(&mut self, q: PhysicalQubit) -> NodeIndex {
        if let Some(&idx) = self.index_of.get(&q) {
            idx
        } else {
            let idx = self.graph.add_node(());
            self.index_of.insert(q, idx);
            self.qubit_of.insert(idx, q);
            idx
        }
    }

    pub fn add_qubit(&mut self, q: PhysicalQubit) {
        self.node(q);
    }

    /// Add an undirected edge with the default fidelity.
    pub fn add_edge(&mut self, a: PhysicalQubit, b: PhysicalQubit) {
        self.add_edge_with_fidelity(a, b, DEFAULT_EDGE_FIDELITY);
    }

    /// Add an undirected edge with an explicit fidelity in `[0, 1]`.
    pub fn add_edge_with_fidelity(&mut self, a: PhysicalQubit, b: PhysicalQubit, fidelity: f64) {
        let ia = self.node(a);
        let ib = self.node(b);
        if !self.graph.contains_edge(ia, ib) {
            self.graph.add_edge(ia, ib, ());
        }
        let key = canonical(a, b);
        self.fidelities.insert(key, fidelity);
        self.distance_cache.borrow_mut().clear();
    }

    // --- built-in device fixtures ---

    /// A linear chain `P0 - P1 - ... - P(n-1)`, uniform fidelity 1.0.
    pub fn linear(n: u32) -> Self {
        let mut map = CouplingMap::new();
        for i in 0..n {
            map.add_qubit(PhysicalQubit(i));
        }
        for i in 0..n.saturating_sub(1) {
            map.add_edge_with_fidelity(PhysicalQubit(i), PhysicalQubit(i + 1), 1.0);
        }
        map
    }

    /// A 2x2 grid: `P0-P1`, `P0-P2`, `P1-P3`, `P2-P3`, uniform fidelity 1.0.
    pub fn grid2x2() -> Self {
        let mut map = CouplingMap::new();
        for i in 0..4 {
            map.add_qubit(PhysicalQubit(i));
        }
        for &(a, b) in &[(0, 1), (0, 2), (1, 3), (2, 3)] {
            map.add_edge_with_fidelity(PhysicalQubit(a), PhysicalQubit(b), 1.0);
        }
        map
    }

    /// A 14-qubit simplified heavy-hex patch, with two deliberately
    /// degraded-fidelity edges, for exercising fidelity-aware routing.
    pub fn heavy_hex_patch() -> Self {
        let mut map = CouplingMap::new();
        for i in 0..14 {
            map.add_qubit(PhysicalQubit(i));
        }
        let connections: &[(u32, u32)] = &[
            (0, 1),
            (1, 2),
            (0, 4),
            (2, 6),
            (3, 4),
            (4, 5),
            (5, 6),
            (6, 7),
            (4, 8),
            (6, 10),
            (8, 9),
            (9, 10),
            (9, 11),
            (11, 12),
            (12, 13),
        ];
        for &(a, b) in connections {
            map.add_edge_with_fidelity(PhysicalQubit(a), PhysicalQubit(b), DEFAULT_EDGE_FIDELITY);
        }
        map.add_edge_with_fidelity(PhysicalQubit(4), PhysicalQubit(5), 0.92);
        map.add_edge_with_fidelity(PhysicalQubit(9), PhysicalQubit(11), 0.95);
        map
    }
}

impl Default for CouplingMap {
    fn default() -> Self {
        CouplingMap::new()
    }
}

impl Topology for CouplingMap {
    fn adjacent(&self, a: PhysicalQubit, b: PhysicalQubit) -> bool {
        if a == b {
            return false;
        }
        match (self.index_of.get(&a), self.index_of.get(&b)) {
            (Some(&ia), Some(&ib)) => self.graph.contains_edge(ia, ib),
            _ => false,
        }
    }

    fn neighbours(&self, a: PhysicalQubit) -> Vec<PhysicalQubit> {
        let Some(&ia) = self.index_of.get(&a) else {
            return Vec::new();
        };
        self.graph
            .neighbors(ia)
            .map(|idx| self.qubit_of[&idx])
            .collect()
    }

    fn shortest_path_length(&self, a: PhysicalQubit, b: PhysicalQubit) -> Option<u32> {
        if a == b {
            return Some(0);
        }
        let key = canonical(a, b);
        if let Some(cached) = self.distance_cache.borrow().get(&key) {
            return *cached;
        }
        let result = match (self.index_of.get(&a), self.index_of.get(&b)) {
            (Some(&ia), Some(&ib)) => {
                let distances: Vec<Option<u32>> =
                    dijkstra(&self.graph, ia, Some(ib), |_| Ok::<u32, std::convert::Infallible>(1u32), None)
                        .unwrap();
                distances.get(ib.index()).copied().flatten()
            }
            _ => None,
        };
        self.distance_cache.borrow_mut().insert(key, result);
        result
    }

    fn fidelity(&self, a: PhysicalQubit, b: PhysicalQubit) -> f64 {
        if !self.adjacent(a, b) {
            return 0.0;
        }
        self.fidelities
            .get(&canonical(a, b))
            .copied()
            .unwrap_or(DEFAULT_EDGE_FIDELITY)
    }

    fn physical_qubits(&self) -> Vec<PhysicalQubit> {
        let mut qubits: Vec<PhysicalQubit> = self.index_of.keys().copied().collect();
        qubits.sort();
        qubits
    }
}

/// Neither symmetric nor reflexive for unknown qubits, but `fidelity` must
/// agree on both orderings of a known edge: this is verified directly by
/// `fidelity_is_symmetric` below, since `CouplingMap` stores a single
/// canonical entry per edge rather than two independent directed ones.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_three_adjacency() {
        let topo = CouplingMap::linear(3);
        assert!(topo.adjacent(PhysicalQubit(0), PhysicalQubit(1)));
        assert!(!topo.adjacent(PhysicalQubit(0), PhysicalQubit(2)));
        assert!(!topo.adjacent(PhysicalQubit(0), PhysicalQubit(0)));
    }

    #[test]
    fn shortest_path_length_matches_bfs_distance() {
        let topo = CouplingMap::linear(3);
        assert_eq!(
            topo.shortest_path_length(PhysicalQubit(0), PhysicalQubit(2)),
            Some(2)
        );
        assert_eq!(
            topo.shortest_path_length(PhysicalQubit(1), PhysicalQubit(1)),
            Some(0)
        );
    }

    #[test]
    fn disconnected_pair_has_no_path() {
        let mut topo = CouplingMap::new();
        topo.add_qubit(PhysicalQubit(0));
        topo.add_qubit(PhysicalQubit(1));
        assert_eq!(
            topo.shortest_path_length(PhysicalQubit(0), PhysicalQubit(1)),
            None
        );
    }

    #[test]
    fn unknown_qubit_queries_are_total() {
        let topo = CouplingMap::linear(2);
        let ghost = PhysicalQubit(99);
        assert!(!topo.adjacent(PhysicalQubit(0), ghost));
        assert!(topo.neighbours(ghost).is_empty());
        assert_eq!(topo.shortest_path_length(PhysicalQubit(0), ghost), None);
        assert_eq!(topo.fidelity(PhysicalQubit(0), ghost), 0.0);
    }

    #[test]
    fn non_edge_fidelity_is_zero_and_edge_defaults_high() {
        let mut topo = CouplingMap::new();
        topo.add_qubit(PhysicalQubit(0));
        topo.add_qubit(PhysicalQubit(1));
        topo.add_qubit(PhysicalQubit(2));
        topo.add_edge(PhysicalQubit(0), PhysicalQubit(1));
        assert_eq!(topo.fidelity(PhysicalQubit(0), PhysicalQubit(2)), 0.0);
        assert_eq!(
            topo.fidelity(PhysicalQubit(0), PhysicalQubit(1)),
            DEFAULT_EDGE_FIDELITY
        );
    }

    #[test]
    fn fidelity_is_symmetric() {
        let mut topo = CouplingMap::new();
        topo.add_qubit(PhysicalQubit(0));
        topo.add_qubit(PhysicalQubit(1));
        topo.add_edge_with_fidelity(PhysicalQubit(0), PhysicalQubit(1), 0.9);
        assert_eq!(
            topo.fidelity(PhysicalQubit(0), PhysicalQubit(1)),
            topo.fidelity(PhysicalQubit(1), PhysicalQubit(0))
        );
    }

    #[test]
    fn heavy_hex_patch_has_degraded_edges() {
        let topo = CouplingMap::heavy_hex_patch();
        assert_eq!(topo.fidelity(PhysicalQubit(4), PhysicalQubit(5)), 0.92);
        assert_eq!(topo.fidelity(PhysicalQubit(9), PhysicalQubit(11)), 0.95);
        assert_eq!(topo.fidelity(PhysicalQubit(0), PhysicalQubit(1)), DEFAULT_EDGE_FIDELITY);
    }

    #[test]
    fn diameter_of_linear_three_is_two() {
        let topo = CouplingMap::linear(3);
        assert_eq!(topo.diameter(), 2);
    }
}
