// Copyright 2026 the qmap-router authors
//
// Licensed under the Apache License, Version 2.0. You may obtain a copy
// of this license in the LICENSE.txt file in the root directory of this
// source tree or at http://www.apache.org/licenses/LICENSE-2.0.

use hashbrown::HashMap;

use crate::qubit::{LogicalQubit, PhysicalQubit};

/// A total bijection from a contiguous `[0, N)` range of logical ids onto
/// `N` distinct physical ids (which need not themselves be contiguous, if
/// the device has more physical qubits than the circuit uses logical ones).
///
/// Both directions are kept side by side so that [`Layout::of`] and the
/// reverse lookup used by [`Layout::apply_swap`] are both O(1); the
/// original prototype this crate generalises scanned its forward map
/// linearly to find a logical qubit by physical id, which only works for
/// small devices.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    logic_to_phys: Vec<PhysicalQubit>,
    phys_to_logic: HashMap<PhysicalQubit, LogicalQubit>,
}

/// An immutable copy of a [`Layout`] at a point in the program, carried by
/// `Operation::LayoutMark`.
pub type LayoutSnapshot = Vec<(LogicalQubit, PhysicalQubit)>;

impl Layout {
    /// The identity layout `i -> i` for `i in [0, n)`.
    pub fn identity(n: usize) -> Self {
        let logic_to_phys: Vec<PhysicalQubit> = (0..n as u32).map(PhysicalQubit).collect();
        let phys_to_logic = logic_to_phys
            .iter()
            .enumerate()
            .map(|(l, &p)| (p, LogicalQubit(l as u32)))
            .collect();
        Layout {
            logic_to_phys,
            phys_to_logic,
        }
    }

    pub fn len(&self) -> usize {
        self.logic_to_phys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logic_to_phys.is_empty()
    }

    /// The physical qubit currently holding `logical`.
    pub fn of(&self, logical: LogicalQubit) -> PhysicalQubit {
        self.logic_to_phys[logical.index()]
    }

    /// The logical qubit currently held on `physical`, if the layout's
    /// support includes that physical qubit.
    pub fn logical_at(&self, physical: PhysicalQubit) -> Option<LogicalQubit> {
        self.phys_to_logic.get(&physical).copied()
    }

    /// Swap the logical qubits currently held on `p1` and `p2`.
    ///
    /// If only one side is occupied, the occupant moves to the other side
    /// and the originally-occupied slot is emptied. The router only ever
    /// calls this with two occupied slots, since candidates are enumerated
    /// from physical qubits already holding front-layer logical qubits.
    pub fn apply_swap(&mut self, p1: PhysicalQubit, p2: PhysicalQubit) {
        let l1 = self.phys_to_logic.remove(&p1);
        let l2 = self.phys_to_logic.remove(&p2);
        if let Some(l1) = l1 {
            self.logic_to_phys[l1.index()] = p2;
            self.phys_to_logic.insert(p2, l1);
        }
        if let Some(l2) = l2 {
            self.logic_to_phys[l2.index()] = p1;
            self.phys_to_logic.insert(p1, l2);
        }
    }

    /// An immutable snapshot suitable for embedding in a `LayoutMark`,
    /// ordered by logical qubit id.
    pub fn snapshot(&self) -> LayoutSnapshot {
        self.logic_to_phys
            .iter()
            .enumerate()
            .map(|(l, &p)| (LogicalQubit(l as u32), p))
            .collect()
    }
}
