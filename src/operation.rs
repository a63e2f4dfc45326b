// Copyright 2026 the qmap-router authors
//
// Licensed under the Apache License, Version 2.0. You may obtain a copy
// of this license in the LICENSE.txt file in the root directory of this
// source tree or at http://www.apache.org/licenses/LICENSE-2.0.

use std::fmt;

use crate::layout::LayoutSnapshot;
use crate::qubit::{LogicalQubit, PhysicalQubit};

/// A single node of the intermediate representation.
///
/// This is a closed tagged union rather than something dispatched by
/// runtime type inspection: exhaustive matching on this enum is what keeps
/// the router and every downstream consumer honest when a variant is added.
#[derive(Clone, Debug, PartialEq)]
pub enum Operation {
    /// A one-qubit gate. Never blocks or is collected by front-layer
    /// extraction; it is emitted verbatim wherever it occurs.
    SingleGate { name: String, q: LogicalQubit },

    /// A candidate two-qubit gate. The router checks whether its logical
    /// operands currently sit on adjacent physical qubits and, if not,
    /// inserts [`Operation::InsertSwap`]s until they do.
    TryTwoQubit {
        name: String,
        ctl: LogicalQubit,
        tgt: LogicalQubit,
    },

    /// A router-only construct: a SWAP along a coupling-graph edge,
    /// inserted to relocate logical qubits. `cost` records
    /// `1 - fidelity(p1, p2)` at the time of insertion, for diagnostics.
    InsertSwap {
        p1: PhysicalQubit,
        p2: PhysicalQubit,
        cost: f64,
    },

    /// A router-only construct: an immutable snapshot of the current
    /// layout, recorded at the start of the pass and refreshed every time
    /// at least one SWAP has been inserted since the previous mark.
    LayoutMark { snapshot: LayoutSnapshot },
}

impl Operation {
    /// Per §4.2 well-formedness rule 3: these two variants are router-only
    /// constructs and must not appear in an input IR.
    pub fn is_router_only(&self) -> bool {
        matches!(
            self,
            Operation::InsertSwap { .. } | Operation::LayoutMark { .. }
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::SingleGate { name, q } => write!(f, "{name} {q}"),
            Operation::TryTwoQubit { name, ctl, tgt } => {
                write!(f, "qmap.try_two_qubit @{name}(%{ctl}, %{tgt})")
            }
            Operation::InsertSwap { p1, p2, cost } => {
                if *cost > 0.0 {
                    write!(f, "qmap.insert_swap %{p1}, %{p2} {{cost={cost:.2}}}")
                } else {
                    write!(f, "qmap.insert_swap %{p1}, %{p2}")
                }
            }
            Operation::LayoutMark { snapshot } => {
                let mappings = snapshot
                    .iter()
                    .map(|(lq, pq)| format!("{lq}->{pq}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "qmap.current_layout {{{mappings}}}")
            }
        }
    }
}
