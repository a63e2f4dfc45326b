// Copyright 2026 the qmap-router authors
//
// Licensed under the Apache License, Version 2.0. You may obtain a copy
// of this license in the LICENSE.txt file in the root directory of this
// source tree or at http://www.apache.org/licenses/LICENSE-2.0.

use hashbrown::HashSet;

use crate::operation::Operation;
use crate::qubit::LogicalQubit;

/// A two-qubit gate picked out of the front layer: its name and operands,
/// borrowed from the underlying IR slice it was extracted from.
#[derive(Copy, Clone, Debug)]
pub struct FrontGate<'a> {
    pub name: &'a str,
    pub ctl: LogicalQubit,
    pub tgt: LogicalQubit,
}

/// Build the front layer from a suffix of the IR starting at the current
/// cursor: the maximal set of independent, immediately-next two-qubit
/// gates whose logical operands have no preceding unresolved two-qubit
/// dependency.
///
/// Single-qubit gates are skipped — they neither block nor are collected.
/// Walking stops at the first two-qubit gate whose operands clash with a
/// qubit already claimed by the layer; this makes front-layer construction
/// program-order-sensitive rather than dependency-DAG based, which is a
/// deliberately preserved property of this pass rather than an oversight
/// (a DAG-based front layer would typically route better, but would also
/// change observable output).
pub fn front_layer(ops: &[Operation]) -> Vec<FrontGate<'_>> {
    let mut layer = Vec::new();
    let mut used: HashSet<LogicalQubit> = HashSet::new();
    for op in ops {
        match op {
            Operation::SingleGate { .. } => continue,
            Operation::TryTwoQubit { name, ctl, tgt } => {
                if used.contains(ctl) || used.contains(tgt) {
                    break;
                }
                used.insert(*ctl);
                used.insert(*tgt);
                layer.push(FrontGate { name, ctl: *ctl, tgt: *tgt });
            }
            Operation::InsertSwap { .. } | Operation::LayoutMark { .. } => {
                // Router-only constructs never appear ahead of the cursor
                // while routing an input IR; treat conservatively as a
                // boundary rather than silently skipping.
                break;
            }
        }
    }
    layer
}
