// Copyright 2026 the qmap-router authors
//
// Licensed under the Apache License, Version 2.0. You may obtain a copy
// of this license in the LICENSE.txt file in the root directory of this
// source tree or at http://www.apache.org/licenses/LICENSE-2.0.

//! A minimal OpenQASM 3.0 textual emitter for a routed [`Ir`], standing in
//! for a concrete-syntax exporter that stays out of scope for this crate.
//!
//! A `LayoutMark` updates the logical-to-physical mapping used for
//! subsequent translation, an `InsertSwap` becomes a physical `swap`, and
//! logical gates are translated through the most recently seen mark. This
//! file is demo/reference code, not part of the routing contract.

use hashbrown::HashMap;

use qmap_router::{Ir, Operation, Topology};

/// Translate a routed IR to an OpenQASM 3.0 program operating on a flat
/// physical register `p[0..num_physical_qubits)`.
pub fn export(ir: &Ir, num_physical_qubits: usize) -> String {
    let mut lines = vec![
        "OPENQASM 3.0;".to_string(),
        "include \"stdgates.inc\";".to_string(),
        format!("qubit[{num_physical_qubits}] p;"),
    ];
    let mut logical_to_physical: HashMap<u32, u32> = HashMap::new();

    for op in ir {
        match op {
            Operation::LayoutMark { snapshot } => {
                logical_to_physical.clear();
                for (lq, pq) in snapshot {
                    logical_to_physical.insert(lq.0, pq.0);
                }
            }
            Operation::InsertSwap { p1, p2, .. } => {
                lines.push(format!("swap p[{}], p[{}];", p1.0, p2.0));
            }
            Operation::SingleGate { name, q } => {
                let pid = logical_to_physical.get(&q.0).copied().unwrap_or(q.0);
                lines.push(format!("{} p[{pid}];", name.to_lowercase()));
            }
            Operation::TryTwoQubit { name, ctl, tgt } => {
                let c_pid = logical_to_physical.get(&ctl.0).copied().unwrap_or(ctl.0);
                let t_pid = logical_to_physical.get(&tgt.0).copied().unwrap_or(tgt.0);
                let gate = match name.to_lowercase().as_str() {
                    "cnot" => "cx".to_string(),
                    other => other.to_string(),
                };
                lines.push(format!("{gate} p[{c_pid}], p[{t_pid}];"));
            }
        }
    }

    lines.join("\n")
}

fn main() {
    use qmap_router::{CouplingMap, Router, RouterConfig};

    let topology = CouplingMap::linear(3);
    let mut ir = Ir::new();
    ir.push(Operation::TryTwoQubit {
        name: "CNOT".to_string(),
        ctl: 0.into(),
        tgt: 2.into(),
    });

    let router = Router::new(RouterConfig::default());
    let routed = router.route(&ir, &topology).expect("routing a tiny demo circuit");
    println!("{}", export(&routed.ir, topology.physical_qubits().len()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use qmap_router::{CouplingMap, Router, RouterConfig};

    #[test]
    fn swap_and_gates_translate_through_the_layout() {
        let topology = CouplingMap::linear(3);
        let mut ir = Ir::new();
        ir.push(Operation::SingleGate {
            name: "H".to_string(),
            q: 0.into(),
        });
        ir.push(Operation::TryTwoQubit {
            name: "CNOT".to_string(),
            ctl: 0.into(),
            tgt: 2.into(),
        });
        let router = Router::new(RouterConfig::default());
        let routed = router.route(&ir, &topology).unwrap();
        let qasm = export(&routed.ir, 3);
        assert!(qasm.contains("OPENQASM 3.0;"));
        assert!(qasm.contains("swap p["));
        assert!(qasm.contains("cx p["));
    }
}
