// Copyright 2026 the qmap-router authors
//
// Licensed under the Apache License, Version 2.0. You may obtain a copy
// of this license in the LICENSE.txt file in the root directory of this
// source tree or at http://www.apache.org/licenses/LICENSE-2.0.

use std::fmt;

use crate::error::{Result, RouterError};
use crate::operation::Operation;

/// An ordered, append-only sequence of [`Operation`]s. Order is program
/// order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ir {
    ops: Vec<Operation>,
}

impl Ir {
    pub fn new() -> Self {
        Ir { ops: Vec::new() }
    }

    pub fn push(&mut self, op: Operation) {
        self.ops.push(op);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.ops.iter()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn as_slice(&self) -> &[Operation] {
        &self.ops
    }

    /// Check the well-formedness rules an input IR must satisfy before
    /// routing, returning `N = max(referenced logical id) + 1` on success.
    ///
    /// 1. every logical qubit referenced fits in `[0, N)`;
    /// 2. every `TryTwoQubit` has distinct control and target;
    /// 3. `InsertSwap` and `LayoutMark` do not appear (they are router-only).
    pub fn validate(&self) -> Result<usize> {
        let mut max_id: Option<u32> = None;
        for op in &self.ops {
            if op.is_router_only() {
                return Err(RouterError::MalformedInput(format!(
                    "router-only operation in input IR: {op}"
                )));
            }
            match op {
                Operation::SingleGate { q, .. } => {
                    max_id = Some(max_id.map_or(q.0, |m| m.max(q.0)));
                }
                Operation::TryTwoQubit { ctl, tgt, .. } => {
                    if ctl == tgt {
                        return Err(RouterError::MalformedInput(format!(
                            "two-qubit gate has equal control and target: {ctl}"
                        )));
                    }
                    max_id = Some(max_id.map_or(ctl.0.max(tgt.0), |m| m.max(ctl.0).max(tgt.0)));
                }
                Operation::InsertSwap { .. } | Operation::LayoutMark { .. } => unreachable!(),
            }
        }
        Ok(max_id.map_or(0, |m| m as usize + 1))
    }
}

impl FromIterator<Operation> for Ir {
    fn from_iter<T: IntoIterator<Item = Operation>>(iter: T) -> Self {
        Ir {
            ops: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Ir {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl fmt::Display for Ir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qubit::LogicalQubit;

    fn single(name: &str, q: u32) -> Operation {
        Operation::SingleGate {
            name: name.to_string(),
            q: LogicalQubit(q),
        }
    }

    fn two(ctl: u32, tgt: u32) -> Operation {
        Operation::TryTwoQubit {
            name: "CNOT".to_string(),
            ctl: LogicalQubit(ctl),
            tgt: LogicalQubit(tgt),
        }
    }

    #[test]
    fn validate_computes_qubit_count() {
        let ir: Ir = vec![single("H", 0), two(0, 2)].into_iter().collect();
        assert_eq!(ir.validate().unwrap(), 3);
    }

    #[test]
    fn validate_rejects_equal_control_and_target() {
        let ir: Ir = vec![two(1, 1)].into_iter().collect();
        assert!(matches!(
            ir.validate(),
            Err(RouterError::MalformedInput(_))
        ));
    }

    #[test]
    fn validate_rejects_router_only_operations() {
        let ir: Ir = vec![Operation::InsertSwap {
            p1: crate::qubit::PhysicalQubit(0),
            p2: crate::qubit::PhysicalQubit(1),
            cost: 0.0,
        }]
        .into_iter()
        .collect();
        assert!(matches!(
            ir.validate(),
            Err(RouterError::MalformedInput(_))
        ));
    }

    #[test]
    fn empty_ir_has_zero_qubits() {
        let ir = Ir::new();
        assert_eq!(ir.validate().unwrap(), 0);
    }
}
