// Copyright 2026 the qmap-router authors
//
// Licensed under the Apache License, Version 2.0. You may obtain a copy
// of this license in the LICENSE.txt file in the root directory of this
// source tree or at http://www.apache.org/licenses/LICENSE-2.0.

use std::fmt;

/// A qubit identifier in the source program, as produced by the circuit
/// parser collaborator. Distinct ids denote distinct logical qubits.
#[derive(Copy, Clone, Debug, Hash, Ord, PartialOrd, Eq, PartialEq)]
pub struct LogicalQubit(pub u32);

/// A node of the target device's coupling graph.
#[derive(Copy, Clone, Debug, Hash, Ord, PartialOrd, Eq, PartialEq)]
pub struct PhysicalQubit(pub u32);

impl LogicalQubit {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl PhysicalQubit {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for LogicalQubit {
    fn from(value: u32) -> Self {
        LogicalQubit(value)
    }
}

impl From<LogicalQubit> for u32 {
    fn from(value: LogicalQubit) -> Self {
        value.0
    }
}

impl From<u32> for PhysicalQubit {
    fn from(value: u32) -> Self {
        PhysicalQubit(value)
    }
}

impl From<PhysicalQubit> for u32 {
    fn from(value: PhysicalQubit) -> Self {
        value.0
    }
}

impl fmt::Display for LogicalQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl fmt::Display for PhysicalQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}
