// Copyright 2026 the qmap-router authors
//
// Licensed under the Apache License, Version 2.0. You may obtain a copy
// of this license in the LICENSE.txt file in the root directory of this
// source tree or at http://www.apache.org/licenses/LICENSE-2.0.

use crate::qubit::LogicalQubit;

/// Errors produced while routing a circuit.
///
/// Only [`RouterError::MalformedInput`] is fatal to a routing pass; the
/// remaining variants are recovered locally by the router, which emits the
/// offending gate un-routed and continues with the rest of the program.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RouterError {
    #[error("malformed input IR: {0}")]
    MalformedInput(String),

    #[error("logical qubits {0} and {1} are unreachable under the current topology")]
    UnreachableQubit(LogicalQubit, LogicalQubit),

    #[error("no candidate swap available to advance qubits {0}, {1}")]
    NoCandidateSwap(LogicalQubit, LogicalQubit),

    #[error("safety bound exceeded routing qubits {0}, {1} ({2} swaps attempted)")]
    SafetyBoundExceeded(LogicalQubit, LogicalQubit, u32),

    #[error("routing cancelled")]
    Cancelled,
}

impl RouterError {
    /// True for the non-fatal diagnostics that §7 treats identically: the
    /// router recovers by leaving the triggering gate un-routed and moving
    /// on, rather than aborting the whole pass.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, RouterError::MalformedInput(_) | RouterError::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, RouterError>;
