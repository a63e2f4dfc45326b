// Copyright 2026 the qmap-router authors
//
// Licensed under the Apache License, Version 2.0. You may obtain a copy
// of this license in the LICENSE.txt file in the root directory of this
// source tree or at http://www.apache.org/licenses/LICENSE-2.0.

//! The look-ahead SABRE machinery: front-layer extraction, candidate-SWAP
//! enumeration, and the distance/fidelity cost function used to select
//! between them. [`crate::router`] drives these pieces through the main
//! routing loop.

pub mod candidates;
pub mod cost;
pub mod front_layer;
pub mod selection;

pub use candidates::candidate_swaps;
pub use cost::{combined_cost, distance_cost, fidelity_penalty, FIDELITY_WEIGHT};
pub use front_layer::{front_layer, FrontGate};
pub use selection::select_best_swap;
