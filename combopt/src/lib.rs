#![doc = document_features::document_features!()]
//! Solver core for three classical combinatorial optimization problems:
//! the Travelling Salesman Problem, the 0/1 Knapsack Problem and Subset Sum.

/// Entities shared by every problem variant
pub mod entities;

/// Geometric primitives and the distance matrix
pub mod geometry;

/// Problem variants: instances, solvers, generators and their external representations
pub mod probs;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::{Result, SolveError};

/// Monotonic clock that also works on `wasm32-unknown-unknown`
pub use web_time::Instant;
