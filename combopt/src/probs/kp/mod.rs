/// Entities to model the 0/1 Knapsack Problem (KP)
pub mod entities;

/// Random instance generation
pub mod generator;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Dynamic programming solver
pub mod solver;

/// Helper functions which do not belong to any specific module
pub mod util;

mod dp_table;

#[doc(inline)]
pub use dp_table::{DPTable, MAX_DP_CELLS};
