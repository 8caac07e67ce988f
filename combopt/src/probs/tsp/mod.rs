/// Entities to model the Travelling Salesman Problem (TSP)
pub mod entities;

/// Random instance generation
pub mod generator;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Exact (brute-force) and heuristic (nearest-neighbor) tour construction
pub mod solvers;

/// Helper functions which do not belong to any specific module
pub mod util;
