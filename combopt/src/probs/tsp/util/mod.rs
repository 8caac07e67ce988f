/// Set of functions used throughout to assure the correctness of the TSP module.
pub mod assertions;
