/// Set of functions used throughout to assure the correctness of the subset sum module.
pub mod assertions;
