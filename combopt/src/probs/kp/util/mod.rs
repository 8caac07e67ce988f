/// Set of functions used throughout to assure the correctness of the knapsack module.
pub mod assertions;
