/// Travelling Salesman Problem (TSP) module
#[cfg(feature = "tsp")]
pub mod tsp;

/// 0/1 Knapsack Problem (KP) module
#[cfg(feature = "kp")]
pub mod kp;

/// Subset Sum Problem (SSP) module
#[cfg(feature = "ssp")]
pub mod ssp;
