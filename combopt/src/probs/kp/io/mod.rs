mod export;
mod import;

/// External (serializable) representations of all Knapsack Problem related entities.
pub mod ext_repr;

/// Exports a knapsack instance or solution out of the library.
pub use export::{export, export_instance};

/// Imports a knapsack instance into the library.
pub use import::import;
