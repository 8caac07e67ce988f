mod export;
mod import;

/// External (serializable) representations of all Travelling Salesman Problem related entities.
pub mod ext_repr;

/// Exports a TSP instance or solution out of the library.
pub use export::{export, export_instance};

/// Imports a TSP instance into the library.
pub use import::import;
