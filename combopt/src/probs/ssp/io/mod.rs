mod export;
mod import;

/// External (serializable) representations of all Subset Sum Problem related entities.
pub mod ext_repr;

/// Exports a subset sum instance or verdict out of the library.
pub use export::{export, export_instance};

/// Imports a subset sum instance into the library.
pub use import::import;
