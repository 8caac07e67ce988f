/// Entities to model the Subset Sum Problem (SSP)
pub mod entities;

/// Random instance generation, guaranteeing at least one feasible selection
pub mod generator;

/// Importing problem instances into and exporting verdicts out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

/// Verification of user-proposed selections
pub mod verifier;
