mod instance;
mod solution;

#[doc(inline)]
pub use instance::KPInstance;
#[doc(inline)]
pub use instance::KPItem;
#[doc(inline)]
pub use solution::KPSolution;
