mod instance;
mod route;
mod solution;

#[doc(inline)]
pub use instance::City;
#[doc(inline)]
pub use instance::TSPInstance;
#[doc(inline)]
pub use route::DEPOT;
#[doc(inline)]
pub use route::Route;
#[doc(inline)]
pub use solution::TSPSolution;
