mod instance;
mod verdict;

#[doc(inline)]
pub use instance::SSPInstance;
#[doc(inline)]
pub use verdict::SSPVerdict;
