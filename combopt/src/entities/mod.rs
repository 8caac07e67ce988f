mod instance;

#[doc(inline)]
pub use instance::Instance;
