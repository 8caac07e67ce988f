use std::any::Any;

/// The static (unmodifiable) representation of a problem instance.
/// This trait defines shared functionality between any instance variant.
pub trait Instance: Any {
    /// Number of elements (cities, items or pool numbers) in the instance
    fn n_elements(&self) -> usize;

    /// Short name of the problem variant, used in logging and output
    fn variant(&self) -> &'static str;

    fn is_empty(&self) -> bool {
        self.n_elements() == 0
    }
}
