mod distance_matrix;
mod point;

#[doc(inline)]
pub use distance_matrix::DistanceMatrix;
#[doc(inline)]
pub use point::Point;
