use crate::geometry::DistanceMatrix;
use crate::util::FPA;
//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks and tests

/// Zero diagonal, symmetric, finite and non-negative entries
pub fn distance_matrix_is_valid(dm: &DistanceMatrix) -> bool {
    let n = dm.len();
    (0..n).all(|i| dm.get(i, i) == 0.0)
        && (0..n).all(|i| {
            (0..n).all(|j| {
                let d = dm.get(i, j);
                d.is_finite() && d >= 0.0 && d == dm.get(j, i)
            })
        })
}

/// Whether `a` is not worse than `b`, up to floating point tolerance
pub fn not_worse(a: f64, b: f64) -> bool {
    FPA(a) <= FPA(b)
}
