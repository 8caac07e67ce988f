use ndarray::Array2;

use crate::Result;
use crate::error::ensure_valid;
use crate::geometry::Point;
use crate::util::assertions;

/// Symmetric matrix of pairwise Euclidean distances between a set of points.
/// Built once per instance and read-only afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    matrix: Array2<f64>,
}

impl DistanceMatrix {
    /// Computes all pairwise distances, O(n²) in time and space.
    /// Only the upper triangle is evaluated, the lower triangle is mirrored so the matrix is exactly symmetric.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut matrix = Array2::zeros((n, n));
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance(&points[j]);
                matrix[[i, j]] = d;
                matrix[[j, i]] = d;
            }
        }
        Self { matrix }
    }

    /// Wraps a precomputed matrix, which must be square, symmetric, finite and non-negative with a zero diagonal.
    pub fn from_array(matrix: Array2<f64>) -> Result<Self> {
        let (rows, cols) = matrix.dim();
        ensure_valid!(rows == cols, "distance matrix is not square ({rows}×{cols})");
        let dm = Self { matrix };
        ensure_valid!(
            assertions::distance_matrix_is_valid(&dm),
            "distance matrix is not a valid symmetric distance matrix"
        );
        Ok(dm)
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.matrix[[i, j]]
    }

    pub fn len(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of the edge lengths along a sequence of indices (not closed automatically)
    pub fn path_length(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }

    pub fn row(&self, i: usize) -> impl Iterator<Item = f64> + '_ {
        self.matrix.row(i).into_iter().copied()
    }

    pub fn to_nested_vec(&self) -> Vec<Vec<f64>> {
        self.matrix.rows().into_iter().map(|r| r.to_vec()).collect()
    }
}
