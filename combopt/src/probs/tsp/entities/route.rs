use std::fmt::{Display, Formatter};

use crate::geometry::DistanceMatrix;

/// Index of the city where every tour starts and ends
pub const DEPOT: usize = 0;

/// Closed tour through all cities: starts and ends at the [`DEPOT`] and visits every other city exactly once.
/// A complete route over `n` cities has length `n + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route(Vec<usize>);

impl Route {
    /// Closes a visiting order of the non-depot cities into `[0, order.., 0]`
    pub fn closed(order: &[usize]) -> Self {
        let mut path = Vec::with_capacity(order.len() + 2);
        path.push(DEPOT);
        path.extend_from_slice(order);
        path.push(DEPOT);
        Route(path)
    }

    /// Wraps a raw sequence of indices without any validation
    pub fn from_raw(path: Vec<usize>) -> Self {
        Route(path)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of the edge lengths along the route
    pub fn length(&self, dist_matrix: &DistanceMatrix) -> f64 {
        dist_matrix.path_length(&self.0)
    }

    /// Checks the route invariant for an instance of `n_cities`:
    /// `route[0] == route[n] == 0` and `route[1..n]` is a permutation of `{1, .., n-1}`.
    pub fn is_valid(&self, n_cities: usize) -> bool {
        if n_cities == 0 || self.0.len() != n_cities + 1 {
            return false;
        }
        if self.0[0] != DEPOT || self.0[n_cities] != DEPOT {
            return false;
        }
        let mut seen = vec![false; n_cities];
        for &c in &self.0[1..n_cities] {
            if c == DEPOT || c >= n_cities || seen[c] {
                return false;
            }
            seen[c] = true;
        }
        true
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        write!(f, "[{}]", parts.join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(vec![0, 0], 1, true; "depot only")]
    #[test_case(vec![0, 1, 2, 0], 3, true; "three cities")]
    #[test_case(vec![0, 2, 1, 0], 3, true; "reversed")]
    #[test_case(vec![0, 1, 1, 0], 3, false; "duplicate city")]
    #[test_case(vec![1, 0, 2, 1], 3, false; "wrong start")]
    #[test_case(vec![0, 1, 2], 3, false; "not closed")]
    #[test_case(vec![0, 1, 3, 0], 3, false; "out of range")]
    #[test_case(vec![0], 0, false; "no depot")]
    fn route_invariant(path: Vec<usize>, n: usize, expected: bool) {
        assert_eq!(Route::from_raw(path).is_valid(n), expected);
    }

    #[test]
    fn closed_wraps_order_with_depot() {
        assert_eq!(Route::closed(&[2, 1]).indices(), &[0, 2, 1, 0]);
        assert_eq!(Route::closed(&[]).indices(), &[0, 0]);
    }
}
