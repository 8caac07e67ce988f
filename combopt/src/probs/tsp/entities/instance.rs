use crate::entities::Instance;
use crate::error::ensure_valid;
use crate::geometry::{DistanceMatrix, Point};
use crate::Result;
use crate::util::assertions::distance_matrix_is_valid;

/// A city is a point in the plane, identified by its index in the instance
pub type City = Point;

#[derive(Debug, Clone)]
/// Instance of the Travelling Salesman Problem: an ordered set of cities, city 0 being the depot.
pub struct TSPInstance {
    pub cities: Vec<City>,
    /// Pairwise distances between the cities, derived once from `cities`
    pub dist_matrix: DistanceMatrix,
}

impl TSPInstance {
    pub fn new(cities: Vec<City>) -> Self {
        let dist_matrix = DistanceMatrix::from_points(&cities);
        Self {
            cities,
            dist_matrix,
        }
    }

    /// Pairs a set of cities with a precomputed distance matrix.
    pub fn with_distance_matrix(cities: Vec<City>, dist_matrix: DistanceMatrix) -> Result<Self> {
        ensure_valid!(
            cities.len() == dist_matrix.len(),
            "distance matrix has {} rows but the instance has {} cities",
            dist_matrix.len(),
            cities.len()
        );
        ensure_valid!(
            distance_matrix_is_valid(&dist_matrix),
            "distance matrix is not a valid symmetric distance matrix"
        );
        Ok(Self {
            cities,
            dist_matrix,
        })
    }

    pub fn n_cities(&self) -> usize {
        self.cities.len()
    }

    pub fn city(&self, id: usize) -> &City {
        &self.cities[id]
    }
}

impl Instance for TSPInstance {
    fn n_elements(&self) -> usize {
        self.n_cities()
    }

    fn variant(&self) -> &'static str {
        "TSP"
    }
}
