use log::info;
use rand::Rng;

use crate::Result;
use crate::error::ensure_valid;
use crate::geometry::Point;
use crate::probs::tsp::entities::{City, TSPInstance};

/// Places `n_cities` cities uniformly at random in the square `[coord_min, coord_max)²`.
pub fn generate_cities(
    rng: &mut impl Rng,
    n_cities: usize,
    coord_min: f64,
    coord_max: f64,
) -> Result<Vec<City>> {
    ensure_valid!(
        coord_min.is_finite() && coord_max.is_finite() && coord_min < coord_max,
        "invalid coordinate range [{coord_min}, {coord_max})"
    );
    let cities = (0..n_cities)
        .map(|_| {
            Point(
                rng.random_range(coord_min..coord_max),
                rng.random_range(coord_min..coord_max),
            )
        })
        .collect();
    Ok(cities)
}

/// Generates cities and derives the distance matrix of the instance.
pub fn generate_instance(
    rng: &mut impl Rng,
    n_cities: usize,
    coord_min: f64,
    coord_max: f64,
) -> Result<TSPInstance> {
    let cities = generate_cities(rng, n_cities, coord_min, coord_max)?;
    info!("[GEN] generated {n_cities} cities in [{coord_min}, {coord_max})²");
    Ok(TSPInstance::new(cities))
}
