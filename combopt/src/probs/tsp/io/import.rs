use crate::Result;
use crate::error::ensure_valid;
use crate::geometry::Point;
use crate::probs::tsp::entities::TSPInstance;
use crate::probs::tsp::io::ext_repr::ExtTSPInstance;
use crate::probs::tsp::util::assertions;

/// Imports an instance into the library
pub fn import(ext_instance: &ExtTSPInstance) -> Result<TSPInstance> {
    for (i, c) in ext_instance.cities.iter().enumerate() {
        ensure_valid!(
            c.x.is_finite() && c.y.is_finite(),
            "city {i} has non-finite coordinates ({}, {})",
            c.x,
            c.y
        );
    }
    let cities = ext_instance
        .cities
        .iter()
        .map(|c| Point(c.x, c.y))
        .collect();

    let instance = TSPInstance::new(cities);
    debug_assert!(assertions::instance_is_consistent(&instance));
    Ok(instance)
}
