use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::ensure_valid;
use crate::probs::kp::entities::{KPInstance, KPItem};

/// Parameters of the random knapsack generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KPGenConfig {
    pub n_items: usize,
    /// Inclusive range of the item weights
    pub weight_range: (i64, i64),
    /// Inclusive range of the item values
    pub value_range: (i64, i64),
    /// Fixed capacity of the knapsack
    pub capacity: i64,
}

impl Default for KPGenConfig {
    fn default() -> Self {
        Self {
            n_items: 5,
            weight_range: (1, 10),
            value_range: (1, 20),
            capacity: 15,
        }
    }
}

/// Draws `n_items` items with uniformly random weights and values.
pub fn generate(rng: &mut impl Rng, config: &KPGenConfig) -> Result<KPInstance> {
    let (w_min, w_max) = config.weight_range;
    let (v_min, v_max) = config.value_range;
    ensure_valid!(
        0 <= w_min && w_min <= w_max,
        "invalid weight range [{w_min}, {w_max}]"
    );
    ensure_valid!(
        0 <= v_min && v_min <= v_max,
        "invalid value range [{v_min}, {v_max}]"
    );
    ensure_valid!(
        config.capacity >= 0,
        "capacity must be non-negative, got {}",
        config.capacity
    );

    let items = (0..config.n_items)
        .map(|_| {
            KPItem::new(
                rng.random_range(w_min..=w_max),
                rng.random_range(v_min..=v_max),
            )
        })
        .collect();

    info!(
        "[GEN] generated {} knapsack items with capacity {}",
        config.n_items, config.capacity
    );
    Ok(KPInstance::new(items, config.capacity))
}
