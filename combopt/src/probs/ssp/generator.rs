use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Result, SolveError};
use crate::error::ensure_valid;
use crate::probs::ssp::entities::SSPInstance;
use crate::probs::ssp::util::assertions;

/// Largest target for which the generator cross-checks solvability in debug builds
const SOLVABILITY_CHECK_LIMIT: u64 = 1 << 20;

/// Size and number range of a generated pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// 8 numbers in `[1, 20]`
    Easy,
    /// 10 numbers in `[1, 30]`
    Medium,
    /// 15 numbers in `[1, 50]`
    Hard,
    Custom { count: usize, min: u64, max: u64 },
}

impl Difficulty {
    /// `(count, min, max)` of the pool
    pub fn params(&self) -> (usize, u64, u64) {
        match *self {
            Difficulty::Easy => (8, 1, 20),
            Difficulty::Medium => (10, 1, 30),
            Difficulty::Hard => (15, 1, 50),
            Difficulty::Custom { count, min, max } => (count, min, max),
        }
    }
}

/// Parameters of the random number pool generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SSPGenConfig {
    pub difficulty: Difficulty,
}

impl Default for SSPGenConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
        }
    }
}

/// Draws `count` numbers uniformly from `[min, max]` and sets the target to the sum of an
/// independently sampled random subset (each number joins with probability 1/2).
/// If that subset is empty, the first number becomes the target.
///
/// Returns the instance together with the sampled subset (the witness), which always sums to the target.
/// Fails if the witness sum does not fit in a `u64`.
pub fn generate_with_witness(
    rng: &mut impl Rng,
    count: usize,
    min: u64,
    max: u64,
) -> Result<(SSPInstance, Vec<usize>)> {
    ensure_valid!(
        1 <= min && min <= max,
        "invalid number range [{min}, {max}], numbers must be positive"
    );
    let pool: Vec<u64> = (0..count).map(|_| rng.random_range(min..=max)).collect();

    let mut witness: Vec<usize> = (0..count).filter(|_| rng.random_bool(0.5)).collect();
    if witness.is_empty() && !pool.is_empty() {
        witness.push(0);
    }
    let target = witness
        .iter()
        .try_fold(0u64, |acc, &i| acc.checked_add(pool[i]));
    let Some(target) = target else {
        return Err(SolveError::invalid_instance(format!(
            "target of {count} numbers in [{min}, {max}] overflows"
        )));
    };

    let instance = SSPInstance::new(pool, target)?;
    debug_assert!(target > SOLVABILITY_CHECK_LIMIT || assertions::is_solvable(&instance));

    info!(
        "[GEN] generated a pool of {count} numbers in [{min}, {max}] with target {target}"
    );
    Ok((instance, witness))
}

/// Same as [`generate_with_witness`], without revealing the witness
pub fn generate(rng: &mut impl Rng, count: usize, min: u64, max: u64) -> Result<SSPInstance> {
    generate_with_witness(rng, count, min, max).map(|(instance, _)| instance)
}

pub fn generate_from_config(
    rng: &mut impl Rng,
    config: &SSPGenConfig,
) -> Result<(SSPInstance, Vec<usize>)> {
    let (count, min, max) = config.difficulty.params();
    generate_with_witness(rng, count, min, max)
}
