use crate::Result;
use crate::entities::Instance;
use crate::error::ensure_valid;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Instance of the Subset Sum Problem: a pool of positive numbers and a target sum.
pub struct SSPInstance {
    pool: Vec<u64>,
    target: u64,
}

impl SSPInstance {
    pub fn new(pool: Vec<u64>, target: u64) -> Result<Self> {
        for (i, &n) in pool.iter().enumerate() {
            ensure_valid!(n > 0, "pool number at index {i} is not positive");
        }
        Ok(Self { pool, target })
    }

    pub fn pool(&self) -> &[u64] {
        &self.pool
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn number(&self, id: usize) -> u64 {
        self.pool[id]
    }
}

impl Instance for SSPInstance {
    fn n_elements(&self) -> usize {
        self.pool.len()
    }

    fn variant(&self) -> &'static str {
        "SSP"
    }
}
