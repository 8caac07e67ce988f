use serde::{Deserialize, Serialize};

/// Subset Sum Problem instance
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSSPInstance {
    /// The name of the instance
    pub name: String,
    /// The numbers to choose from, all strictly positive
    pub pool: Vec<u64>,
    pub target: u64,
}

/// Verdict on a proposed selection
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSSPVerdict {
    /// Pool indices of the selected numbers
    pub selection: Vec<usize>,
    pub sum: u64,
    pub is_correct: bool,
}
