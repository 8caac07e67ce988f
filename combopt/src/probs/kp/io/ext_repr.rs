use serde::{Deserialize, Serialize};

/// External representation of a [`KPItem`](crate::probs::kp::entities::KPItem).
/// Signed, so that invalid (negative) input reaches the validation instead of failing to parse.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtKPItem {
    pub weight: i64,
    pub value: i64,
}

/// 0/1 Knapsack Problem instance
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtKPInstance {
    /// The name of the instance
    pub name: String,
    /// The items, identified by their position
    pub items: Vec<ExtKPItem>,
    /// Maximum total weight of the selected items
    pub capacity: i64,
}

/// 0/1 Knapsack Problem solution
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtKPSolution {
    /// Indices of the selected items
    pub selected_items: Vec<usize>,
    pub total_value: i64,
    pub total_weight: i64,
    /// The time it took to solve the instance in milliseconds
    pub elapsed_ms: f64,
}
