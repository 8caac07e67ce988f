/// Optimal selection of items computed by the DP solver
#[derive(Debug, Clone, PartialEq)]
pub struct KPSolution {
    /// Indices of the selected items, in ascending order
    pub selected_items: Vec<usize>,
    pub total_value: i64,
    pub total_weight: i64,
    /// Wall-clock computation time in milliseconds
    pub elapsed_ms: f64,
}

impl KPSolution {
    pub fn is_selected(&self, item_id: usize) -> bool {
        self.selected_items.binary_search(&item_id).is_ok()
    }
}
