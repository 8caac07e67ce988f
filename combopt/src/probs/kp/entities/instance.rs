use crate::Result;
use crate::entities::Instance;
use crate::error::ensure_valid;

/// An item that can be put in the knapsack at most once. Identified by its index in the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KPItem {
    pub weight: i64,
    pub value: i64,
}

impl KPItem {
    pub fn new(weight: i64, value: i64) -> Self {
        Self { weight, value }
    }
}

#[derive(Debug, Clone)]
/// Instance of the 0/1 Knapsack Problem: a set of items and the weight capacity of the knapsack.
pub struct KPInstance {
    pub items: Vec<KPItem>,
    pub capacity: i64,
}

impl KPInstance {
    pub fn new(items: Vec<KPItem>, capacity: i64) -> Self {
        Self { items, capacity }
    }

    /// Negative weights, values or capacity are invalid. Everything else,
    /// including an empty item list or a zero capacity, is a valid instance.
    pub fn validate(&self) -> Result<()> {
        ensure_valid!(
            self.capacity >= 0,
            "capacity must be non-negative, got {}",
            self.capacity
        );
        for (i, item) in self.items.iter().enumerate() {
            ensure_valid!(
                item.weight >= 0 && item.value >= 0,
                "item {i} has a negative weight or value (weight: {}, value: {})",
                item.weight,
                item.value
            );
        }
        let all_items: Vec<usize> = (0..self.items.len()).collect();
        ensure_valid!(
            self.totals(&all_items).is_some(),
            "total weight or value of the items exceeds {}",
            i64::MAX
        );
        Ok(())
    }

    pub fn item(&self, id: usize) -> &KPItem {
        &self.items[id]
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    /// Total weight and value of a set of item indices, `None` if either overflows
    pub fn totals(&self, item_ids: &[usize]) -> Option<(i64, i64)> {
        item_ids.iter().try_fold((0i64, 0i64), |(w, v), &id| {
            let item = &self.items[id];
            Some((w.checked_add(item.weight)?, v.checked_add(item.value)?))
        })
    }
}

impl Instance for KPInstance {
    fn n_elements(&self) -> usize {
        self.n_items()
    }

    fn variant(&self) -> &'static str {
        "KP"
    }
}
