use ndarray::Array2;

use crate::Result;
use crate::error::ensure_valid;
use crate::probs::kp::entities::KPItem;

/// Upper bound on the number of cells of a DP table (256 MiB of `i64`s)
pub const MAX_DP_CELLS: usize = 1 << 25;

/// Dynamic programming table of the 0/1 knapsack recurrence, stored as a flat `(n+1) × (W+1)` buffer.
///
/// `dp[i][w]` is the best value achievable with the first `i` items and a capacity of `w`.
/// Memory and time are O(n·W): the cost is pseudo-polynomial and scales with the magnitude
/// of the capacity, not only with the number of items.
#[derive(Debug, Clone)]
pub struct DPTable {
    table: Array2<i64>,
}

impl DPTable {
    /// Forward pass: fills the table row by row.
    /// Fails if the table would exceed [`MAX_DP_CELLS`].
    pub fn fill(items: &[KPItem], capacity: usize) -> Result<Self> {
        let n = items.len();
        let n_cells = (n + 1)
            .checked_mul(capacity.saturating_add(1))
            .filter(|&c| c <= MAX_DP_CELLS);
        ensure_valid!(
            n_cells.is_some(),
            "a DP table of {} items × capacity {capacity} exceeds {MAX_DP_CELLS} cells",
            n
        );

        let mut table = Array2::<i64>::zeros((n + 1, capacity + 1));
        for i in 1..=n {
            let item = items[i - 1];
            let weight = item_weight(&item);
            for w in 0..=capacity {
                let skip = table[[i - 1, w]];
                table[[i, w]] = if weight > w {
                    skip
                } else {
                    skip.max(item.value.saturating_add(table[[i - 1, w - weight]]))
                };
            }
        }
        Ok(Self { table })
    }

    #[inline(always)]
    pub fn get(&self, i: usize, w: usize) -> i64 {
        self.table[[i, w]]
    }

    pub fn n_items(&self) -> usize {
        self.table.nrows() - 1
    }

    pub fn capacity(&self) -> usize {
        self.table.ncols() - 1
    }

    /// `dp[n][W]`
    pub fn optimal_value(&self) -> i64 {
        self.get(self.n_items(), self.capacity())
    }

    /// Backward pass: walks the rows from `n` down to `1` and includes item `i-1`
    /// only when `dp[i][w] != dp[i-1][w]`, i.e. when the optimum strictly requires it.
    /// Returns the selected item indices in ascending order.
    pub fn reconstruct(&self, items: &[KPItem]) -> Vec<usize> {
        let mut w = self.capacity();
        let mut selected = vec![];
        for i in (1..=self.n_items()).rev() {
            if self.get(i, w) != self.get(i - 1, w) {
                selected.push(i - 1);
                w -= item_weight(&items[i - 1]);
            }
        }
        selected.reverse();
        selected
    }
}

/// Weights too large for `usize` can never fit and are clamped
fn item_weight(item: &KPItem) -> usize {
    usize::try_from(item.weight).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(pairs: &[(i64, i64)]) -> Vec<KPItem> {
        pairs.iter().map(|&(w, v)| KPItem::new(w, v)).collect()
    }

    #[test]
    fn classic_three_item_table() {
        let items = items(&[(2, 3), (3, 4), (4, 5)]);
        let dp = DPTable::fill(&items, 5).unwrap();
        assert_eq!(dp.n_items(), 3);
        assert_eq!(dp.capacity(), 5);
        assert_eq!(dp.optimal_value(), 7);
        assert_eq!((0..=5).map(|w| dp.get(1, w)).collect::<Vec<_>>(), vec![0, 0, 3, 3, 3, 3]);
        assert_eq!(dp.reconstruct(&items), vec![0, 1]);
    }

    #[test]
    fn ties_prefer_excluding_later_items() {
        //both items alone are optimal, the backward scan excludes the last one
        let items = items(&[(3, 5), (3, 5)]);
        let dp = DPTable::fill(&items, 3).unwrap();
        assert_eq!(dp.optimal_value(), 5);
        assert_eq!(dp.reconstruct(&items), vec![0]);
    }

    #[test]
    fn oversized_table_is_rejected() {
        let items = items(&[(1, 1); 4]);
        assert!(DPTable::fill(&items, MAX_DP_CELLS).is_err());
        assert!(DPTable::fill(&items, usize::MAX).is_err());
    }

    #[test]
    fn zero_capacity_and_no_items() {
        let dp = DPTable::fill(&[], 0).unwrap();
        assert_eq!(dp.optimal_value(), 0);
        assert!(dp.reconstruct(&[]).is_empty());
    }
}
