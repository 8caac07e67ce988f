/// Lazy, finite and restartable enumeration of all permutations of a set of indices,
/// in lexicographic order starting from the ascending arrangement.
///
/// Permutations are produced in place by the classic "next permutation" step,
/// so the call stack stays flat and no permutation is materialized ahead of time.
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Vec<usize>,
    initial: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Permutations {
    pub fn new(mut elements: Vec<usize>) -> Self {
        elements.sort_unstable();
        Self {
            current: elements.clone(),
            initial: elements,
            started: false,
            exhausted: false,
        }
    }

    /// Advances to the next permutation and lends it out.
    /// Yields exactly `k!` permutations for `k` distinct elements (one empty permutation for `k == 0`).
    pub fn next_slice(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.current);
        }
        if self.step() {
            Some(&self.current)
        } else {
            self.exhausted = true;
            None
        }
    }

    /// Restarts the enumeration from the first permutation
    pub fn reset(&mut self) {
        self.current.copy_from_slice(&self.initial);
        self.started = false;
        self.exhausted = false;
    }

    /// Total number of permutations in the sequence, saturating at `u64::MAX`
    pub fn n_total(&self) -> u64 {
        (1..=self.initial.len() as u64).fold(1u64, |acc, k| acc.saturating_mul(k))
    }

    fn step(&mut self) -> bool {
        let a = &mut self.current;
        let k = a.len();
        if k < 2 {
            return false;
        }
        //find the longest non-increasing suffix
        let mut i = k - 1;
        while i > 0 && a[i - 1] >= a[i] {
            i -= 1;
        }
        if i == 0 {
            return false;
        }
        //swap the pivot with the rightmost element exceeding it and reverse the suffix
        let mut j = k - 1;
        while a[j] <= a[i - 1] {
            j -= 1;
        }
        a.swap(i - 1, j);
        a[i..].reverse();
        true
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_slice().map(|p| p.to_vec())
    }
}
