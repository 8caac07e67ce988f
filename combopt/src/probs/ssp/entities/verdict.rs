/// Outcome of checking a selection against the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SSPVerdict {
    pub is_correct: bool,
    /// Sum of the selected numbers, reported for display
    pub sum: u64,
}
