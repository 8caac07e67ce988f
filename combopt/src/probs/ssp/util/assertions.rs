use crate::probs::ssp::entities::SSPInstance;

/// Whether some selection of the pool sums exactly to the target.
/// Pseudo-polynomial reachable-sums sweep, independent of the generator's witness.
/// Allocates `target + 1` flags: only meant for small targets.
pub fn is_solvable(instance: &SSPInstance) -> bool {
    let total = instance
        .pool()
        .iter()
        .fold(0u64, |acc, &n| acc.saturating_add(n));
    if instance.target() > total {
        return false;
    }
    let Ok(target) = usize::try_from(instance.target()) else {
        return false;
    };
    let mut reachable = vec![false; target + 1];
    reachable[0] = true;
    for &n in instance.pool() {
        let n = match usize::try_from(n) {
            Ok(n) if n <= target => n,
            _ => continue,
        };
        for s in (n..=target).rev() {
            if reachable[s - n] {
                reachable[s] = true;
            }
        }
    }
    reachable[target]
}
