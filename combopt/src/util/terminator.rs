use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::Instant;

/// Decides whether a long-running search should stop early.
/// Polled by the exact solvers between candidates; never interrupts a candidate evaluation.
pub trait Terminator {
    /// Returns true if the search should be aborted
    fn kill(&self) -> bool;
}

/// Terminator that never fires
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTerminator;

impl Terminator for NoTerminator {
    fn kill(&self) -> bool {
        false
    }
}

/// Fires once a deadline has passed or when its interrupt flag is raised, whichever comes first.
/// The flag can be shared with another thread through [`BasicTerminator::interrupt_handle`].
#[derive(Debug, Clone, Default)]
pub struct BasicTerminator {
    deadline: Option<Instant>,
    interrupted: Arc<AtomicBool>,
}

impl BasicTerminator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Some(Instant::now() + timeout),
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Optional timeout in milliseconds, `None` means no deadline
    pub fn from_timeout_ms(timeout_ms: Option<u64>) -> Self {
        match timeout_ms {
            Some(ms) => Self::with_timeout(Duration::from_millis(ms)),
            None => Self::new(),
        }
    }

    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    pub fn interrupt(&self) {
        self.interrupted.store(true, Ordering::Relaxed);
    }
}

impl Terminator for BasicTerminator {
    fn kill(&self) -> bool {
        self.interrupted.load(Ordering::Relaxed)
            || self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}
