use thiserror::Error;

/// Failure modes of every solver, verifier and generator in the library.
/// All of them are deterministic consequences of the input and are never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("invalid instance: {0}")]
    InvalidInstance(String),
    #[error("search terminated before completion ({evaluated} candidates evaluated)")]
    Terminated { evaluated: u64 },
}

pub type Result<T> = std::result::Result<T, SolveError>;

impl SolveError {
    pub fn invalid_instance(message: impl Into<String>) -> Self {
        Self::InvalidInstance(message.into())
    }
}

/// Returns early with [`SolveError::InvalidInstance`] if the condition does not hold.
macro_rules! ensure_valid {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            let message = format!($($arg)+);
            log::warn!("rejected instance: {message}");
            return Err($crate::SolveError::InvalidInstance(message));
        }
    };
}

pub(crate) use ensure_valid;
