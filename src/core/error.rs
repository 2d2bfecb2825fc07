//! Engine error conditions.

use thiserror::Error;

/// Errors surfaced by queue and search operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// `remove` was called on a queue with no live tickets. Callers driving
    /// a turn loop must check `is_empty` first.
    #[error("cannot remove from an empty battle queue")]
    EmptyQueue,

    /// A state the engine's invariants rule out was observed, e.g. a
    /// non-terminal state with no available actions or a permission column
    /// misaligned with its ticket list.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            EngineError::EmptyQueue.to_string(),
            "cannot remove from an empty battle queue"
        );
        assert_eq!(
            EngineError::InvariantViolation("bad".to_string()).to_string(),
            "invariant violated: bad"
        );
    }
}
