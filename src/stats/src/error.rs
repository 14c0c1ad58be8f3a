//! Errors raised while building race statistics.

/// Construction contract violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    #[error("Race name must not be empty")]
    EmptyRaceName,
}
