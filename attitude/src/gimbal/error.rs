//! Error types for the redundant gimbal solver.

use core::fmt;

/// Rejected solver configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    /// At least one candidate must be sampled per tick.
    ZeroSamples,
    /// The search half width must be finite and non-negative.
    InvalidSearchWidth,
    /// The speed weight must be finite and non-negative.
    InvalidSpeedWeight,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::ZeroSamples => write!(f, "sample count must be at least 1"),
            SolverError::InvalidSearchWidth => {
                write!(f, "search half width must be finite and non-negative")
            }
            SolverError::InvalidSpeedWeight => {
                write!(f, "speed weight must be finite and non-negative")
            }
        }
    }
}

impl std::error::Error for SolverError {}
