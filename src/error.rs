//! Error types for tear operations.

use core::fmt;

/// Errors that can occur while spawning a tear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TearError {
    /// The subsection grid is empty (tile size exceeds the playfield).
    EmptyRegistry,
    /// Building the mesh would exceed the world's particle budget.
    ParticleBudgetExceeded { requested: usize, available: usize },
}

impl fmt::Display for TearError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TearError::EmptyRegistry => {
                write!(f, "subsection grid is empty; tile size exceeds the playfield")
            }
            TearError::ParticleBudgetExceeded { requested, available } => {
                write!(f, "mesh needs {} vertices but only {} remain in the budget", requested, available)
            }
        }
    }
}
