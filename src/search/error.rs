use thiserror::Error;

/// Smallest roster the engine will split
pub const MIN_PARTICIPANTS: usize = 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Need at least 2 participants to make two teams, got {0}")]
    InvalidInput(usize),

    /// Enumeration yielded nothing. Indicates a bug, not bad input.
    #[error("No candidate split found for {0} participants")]
    NoSolution(usize),
}
