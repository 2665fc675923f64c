use smallcancel_words::WordError;
use thiserror::Error;

/// Result type for small cancellation computations
pub type Result<T> = std::result::Result<T, CancellationError>;

/// Errors surfaced by the small cancellation checks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CancellationError {
    /// Input contract violation (empty set, empty or unreduced relator, bad letter)
    #[error("Invalid relators: {0}")]
    Words(#[from] WordError),

    /// Invalid analysis configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The ratio threshold is `1/lambda`, so `lambda` must be positive
    #[error("lambda must be a positive integer")]
    InvalidLambda,

    /// Piece-count search ran past its step budget
    #[error("Piece search exceeded its budget of {steps} steps")]
    BudgetExhausted { steps: u64 },

    /// Piece-count search recursed deeper than allowed
    #[error("Piece search exceeded the maximum depth of {depth}")]
    DepthExceeded { depth: usize },
}

impl CancellationError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Whether the error reports an exhausted search budget rather than bad input
    #[must_use]
    pub const fn is_resource_exhaustion(&self) -> bool {
        matches!(self, Self::BudgetExhausted { .. } | Self::DepthExceeded { .. })
    }
}
