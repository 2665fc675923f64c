use thiserror::Error;

/// Result type for word operations
pub type Result<T> = std::result::Result<T, WordError>;

/// Errors raised while building letters, words and relator sets
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// Character outside `a..=z` / `A..=Z`
    #[error("Invalid letter: {0:?}")]
    InvalidLetter(char),

    /// Generator index 0 has no meaning (generators are numbered from 1)
    #[error("Generator index must be non-zero")]
    ZeroGenerator,

    /// Generator index whose inverse is not representable
    #[error("Generator index {0} is out of range")]
    GeneratorOutOfRange(i32),

    /// A relator set needs at least one relator
    #[error("Relator set is empty")]
    EmptyRelatorSet,

    /// Relators must have positive length
    #[error("Relator {index} is the empty word")]
    EmptyRelator { index: usize },

    /// Relators must already be cyclically reduced; they are never repaired silently
    #[error("Relator {index} is not cyclically reduced: {word}")]
    NotCyclicallyReduced { index: usize, word: String },
}

impl WordError {
    /// Create a cyclic reduction contract error
    pub fn not_cyclically_reduced(index: usize, word: impl Into<String>) -> Self {
        Self::NotCyclicallyReduced {
            index,
            word: word.into(),
        }
    }
}
