use thiserror::Error;

/// Why a hand could not be classified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("card {index} ('{token}') is neither a wild card nor a valid card")]
    InvalidCard { index: usize, token: String },

    #[error("no cards to evaluate")]
    EmptyHand,
}
