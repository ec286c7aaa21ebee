use crate::scoring::instrument::{ITEM_COUNT, MAX_RESPONSE, MIN_RESPONSE};
use thiserror::Error;

/// Everything that can stop a run before a score is printed.
///
/// Every variant is terminal: the caller reports it on stderr and exits
/// non-zero without writing anything to stdout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("expected {expected} answers as arguments, received: {received}.", expected = ITEM_COUNT)]
    Arity { received: usize },

    #[error("argument {position} ({literal}) is not a valid number.")]
    Parse { position: usize, literal: String },

    #[error(
        "answer {position} is outside the range {min}-{max}: {value}.",
        min = MIN_RESPONSE,
        max = MAX_RESPONSE
    )]
    OutOfRange { position: usize, value: i64 },

    #[error("unexpected input error while scoring: {0}")]
    Internal(String),
}
