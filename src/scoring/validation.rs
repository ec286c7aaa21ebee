use super::instrument::{in_range, ITEM_COUNT};
use crate::error::ScoreError;

/// Validate a response vector before scoring.
///
/// Checks the length first, then scans left to right and stops at the first
/// answer outside the accepted range. The returned error carries the
/// offending position (1-based) and value, so callers never need a second
/// pass to find out what was wrong.
pub fn validate_responses(responses: &[i64]) -> Result<(), ScoreError> {
    if responses.len() != ITEM_COUNT {
        return Err(ScoreError::Arity {
            received: responses.len(),
        });
    }

    match responses.iter().position(|v| !in_range(*v)) {
        Some(i) => Err(ScoreError::OutOfRange {
            position: i + 1,
            value: responses[i],
        }),
        None => Ok(()),
    }
}
