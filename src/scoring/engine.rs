use super::category::{classify, Category};
use super::instrument::{contribution, is_reverse_coded};
use super::validation::validate_responses;
use crate::error::ScoreError;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemContribution {
    pub position: usize, // 1-based item number
    pub answer: u8,      // Answer before reverse coding
    pub reversed: bool,  // Whether the item is reverse-coded
    pub points: u8,      // Points counted towards the total
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub items: Vec<ItemContribution>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

impl ScoreResult {
    pub fn category(&self) -> Category {
        classify(i64::from(self.score))
    }
}

/// Score a response vector.
///
/// Validates length and range in a single pass, then sums each item's
/// points with reverse-coded items inverted. Pure: the same input always
/// yields the same result.
pub fn calculate_score(responses: &[i64]) -> Result<ScoreResult, ScoreError> {
    validate_responses(responses)?;

    let mut items = Vec::with_capacity(responses.len());
    for (i, &raw) in responses.iter().enumerate() {
        let answer = u8::try_from(raw).map_err(|_| {
            ScoreError::Internal(format!("answer {} passed validation but is not a u8", raw))
        })?;
        let points = contribution(i, answer);
        debug!(item = i + 1, answer, points, "item scored");
        items.push(ItemContribution {
            position: i + 1,
            answer,
            reversed: is_reverse_coded(i),
            points,
        });
    }

    let score: u32 = items.iter().map(|item| u32::from(item.points)).sum();
    debug!(score, "total score");

    Ok(ScoreResult {
        score,
        breakdown: ScoreBreakdown { items },
    })
}
