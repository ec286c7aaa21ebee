pub mod category;
pub mod engine;
pub mod instrument;
pub mod validation;

pub use category::{classify, Category};
pub use engine::{calculate_score, ItemContribution, ScoreBreakdown, ScoreResult};
pub use instrument::{ITEM_COUNT, MAX_RESPONSE, MAX_SCORE, MIN_RESPONSE, REVERSE_CODED};
pub use validation::validate_responses;
