pub mod error;
pub mod input;
pub mod output;
pub mod scoring;
pub mod telemetry;

pub use error::ScoreError;
pub use scoring::{calculate_score, Category, ScoreResult};

/// Parse command-line answers and score them in one step.
pub fn score_arguments<S: AsRef<str>>(args: &[S]) -> Result<ScoreResult, ScoreError> {
    let responses = input::parse_responses(args)?;
    calculate_score(responses.as_slice())
}
