use super::instrument::MAX_SCORE;
use std::fmt;
use tracing::warn;

/// Severity band a total score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Good,
    MildAttention,
    ConsultationAdvised,
}

/// Highest total in the `Good` band.
const GOOD_MAX: i64 = 9;

/// Highest total in the `MildAttention` band.
const MILD_MAX: i64 = 19;

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Good => "Good",
            Category::MildAttention => "Needs mild attention",
            Category::ConsultationAdvised => "Consultation advised",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Category::Good => {
                "Keep up healthy habits and continue regular self-reflection. \
                 Focus on sleep quality and positive social connections."
            }
            Category::MildAttention => {
                "Try structuring your daily schedule, practice light relaxation \
                 techniques and make sure you get enough rest. Cut back on late nights."
            }
            Category::ConsultationAdvised => {
                "The score indicates a greater need for attention. Consider consulting \
                 a mental health professional (psychologist or psychiatrist) soon."
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a total, clamping it into 0..=MAX_SCORE first.
/// A clamped total is logged as a warning.
pub fn classify(total: i64) -> Category {
    let clamped = total.clamp(0, i64::from(MAX_SCORE));
    if clamped != total {
        warn!(
            total,
            clamped, "score outside 0-{} detected, clamped to nearest bound", MAX_SCORE
        );
    }
    if clamped <= GOOD_MAX {
        Category::Good
    } else if clamped <= MILD_MAX {
        Category::MildAttention
    } else {
        Category::ConsultationAdvised
    }
}
