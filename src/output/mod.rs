pub mod formatter;

pub use formatter::{format_breakdown, format_category, format_score, should_use_colors};
