use crate::error::ScoreError;
use crate::scoring::instrument::ITEM_COUNT;
use tracing::debug;

/// Parsed answers, exactly one per questionnaire item.
///
/// Values are not range-checked yet; that happens when they are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Responses([i64; ITEM_COUNT]);

impl Responses {
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }
}

/// Parse command-line answers (program name already stripped).
///
/// Fails with `Arity` unless exactly `ITEM_COUNT` arguments are given, then
/// parses each one as a base-10 integer. Parsing stops at the first literal
/// that is not a number and reports its 1-based position.
pub fn parse_responses<S: AsRef<str>>(args: &[S]) -> Result<Responses, ScoreError> {
    if args.len() != ITEM_COUNT {
        return Err(ScoreError::Arity {
            received: args.len(),
        });
    }

    let mut values = [0i64; ITEM_COUNT];
    for (i, arg) in args.iter().enumerate() {
        let literal = arg.as_ref();
        values[i] = literal
            .trim()
            .parse()
            .map_err(|_| ScoreError::Parse {
                position: i + 1,
                literal: literal.to_string(),
            })?;
    }

    debug!(?values, "parsed responses");
    Ok(Responses(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_ten_numbers() {
        let parsed = parse_responses(&args(&["0", "1", "2", "3", "0", "1", "2", "3", "0", "1"]))
            .unwrap();
        assert_eq!(parsed.as_slice(), &[0, 1, 2, 3, 0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn test_nine_arguments() {
        let result = parse_responses(&args(&["1"; 9]));
        assert_eq!(result, Err(ScoreError::Arity { received: 9 }));
    }

    #[test]
    fn test_eleven_arguments() {
        let result = parse_responses(&args(&["1"; 11]));
        assert_eq!(result, Err(ScoreError::Arity { received: 11 }));
    }

    #[test]
    fn test_no_arguments() {
        let empty: [&str; 0] = [];
        assert_eq!(
            parse_responses(&empty),
            Err(ScoreError::Arity { received: 0 })
        );
    }

    #[test]
    fn test_non_numeric_reports_position_and_literal() {
        let result = parse_responses(&args(&["0", "1", "abc", "3", "0", "1", "2", "3", "0", "1"]));
        assert_eq!(
            result,
            Err(ScoreError::Parse {
                position: 3,
                literal: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_first_parse_failure_wins() {
        let result = parse_responses(&args(&["x", "1", "y", "3", "0", "1", "2", "3", "0", "1"]));
        assert!(matches!(result, Err(ScoreError::Parse { position: 1, .. })));
    }

    #[test]
    fn test_arity_checked_before_parsing() {
        let result = parse_responses(&args(&["abc"; 3]));
        assert_eq!(result, Err(ScoreError::Arity { received: 3 }));
    }

    #[test]
    fn test_out_of_range_values_still_parse() {
        let parsed = parse_responses(&args(&["-1", "4", "0", "0", "0", "0", "0", "0", "0", "+2"]))
            .unwrap();
        assert_eq!(parsed.as_slice()[0], -1);
        assert_eq!(parsed.as_slice()[1], 4);
        assert_eq!(parsed.as_slice()[9], 2);
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let parsed = parse_responses(&args(&[" 1", "2 ", "0", "0", "0", "0", "0", "0", "0", "0"]))
            .unwrap();
        assert_eq!(parsed.as_slice()[0], 1);
        assert_eq!(parsed.as_slice()[1], 2);
    }

    #[test]
    fn test_decimal_rejected() {
        let result = parse_responses(&args(&["1.5", "0", "0", "0", "0", "0", "0", "0", "0", "0"]));
        assert!(matches!(result, Err(ScoreError::Parse { position: 1, .. })));
    }
}
