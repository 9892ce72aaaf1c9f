//! Integer extraction from model output

use regex::Regex;
use tracing::debug;

/// Extract the first standalone number of at most three digits
///
/// Models answer with prose more often than clean numerals, so this
/// tolerates "I'll guess 42!" while rejecting longer digit runs. The word
/// boundaries make "1000" parse as nothing rather than as 100.
pub fn parse_integer(text: &str) -> Option<i64> {
    let re = Regex::new(r"\b\d{1,3}\b").ok()?;
    let value = re.find(text)?.as_str().parse::<i64>().ok()?;
    debug!(value, "parse_integer: extracted");
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parses_bare_number() {
        assert_eq!(parse_integer("42"), Some(42));
        assert_eq!(parse_integer("  37  "), Some(37));
    }

    #[test]
    fn test_parses_number_inside_prose() {
        assert_eq!(parse_integer("I'll guess 42!"), Some(42));
        assert_eq!(parse_integer("My answer: 7."), Some(7));
    }

    #[test]
    fn test_takes_first_match() {
        assert_eq!(parse_integer("Either 30 or 70"), Some(30));
    }

    #[test]
    fn test_rejects_four_digit_runs() {
        assert_eq!(parse_integer("1000"), None);
        assert_eq!(parse_integer("I pick 98765"), None);
    }

    #[test]
    fn test_skips_long_run_for_later_short_one() {
        assert_eq!(parse_integer("In 2024 I would say 42"), Some(42));
    }

    #[test]
    fn test_no_number_is_none() {
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("no numbers here"), None);
    }

    proptest! {
        #[test]
        fn prop_never_panics_and_bounds_hold(text in ".*") {
            if let Some(value) = parse_integer(&text) {
                prop_assert!((0..=999).contains(&value));
            }
        }
    }
}
