//! Free-text input interpretation for the odds dialogue
//!
//! Answers arrive as raw text typed (or button-injected) by the bettor.
//! Decimal odds accept either a dot or a comma as the decimal separator;
//! yes/no questions match against a fixed token set only, no fuzzy matching.

use thiserror::Error;

/// Why an odds input was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OddsParseError {
    #[error("not a number")]
    NotANumber,

    #[error("odds must be greater than 1.0")]
    OutOfRange,
}

/// A classified yes/no answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

/// Tokens accepted as an affirmative answer
const YES_TOKENS: [&str; 4] = ["sim", "s", "yes", "y"];

/// Tokens accepted as a negative answer
const NO_TOKENS: [&str; 4] = ["não", "nao", "n", "no"];

/// Parse decimal odds from free text.
///
/// A comma decimal separator is normalized to a dot, so `"1,66"` and
/// `"1.66"` parse to the same value. Odds of 1.0 or below carry no payout
/// and are rejected as out of range.
///
/// # Examples
///
/// ```
/// use kellycalc::core::input::parse_odds;
///
/// assert_eq!(parse_odds("2,20").unwrap(), 2.20);
/// assert!(parse_odds("1.0").is_err());
/// ```
pub fn parse_odds(text: &str) -> Result<f64, OddsParseError> {
    let normalized = text.trim().replace(',', ".");
    let value: f64 = normalized.parse().map_err(|_| OddsParseError::NotANumber)?;

    if !value.is_finite() {
        return Err(OddsParseError::NotANumber);
    }
    if value <= 1.0 {
        return Err(OddsParseError::OutOfRange);
    }

    Ok(value)
}

/// Classify a yes/no answer.
///
/// Exact match against the fixed token sets after lowercasing and trimming.
pub fn parse_answer(text: &str) -> Option<Answer> {
    let token = text.trim().to_lowercase();

    if YES_TOKENS.contains(&token.as_str()) {
        Some(Answer::Yes)
    } else if NO_TOKENS.contains(&token.as_str()) {
        Some(Answer::No)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_odds_comma_and_dot_agree() {
        let with_comma = parse_odds("1,66").unwrap();
        let with_dot = parse_odds("1.66").unwrap();
        assert_eq!(with_comma, with_dot);
    }

    #[test]
    fn test_parse_odds_trims_whitespace() {
        assert_eq!(parse_odds("  2.50 ").unwrap(), 2.50);
    }

    #[test]
    fn test_parse_odds_rejects_text() {
        assert_eq!(parse_odds("abc").unwrap_err(), OddsParseError::NotANumber);
        assert_eq!(parse_odds("").unwrap_err(), OddsParseError::NotANumber);
        assert_eq!(parse_odds("1.6.6").unwrap_err(), OddsParseError::NotANumber);
    }

    #[test]
    fn test_parse_odds_rejects_non_finite() {
        assert_eq!(parse_odds("inf").unwrap_err(), OddsParseError::NotANumber);
        assert_eq!(parse_odds("NaN").unwrap_err(), OddsParseError::NotANumber);
    }

    #[test]
    fn test_parse_odds_rejects_out_of_range() {
        assert_eq!(parse_odds("1.0").unwrap_err(), OddsParseError::OutOfRange);
        assert_eq!(parse_odds("1").unwrap_err(), OddsParseError::OutOfRange);
        assert_eq!(parse_odds("0.5").unwrap_err(), OddsParseError::OutOfRange);
        assert_eq!(parse_odds("-2").unwrap_err(), OddsParseError::OutOfRange);
    }

    #[test]
    fn test_parse_odds_accepts_just_above_one() {
        assert!(parse_odds("1.01").is_ok());
    }

    #[test]
    fn test_parse_answer_affirmative_tokens() {
        for token in ["sim", "s", "yes", "y", "SIM", " Yes "] {
            assert_eq!(parse_answer(token), Some(Answer::Yes), "token: {token:?}");
        }
    }

    #[test]
    fn test_parse_answer_negative_tokens() {
        for token in ["não", "nao", "n", "no", "NO", " Não "] {
            assert_eq!(parse_answer(token), Some(Answer::No), "token: {token:?}");
        }
    }

    #[test]
    fn test_parse_answer_rejects_everything_else() {
        assert_eq!(parse_answer("talvez"), None);
        assert_eq!(parse_answer("yess"), None);
        assert_eq!(parse_answer("si"), None);
        assert_eq!(parse_answer(""), None);
    }
}
