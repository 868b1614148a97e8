//! Kelly Criterion Stake Sizing
//!
//! Conservative stake recommendation from quoted decimal odds.
//!
//! The Kelly criterion formula:
//!     f* = (p*b - q) / b
//!
//! Where:
//!     f* = fraction of bankroll to stake
//!     b = value_odds - 1 (net profit per unit staked)
//!     p = estimated real win probability
//!     q = 1 - p (probability of losing)
//!
//! The probability estimate depends on what the bookmaker quotes:
//! - with an opposite market, both implied probabilities are known and the
//!   vig can be removed exactly by normalization
//! - a single-sided quote carrying juice gets a fixed additive correction
//! - a juice-free reference odd is inverted directly

use serde::{Deserialize, Serialize};

/// Additive correction applied to a fair odd that still carries juice
/// before inverting it into a probability. Heuristic estimator, kept at
/// its calibrated value.
pub const VIG_CORRECTION: f64 = 0.15;

/// Divisor applied to the full Kelly fraction (eighth Kelly).
pub const KELLY_DIVISOR: f64 = 8.0;

/// Stakes below this percentage are reported as having no value.
/// Compared against the percentage after rounding to two decimals.
pub const MIN_STAKE_PERCENT: f64 = 0.5;

/// Odds collected for one wager, by market shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "market", rename_all = "snake_case")]
pub enum OddsSlip {
    /// Both sides of the market are quoted; the vig is removed exactly
    WithOpposite {
        fair_odds: f64,
        opposite_odds: f64,
        value_odds: f64,
    },
    /// Only one side is quoted
    SingleSided {
        fair_odds: f64,
        juice_free: bool,
        value_odds: f64,
    },
}

/// Stake recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StakeAdvice {
    pub real_probability: f64,
    pub expected_value: f64,
    pub kelly_fraction: f64,        // full Kelly
    pub conservative_fraction: f64, // after dividing by KELLY_DIVISOR
    pub stake_percent: f64,         // rounded to two decimals
    pub has_value: bool,
}

/// Remove the bookmaker margin using both sides of the market.
///
/// The implied probabilities `1/fair` and `1/opposite` sum to more than 1
/// on a quoted market; normalizing by their sum yields the real estimate.
pub fn devig_probability(fair_odds: f64, opposite_odds: f64) -> f64 {
    let p_fair = 1.0 / fair_odds;
    let p_opposite = 1.0 / opposite_odds;
    p_fair / (p_fair + p_opposite)
}

/// Estimate the win probability from a single-sided quote.
pub fn single_sided_probability(fair_odds: f64, juice_free: bool) -> f64 {
    if juice_free {
        1.0 / fair_odds
    } else {
        1.0 / (fair_odds + VIG_CORRECTION)
    }
}

impl OddsSlip {
    /// The odd actually offered for the wager
    pub fn value_odds(&self) -> f64 {
        match *self {
            OddsSlip::WithOpposite { value_odds, .. } => value_odds,
            OddsSlip::SingleSided { value_odds, .. } => value_odds,
        }
    }

    /// Real win probability estimate for this slip
    pub fn real_probability(&self) -> f64 {
        match *self {
            OddsSlip::WithOpposite {
                fair_odds,
                opposite_odds,
                ..
            } => devig_probability(fair_odds, opposite_odds),
            OddsSlip::SingleSided {
                fair_odds,
                juice_free,
                ..
            } => single_sided_probability(fair_odds, juice_free),
        }
    }
}

/// Compute the conservative Kelly stake for a fully collected slip.
///
/// All odds must be greater than 1.0; the dialogue rejects anything else
/// before a slip can be built, so there is no error path here.
///
/// # Examples
///
/// ```
/// use kellycalc::core::kelly::{advise, OddsSlip};
///
/// let slip = OddsSlip::WithOpposite {
///     fair_odds: 1.66,
///     opposite_odds: 2.20,
///     value_odds: 2.50,
/// };
/// let advice = advise(&slip);
/// assert!((advice.stake_percent - 3.54).abs() < 1e-9);
/// assert!(advice.has_value);
/// ```
pub fn advise(slip: &OddsSlip) -> StakeAdvice {
    let value_odds = slip.value_odds();
    debug_assert!(value_odds > 1.0, "value odds must exceed 1.0");

    let p = slip.real_probability();
    let b = value_odds - 1.0;
    let expected_value = p * b - (1.0 - p);
    let kelly_fraction = expected_value / b;
    let conservative_fraction = kelly_fraction / KELLY_DIVISOR;
    let stake_percent = round2(conservative_fraction * 100.0);

    StakeAdvice {
        real_probability: p,
        expected_value,
        kelly_fraction,
        conservative_fraction,
        stake_percent,
        has_value: stake_percent >= MIN_STAKE_PERCENT,
    }
}

/// Round to two decimal places, half away from zero
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Render the advice as the final message for the bettor.
///
/// Echoes the odds that went into the estimate (the subset depends on the
/// market shape) and the recommended stake formatted to two decimals, or
/// the no-value text when the stake lands below [`MIN_STAKE_PERCENT`].
pub fn render_advice(slip: &OddsSlip, advice: &StakeAdvice) -> String {
    if !advice.has_value {
        return "NO VALUE BET\n\n\
                The odds carry no explicit value to bet on.\n\n\
                Always bet responsibly!"
            .to_string();
    }

    let mut out = String::from("INPUT DATA:\n");
    match *slip {
        OddsSlip::WithOpposite {
            fair_odds,
            opposite_odds,
            value_odds,
        } => {
            out.push_str(&format!("- Fair odds: {}\n", fair_odds));
            out.push_str(&format!("- Opposite odds: {}\n", opposite_odds));
            out.push_str(&format!("- Value odds: {}\n", value_odds));
        }
        OddsSlip::SingleSided {
            fair_odds,
            juice_free,
            value_odds,
        } => {
            if juice_free {
                out.push_str(&format!("- Reference odds (juice-free): {}\n", fair_odds));
            } else {
                out.push_str(&format!("- Fair odds: {}\n", fair_odds));
            }
            out.push_str(&format!("- Value odds: {}\n", value_odds));
        }
    }

    out.push_str("\nFINAL RECOMMENDATION:\n");
    out.push_str(&format!(
        "Recommended stake: {:.2}% of bankroll\n",
        advice.stake_percent
    ));
    out.push_str("\nVALUE BET CONFIRMED!\n");
    out.push_str("\nAlways bet responsibly!");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_devig_probability() {
        // 1/1.66 = 0.6024, 1/2.20 = 0.4545; the sum carries the vig
        let p = devig_probability(1.66, 2.20);
        assert!((p - 0.5700).abs() < 0.001);
    }

    #[test]
    fn test_devig_round_trip() {
        // Re-deriving the probability from the echoed inputs reproduces
        // exactly what the stake was computed from.
        let slip = OddsSlip::WithOpposite {
            fair_odds: 1.66,
            opposite_odds: 2.20,
            value_odds: 2.50,
        };
        let advice = advise(&slip);
        assert_eq!(advice.real_probability, devig_probability(1.66, 2.20));
    }

    #[test]
    fn test_single_sided_juice_free_is_direct_inverse() {
        let p = single_sided_probability(2.38, true);
        assert!((p - 1.0 / 2.38).abs() < 1e-12);
    }

    #[test]
    fn test_single_sided_with_juice_applies_correction() {
        let p = single_sided_probability(2.00, false);
        assert!((p - 1.0 / 2.15).abs() < 1e-12);
    }

    #[test]
    fn test_advise_opposite_market_scenario() {
        // Fair 1.66 / opposite 2.20 / value 2.50 -> 3.54% of bankroll
        let slip = OddsSlip::WithOpposite {
            fair_odds: 1.66,
            opposite_odds: 2.20,
            value_odds: 2.50,
        };
        let advice = advise(&slip);
        assert!((advice.stake_percent - 3.54).abs() < 1e-9);
        assert!(advice.has_value);
        assert!(advice.expected_value > 0.0);
    }

    #[test]
    fn test_advise_single_sided_with_juice_scenario() {
        // Fair 2.00 quoted with juice / value 3.25 -> 2.84%
        let slip = OddsSlip::SingleSided {
            fair_odds: 2.00,
            juice_free: false,
            value_odds: 3.25,
        };
        let advice = advise(&slip);
        assert!((advice.stake_percent - 2.84).abs() < 1e-9);
        assert!(advice.has_value);
    }

    #[test]
    fn test_advise_single_sided_juice_free_scenario() {
        // Juice-free reference 2.38 / value 2.65 -> 0.86%
        let slip = OddsSlip::SingleSided {
            fair_odds: 2.38,
            juice_free: true,
            value_odds: 2.65,
        };
        let advice = advise(&slip);
        assert!((advice.stake_percent - 0.86).abs() < 1e-9);
        assert!(advice.has_value);
    }

    #[test]
    fn test_advise_below_floor_has_no_value() {
        // Positive EV but the rounded stake lands under the 0.5% floor
        let slip = OddsSlip::WithOpposite {
            fair_odds: 2.00,
            opposite_odds: 2.00,
            value_odds: 2.02,
        };
        let advice = advise(&slip);
        assert!(advice.expected_value > 0.0);
        assert!(advice.stake_percent < MIN_STAKE_PERCENT);
        assert!(!advice.has_value);
    }

    #[test]
    fn test_advise_negative_ev_has_no_value() {
        let slip = OddsSlip::SingleSided {
            fair_odds: 3.00,
            juice_free: true,
            value_odds: 2.00,
        };
        let advice = advise(&slip);
        assert!(advice.expected_value < 0.0);
        assert!(advice.kelly_fraction < 0.0);
        assert!(!advice.has_value);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(3.5406), 3.54);
        assert_eq!(round2(0.8595), 0.86);
        assert_eq!(round2(-0.1234), -0.12);
    }

    #[test]
    fn test_render_advice_positive_payload() {
        let slip = OddsSlip::WithOpposite {
            fair_odds: 1.66,
            opposite_odds: 2.20,
            value_odds: 2.50,
        };
        let advice = advise(&slip);
        let text = render_advice(&slip, &advice);

        assert!(text.contains("Fair odds: 1.66"));
        assert!(text.contains("Opposite odds: 2.2"));
        assert!(text.contains("Value odds: 2.5"));
        assert!(text.contains("Recommended stake: 3.54%"));
        assert!(text.contains("VALUE BET CONFIRMED"));
    }

    #[test]
    fn test_render_advice_echoes_juice_free_label() {
        let slip = OddsSlip::SingleSided {
            fair_odds: 2.38,
            juice_free: true,
            value_odds: 2.65,
        };
        let advice = advise(&slip);
        let text = render_advice(&slip, &advice);

        assert!(text.contains("Reference odds (juice-free): 2.38"));
        assert!(text.contains("Recommended stake: 0.86%"));
    }

    #[test]
    fn test_render_advice_no_value_payload() {
        let slip = OddsSlip::WithOpposite {
            fair_odds: 2.00,
            opposite_odds: 2.00,
            value_odds: 2.02,
        };
        let advice = advise(&slip);
        let text = render_advice(&slip, &advice);

        assert!(text.contains("NO VALUE BET"));
        assert!(!text.contains("Recommended stake"));
    }
}
