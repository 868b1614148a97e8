//! Conversation state machine for the odds dialogue
//!
//! One [`Session`] walks a bettor through a fixed sequence of questions:
//! whether an opposite market exists, whether the quoted odd still carries
//! juice, and the odds themselves. Once the last odd is collected the
//! session invokes the Kelly engine and returns the rendered result.
//!
//! The machine performs no I/O. The caller owns session storage, feeds in
//! raw text, and delivers the returned reply; rejected input never changes
//! state, so a retry sees the same question again.

use serde::{Deserialize, Serialize};

use super::input::{parse_answer, parse_odds, Answer, OddsParseError};
use super::kelly::{advise, render_advice, OddsSlip};

const PROMPT_OPPOSITE_MARKET: &str =
    "Does the market you want to bet on have an opposite market? (yes/no)";
const PROMPT_JUICE_QUESTION: &str = "Is the reference odd already juice-free? (yes/no)";
const PROMPT_FAIR_ODDS: &str = "What is the fair odd? (e.g. 1.66)";
const PROMPT_FAIR_ODDS_JUICE_FREE: &str = "What is the juice-free reference odd? (e.g. 2.38)";
const PROMPT_FAIR_ODDS_WITH_JUICE: &str = "What is the fair odd you found? (e.g. 2.00)";
const PROMPT_OPPOSITE_ODDS: &str = "What is the odd of the opposite market? (e.g. 2.20)";
const PROMPT_VALUE_ODDS: &str = "What is the value odd you found? (e.g. 2.00)";
const PROMPT_VALUE_ODDS_NO_OPPOSITE: &str = "What is the value odd you found? (e.g. 2.65)";

const ERR_ANSWER: &str = "Please answer 'yes' or 'no'";
const ERR_NOT_A_NUMBER: &str = "Please enter a valid number";
const ERR_OUT_OF_RANGE: &str = "Please enter a valid number greater than 1.0";
const ERR_NO_ACTIVE_SESSION: &str = "No active session. Start a new calculation to begin again.";

/// Position in the question sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Start,
    OppositeMarket,
    JuiceQuestion,
    FairOdds,
    FairOddsNoOpposite,
    OppositeOdds,
    ValueOdds,
    ValueOddsNoOpposite,
    Completed,
}

/// What kind of reply the caller should deliver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    /// The next question in the sequence
    Prompt,
    /// The input was rejected; the session did not move
    Error,
    /// The rendered stake recommendation; the session is terminal
    Result,
}

/// One turn's outcome: the text to deliver plus where the session stands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub kind: ReplyKind,
    pub text: String,
    pub step: Step,
}

impl Reply {
    fn prompt(text: &str, step: Step) -> Self {
        Reply {
            kind: ReplyKind::Prompt,
            text: text.to_string(),
            step,
        }
    }

    fn error(text: &str, step: Step) -> Self {
        Reply {
            kind: ReplyKind::Error,
            text: text.to_string(),
            step,
        }
    }

    fn result(text: String, step: Step) -> Self {
        Reply {
            kind: ReplyKind::Result,
            text,
            step,
        }
    }
}

/// One bettor's progress through the dialogue
///
/// Every odds field is set exactly once along the path taken and is never
/// overwritten; `step` only moves forward. The caller discards the session
/// once it reports complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    step: Step,
    has_opposite_market: Option<bool>,
    is_juice_free: Option<bool>,
    fair_odds: Option<f64>,
    opposite_odds: Option<f64>,
    value_odds: Option<f64>,
}

impl Session {
    /// Create a session and return the first question.
    pub fn begin() -> (Session, Reply) {
        let mut session = Session {
            step: Step::Start,
            has_opposite_market: None,
            is_juice_free: None,
            fair_odds: None,
            opposite_odds: None,
            value_odds: None,
        };
        session.step = Step::OppositeMarket;
        let reply = Reply::prompt(PROMPT_OPPOSITE_MARKET, session.step);
        (session, reply)
    }

    /// Current position in the dialogue
    pub fn step(&self) -> Step {
        self.step
    }

    /// Whether the terminal result has been produced
    pub fn is_complete(&self) -> bool {
        self.step == Step::Completed
    }

    /// Apply one raw input to the session.
    ///
    /// On success the session advances and the next question (or the
    /// rendered result) comes back. On rejection the session is untouched
    /// and the reply carries the validation message.
    pub fn submit(&mut self, raw: &str) -> Reply {
        match self.step {
            Step::OppositeMarket => match parse_answer(raw) {
                Some(Answer::Yes) => {
                    self.has_opposite_market = Some(true);
                    self.step = Step::FairOdds;
                    Reply::prompt(PROMPT_FAIR_ODDS, self.step)
                }
                Some(Answer::No) => {
                    self.has_opposite_market = Some(false);
                    self.step = Step::JuiceQuestion;
                    Reply::prompt(PROMPT_JUICE_QUESTION, self.step)
                }
                None => Reply::error(ERR_ANSWER, self.step),
            },

            Step::JuiceQuestion => match parse_answer(raw) {
                Some(answer) => {
                    let juice_free = answer == Answer::Yes;
                    self.is_juice_free = Some(juice_free);
                    self.step = Step::FairOddsNoOpposite;
                    let prompt = if juice_free {
                        PROMPT_FAIR_ODDS_JUICE_FREE
                    } else {
                        PROMPT_FAIR_ODDS_WITH_JUICE
                    };
                    Reply::prompt(prompt, self.step)
                }
                None => Reply::error(ERR_ANSWER, self.step),
            },

            Step::FairOdds | Step::FairOddsNoOpposite => match parse_odds(raw) {
                Ok(odds) => {
                    self.fair_odds = Some(odds);
                    if self.has_opposite_market == Some(true) {
                        self.step = Step::OppositeOdds;
                        Reply::prompt(PROMPT_OPPOSITE_ODDS, self.step)
                    } else {
                        self.step = Step::ValueOddsNoOpposite;
                        Reply::prompt(PROMPT_VALUE_ODDS_NO_OPPOSITE, self.step)
                    }
                }
                Err(e) => Reply::error(odds_error_text(e), self.step),
            },

            Step::OppositeOdds => match parse_odds(raw) {
                Ok(odds) => {
                    self.opposite_odds = Some(odds);
                    self.step = Step::ValueOdds;
                    Reply::prompt(PROMPT_VALUE_ODDS, self.step)
                }
                Err(e) => Reply::error(odds_error_text(e), self.step),
            },

            Step::ValueOdds | Step::ValueOddsNoOpposite => match parse_odds(raw) {
                Ok(odds) => {
                    self.value_odds = Some(odds);
                    self.step = Step::Completed;
                    let slip = self.slip();
                    let advice = advise(&slip);
                    Reply::result(render_advice(&slip, &advice), self.step)
                }
                Err(e) => Reply::error(odds_error_text(e), self.step),
            },

            // A session that was never begun or has already delivered its
            // result accepts no further input.
            Step::Start | Step::Completed => Reply::error(ERR_NO_ACTIVE_SESSION, self.step),
        }
    }

    /// Build the odds slip once every field on the taken path is present.
    ///
    /// Only called at the terminal transition; the path invariants guarantee
    /// the unwrapped fields.
    fn slip(&self) -> OddsSlip {
        let fair_odds = self.fair_odds.expect("fair odds collected");
        let value_odds = self.value_odds.expect("value odds collected");

        if self.has_opposite_market.expect("market shape answered") {
            OddsSlip::WithOpposite {
                fair_odds,
                opposite_odds: self.opposite_odds.expect("opposite odds collected"),
                value_odds,
            }
        } else {
            OddsSlip::SingleSided {
                fair_odds,
                juice_free: self.is_juice_free.expect("juice question answered"),
                value_odds,
            }
        }
    }
}

fn odds_error_text(e: OddsParseError) -> &'static str {
    match e {
        OddsParseError::NotANumber => ERR_NOT_A_NUMBER,
        OddsParseError::OutOfRange => ERR_OUT_OF_RANGE,
    }
}
