//! Kellycalc - Conversational Kelly stake calculator
//!
//! This library provides:
//! - A question-and-answer dialogue that collects decimal odds for a wager
//! - De-vigging and probability estimation from the collected quotes
//! - Conservative (eighth-Kelly) stake sizing with a minimum-value floor
//!
//! The dialogue core is transport-agnostic: callers (the bundled HTTP API
//! and CLI, or anything else) own session storage and message delivery and
//! feed raw text in one turn at a time.
//!
//! # Example
//!
//! ```
//! use kellycalc::core::dialogue::{ReplyKind, Session};
//!
//! let (mut session, first_question) = Session::begin();
//! assert_eq!(first_question.kind, ReplyKind::Prompt);
//!
//! session.submit("yes"); // the market has an opposite side
//! session.submit("1.66"); // fair odds
//! session.submit("2.20"); // opposite odds
//! let result = session.submit("2.50"); // value odds
//!
//! assert_eq!(result.kind, ReplyKind::Result);
//! assert!(session.is_complete());
//! ```

pub mod core;
pub mod models;

// API-specific modules (only available with api feature)
#[cfg(feature = "api")]
pub mod error;

// Re-export commonly used types
pub use crate::core::dialogue::{Reply, ReplyKind, Session, Step};
pub use crate::core::kelly::{advise, render_advice, OddsSlip, StakeAdvice};
