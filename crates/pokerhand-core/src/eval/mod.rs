//! Hand evaluation: normalize options, tabulate the cards, classify.
//!
//! - `tabulate`: token parsing into suit/rank frequency tables.
//! - `classify`: derived signals and the category precedence ladder.

pub mod classify;
pub mod tabulate;

pub use classify::{HandSignals, classify};
pub use tabulate::{Tabulation, tabulate};

use crate::error::EvaluationError;
use crate::model::HandCategory;
use crate::options::{EvaluationOptions, IgnoredOption, normalize};

/// Label returned by [`evaluate_hand_label`] when the hand cannot be read.
pub const ERROR_LABEL: &str = "error";

/// Outcome of one evaluation together with the option entries that were dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub outcome: Result<HandCategory, EvaluationError>,
    pub ignored: Vec<IgnoredOption>,
}

impl Evaluation {
    pub fn label(&self) -> &'static str {
        match &self.outcome {
            Ok(category) => category.as_str(),
            Err(_) => ERROR_LABEL,
        }
    }
}

pub fn evaluate<S: AsRef<str>>(cards: &[S], options: Option<&EvaluationOptions>) -> Evaluation {
    let normalized = normalize(cards.len(), options);
    let outcome = if cards.is_empty() {
        Err(EvaluationError::EmptyHand)
    } else {
        tabulate(cards, &normalized.options).map(|hand| classify(&hand, &normalized.options))
    };

    Evaluation {
        outcome,
        ignored: normalized.ignored,
    }
}

/// Classifies a hand into its strongest category not excluded by `options`.
pub fn evaluate_hand<S: AsRef<str>>(
    cards: &[S],
    options: Option<&EvaluationOptions>,
) -> Result<HandCategory, EvaluationError> {
    evaluate(cards, options).outcome
}

/// String form of [`evaluate_hand`]: the category label, or `"error"`.
pub fn evaluate_hand_label<S: AsRef<str>>(
    cards: &[S],
    options: Option<&EvaluationOptions>,
) -> &'static str {
    evaluate(cards, options).label()
}
