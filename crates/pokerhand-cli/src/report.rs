use pokerhand_core::{Evaluation, EvaluationOptions, IgnoredOption, evaluate};
use serde::Serialize;
use tracing::{info, warn};

/// One evaluated hand, as printed by the CLI.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HandReport {
    pub cards: Vec<String>,
    pub category: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored: Vec<IgnoredOption>,
}

impl HandReport {
    pub fn new(cards: &[String], evaluation: Evaluation) -> Self {
        Self {
            cards: cards.to_vec(),
            category: evaluation.label(),
            error: evaluation.outcome.err().map(|err| err.to_string()),
            ignored: evaluation.ignored,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_text(&self) -> String {
        format!("{}\t{}", self.category, self.cards.join(" "))
    }
}

/// Evaluates every hand with the same options.
pub fn evaluate_hands(hands: &[Vec<String>], options: &EvaluationOptions) -> Vec<HandReport> {
    hands
        .iter()
        .map(|cards| {
            let report = HandReport::new(cards, evaluate(cards, Some(options)));
            match report.error.as_deref() {
                Some(error) => warn!(cards = ?report.cards, error, "hand rejected"),
                None => info!(cards = ?report.cards, category = report.category, "hand classified"),
            }
            report
        })
        .collect()
}
