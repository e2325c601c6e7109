//! Caller-facing evaluation options and their normalized form.
//!
//! `EvaluationOptions` mirrors what a caller (or a JSON/YAML document) supplies;
//! every field may be left out. `NormalizedOptions` is what the tabulator and
//! classifier consume: defaults filled in, wild-card ranks expanded into exact
//! card tokens and the hand size clamped. Entries that cannot be used are
//! dropped and reported back as [`IgnoredOption`]s rather than rejected.

use crate::model::{Card, HandCategory, Rank, Suit};
use core::fmt;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Token that is always wild, whatever the caller configures.
pub const JOKER: &str = "JOKER";

/// Largest hand the category thresholds are measured against.
pub const MAX_CARDS_TO_EVALUATE: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvaluationOptions {
    /// Let an ace also fill the slot below the two.
    pub ace_can_be_low: bool,
    /// Extra wild cards: exact cards (`"JH"`) or bare ranks (`"2"` = all four twos).
    pub wild_cards: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards_to_evaluate: Option<usize>,
    /// Category labels the classifier must skip.
    pub dont_allow: Vec<String>,
    /// Pairs at or above this rank are reported as `minpair`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_pair: Option<String>,
}

impl EvaluationOptions {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Upper-cased exact card tokens that count as wild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildCardSet {
    tokens: BTreeSet<String>,
}

impl Default for WildCardSet {
    fn default() -> Self {
        let mut tokens = BTreeSet::new();
        tokens.insert(JOKER.to_string());
        Self { tokens }
    }
}

impl WildCardSet {
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(&token.to_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Adds a caller entry. Returns `false` when it is neither an exact card
    /// nor a rank.
    fn expand(&mut self, entry: &str) -> bool {
        let upper = entry.to_ascii_uppercase();
        if upper == JOKER {
            return true;
        }

        if Card::parse(&upper).is_some() {
            self.tokens.insert(upper);
            return true;
        }

        match Rank::parse(&upper) {
            Some(rank) => {
                for suit in Suit::ALL {
                    self.tokens.insert(format!("{rank}{suit}"));
                }
                true
            }
            None => false,
        }
    }
}

/// An option entry that normalization could not use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum IgnoredOption {
    WildCard(String),
    MinPair(String),
    DontAllow(String),
    CardsToEvaluate(usize),
}

impl fmt::Display for IgnoredOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoredOption::WildCard(entry) => {
                write!(f, "wildCards entry '{entry}' is neither a card nor a rank")
            }
            IgnoredOption::MinPair(entry) => write!(f, "minPair '{entry}' is not a rank"),
            IgnoredOption::DontAllow(entry) => {
                write!(f, "dontAllow entry '{entry}' is not a hand category")
            }
            IgnoredOption::CardsToEvaluate(value) => {
                write!(f, "cardsToEvaluate {value} is below 1")
            }
        }
    }
}

/// Options for a single evaluation, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedOptions {
    pub ace_can_be_low: bool,
    pub wild_cards: WildCardSet,
    pub cards_to_evaluate: usize,
    pub dont_allow: BTreeSet<HandCategory>,
    pub min_pair: Option<Rank>,
}

impl NormalizedOptions {
    pub fn allows(&self, category: HandCategory) -> bool {
        !category.is_suppressible() || !self.dont_allow.contains(&category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub options: NormalizedOptions,
    pub ignored: Vec<IgnoredOption>,
}

/// Merges caller options with the defaults for a hand of `card_count` cards.
pub fn normalize(card_count: usize, options: Option<&EvaluationOptions>) -> Normalized {
    let defaults = EvaluationOptions::default();
    let raw = options.unwrap_or(&defaults);
    let mut ignored = Vec::new();

    let mut wild_cards = WildCardSet::default();
    for entry in &raw.wild_cards {
        if !wild_cards.expand(entry) {
            ignored.push(IgnoredOption::WildCard(entry.clone()));
        }
    }

    let mut dont_allow = BTreeSet::new();
    for entry in &raw.dont_allow {
        match entry.parse::<HandCategory>() {
            Ok(category) => {
                dont_allow.insert(category);
            }
            Err(_) => ignored.push(IgnoredOption::DontAllow(entry.clone())),
        }
    }

    let min_pair = raw.min_pair.as_deref().and_then(|entry| {
        let rank = Rank::parse(entry);
        if rank.is_none() {
            ignored.push(IgnoredOption::MinPair(entry.to_string()));
        }
        rank
    });

    let mut cards_to_evaluate = match raw.cards_to_evaluate {
        Some(0) => {
            ignored.push(IgnoredOption::CardsToEvaluate(0));
            MAX_CARDS_TO_EVALUATE
        }
        Some(value) => value,
        None => MAX_CARDS_TO_EVALUATE,
    };
    if cards_to_evaluate > card_count {
        cards_to_evaluate = card_count;
    }
    if cards_to_evaluate > MAX_CARDS_TO_EVALUATE {
        cards_to_evaluate = MAX_CARDS_TO_EVALUATE;
    }

    for entry in &ignored {
        debug!(target: "pokerhand_core::options", %entry, "dropping option entry");
    }

    Normalized {
        options: NormalizedOptions {
            ace_can_be_low: raw.ace_can_be_low,
            wild_cards,
            cards_to_evaluate,
            dont_allow,
            min_pair,
        },
        ignored,
    }
}
