use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Poker hand categories, declared weakest first so the derived ordering
/// follows hand strength. `MinPair` sits between `Pair` and `TwoPair`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    #[serde(rename = "nothing")]
    Nothing,
    #[serde(rename = "pair")]
    Pair,
    #[serde(rename = "minpair")]
    MinPair,
    #[serde(rename = "2pair")]
    TwoPair,
    #[serde(rename = "3ofakind")]
    ThreeOfAKind,
    #[serde(rename = "straight")]
    Straight,
    #[serde(rename = "flush")]
    Flush,
    #[serde(rename = "fullhouse")]
    FullHouse,
    #[serde(rename = "4ofakind")]
    FourOfAKind,
    #[serde(rename = "straightflush")]
    StraightFlush,
    #[serde(rename = "royalflush")]
    RoyalFlush,
    #[serde(rename = "5ofakind")]
    FiveOfAKind,
}

impl HandCategory {
    /// Order in which the classifier tries categories.
    pub const PRECEDENCE: [HandCategory; 12] = [
        HandCategory::FiveOfAKind,
        HandCategory::RoyalFlush,
        HandCategory::StraightFlush,
        HandCategory::FourOfAKind,
        HandCategory::FullHouse,
        HandCategory::Flush,
        HandCategory::Straight,
        HandCategory::ThreeOfAKind,
        HandCategory::TwoPair,
        HandCategory::MinPair,
        HandCategory::Pair,
        HandCategory::Nothing,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            HandCategory::Nothing => "nothing",
            HandCategory::Pair => "pair",
            HandCategory::MinPair => "minpair",
            HandCategory::TwoPair => "2pair",
            HandCategory::ThreeOfAKind => "3ofakind",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "fullhouse",
            HandCategory::FourOfAKind => "4ofakind",
            HandCategory::StraightFlush => "straightflush",
            HandCategory::RoyalFlush => "royalflush",
            HandCategory::FiveOfAKind => "5ofakind",
        }
    }

    /// Whether listing this category in `dontAllow` has any effect.
    /// Five of a kind always wins and `nothing` is the floor of the ladder.
    pub const fn is_suppressible(self) -> bool {
        !matches!(self, HandCategory::FiveOfAKind | HandCategory::Nothing)
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hand category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for HandCategory {
    type Err = UnknownCategory;

    /// Matches the exact label; `dontAllow` entries are compared verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HandCategory::PRECEDENCE
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
