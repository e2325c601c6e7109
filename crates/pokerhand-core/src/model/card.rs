use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Parses an exact card token such as `"2S"`, `"10h"` or `"AC"`.
    ///
    /// A leading `"10"` fixes the rank and leaves the remainder as the suit;
    /// otherwise the token must be exactly a rank symbol followed by a suit
    /// symbol. Returns `None` for anything else.
    pub fn parse(token: &str) -> Option<Self> {
        if let Some(suit) = token.strip_prefix("10") {
            return Some(Card::new(Rank::Ten, Suit::parse(suit)?));
        }

        let mut chars = token.chars();
        let rank = chars.next()?;
        let suit = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        let rank = Rank::parse(rank.encode_utf8(&mut [0; 4]))?;
        let suit = Suit::parse(suit.encode_utf8(&mut [0; 4]))?;
        Some(Card::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a card (expected rank 2-10/J/Q/K/A followed by suit C/D/H/S)")]
pub struct CardParseError(pub String);

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::parse(s).ok_or_else(|| CardParseError(s.to_string()))
    }
}
