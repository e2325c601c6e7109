use crate::error::EvaluationError;
use crate::model::{Card, RANK_SLOTS, Rank};
use crate::options::NormalizedOptions;
use tracing::debug;

/// Frequency tables for one hand.
///
/// Wild cards only bump `wild_cards`; they never appear in `suits` or `ranks`.
/// Every supplied card is counted, even past `cards_to_evaluate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tabulation {
    /// Natural cards per suit, indexed by `Suit::index`.
    pub suits: [usize; 4],
    /// Natural cards per rank slot: slot 0 is the ace-low mirror, slot 13 ace high.
    pub ranks: [usize; RANK_SLOTS],
    pub wild_cards: usize,
}

impl Tabulation {
    pub fn add_card(&mut self, card: Card, ace_can_be_low: bool) {
        self.suits[card.suit.index()] += 1;
        self.ranks[card.rank.slot()] += 1;
        if card.rank == Rank::Ace && ace_can_be_low {
            self.ranks[Rank::ACE_LOW_SLOT] += 1;
        }
    }

    pub fn add_wild(&mut self) {
        self.wild_cards += 1;
    }

    pub fn max_suit(&self) -> usize {
        self.suits.iter().copied().max().unwrap_or(0)
    }

    pub fn max_rank(&self) -> usize {
        self.ranks.iter().copied().max().unwrap_or(0)
    }

    /// Rank slots from two through ace high, leaving out the ace-low mirror.
    pub fn natural_slots(&self) -> &[usize] {
        &self.ranks[Rank::ACE_LOW_SLOT + 1..]
    }
}

/// Builds the frequency tables. A single unparseable token fails the hand.
pub fn tabulate<S: AsRef<str>>(
    cards: &[S],
    options: &NormalizedOptions,
) -> Result<Tabulation, EvaluationError> {
    let mut hand = Tabulation::default();

    for (index, token) in cards.iter().enumerate() {
        let token = token.as_ref();
        if options.wild_cards.contains(token) {
            hand.add_wild();
            continue;
        }

        let Some(card) = Card::parse(token) else {
            debug!(target: "pokerhand_core::eval", index, token, "rejecting hand");
            return Err(EvaluationError::InvalidCard {
                index,
                token: token.to_string(),
            });
        };
        hand.add_card(card, options.ace_can_be_low);
    }

    Ok(hand)
}
