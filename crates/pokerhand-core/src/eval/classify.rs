use crate::eval::tabulate::Tabulation;
use crate::model::{HandCategory, RANK_SLOTS, Rank};
use crate::options::NormalizedOptions;
use tracing::{Level, event};

/// Rank value reported for a straight that runs through the ace-high slot.
pub const ACE_HIGH: u8 = RANK_SLOTS as u8;

/// Derived signals the category tests are phrased in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandSignals {
    pub is_flush: bool,
    /// Rank value of the top card of the straight, if any. A value of 1
    /// stands for an ace played low.
    pub straight_high: Option<u8>,
    /// Largest rank count plus wild cards, capped at the hand size.
    pub max_like_cards: usize,
}

impl HandSignals {
    pub fn compute(hand: &Tabulation, cards_to_evaluate: usize) -> Self {
        Self {
            is_flush: is_flush(hand, cards_to_evaluate),
            straight_high: straight_high_card(hand, cards_to_evaluate),
            max_like_cards: max_like_cards(hand, cards_to_evaluate),
        }
    }
}

pub fn is_flush(hand: &Tabulation, cards_to_evaluate: usize) -> bool {
    hand.max_suit() + hand.wild_cards >= cards_to_evaluate
}

/// Scans the rank slots low to high for a run of `cards_to_evaluate`.
///
/// Wild cards bridge empty slots once a run has started; the budget refills
/// whenever a run breaks. A run still open at the ace-high slot (plus any
/// unused wild cards) counts as ace high.
pub fn straight_high_card(hand: &Tabulation, cards_to_evaluate: usize) -> Option<u8> {
    let mut high = None;
    let mut run = 0;
    let mut wild_budget = hand.wild_cards;

    for (index, &count) in hand.ranks.iter().enumerate() {
        if count > 0 {
            run += 1;
        } else if run > 0 && wild_budget > 0 {
            wild_budget -= 1;
            run += 1;
        } else {
            // slot `index` is rank `index + 1`, so the run topped out at rank `index`
            if run >= cards_to_evaluate {
                high = Some(index as u8);
            }
            run = 0;
            wild_budget = hand.wild_cards;
        }
    }

    if run + wild_budget >= cards_to_evaluate {
        high = Some(ACE_HIGH);
    }

    high
}

pub fn max_like_cards(hand: &Tabulation, cards_to_evaluate: usize) -> usize {
    (hand.max_rank() + hand.wild_cards).min(cards_to_evaluate)
}

/// Natural three of a kind plus natural pair, or (with wild cards) two
/// natural pairs. Three or more wild cards never reach this test: they
/// already made four of a kind.
pub fn is_full_house(hand: &Tabulation, cards_to_evaluate: usize) -> bool {
    if cards_to_evaluate < 5 {
        return false;
    }

    let slots = hand.natural_slots();
    if slots.contains(&3) {
        slots.contains(&2)
    } else {
        hand.wild_cards > 0 && is_two_pair(hand)
    }
}

/// Two natural pairs. Wild cards would have produced something stronger.
pub fn is_two_pair(hand: &Tabulation) -> bool {
    hand.natural_slots().iter().filter(|&&count| count == 2).count() >= 2
}

/// Rank of the pair in a one-pair hand: the highest natural pair, or with a
/// wild card, the highest natural card it pairs with.
pub fn pair_rank(hand: &Tabulation) -> Option<Rank> {
    let slots = &hand.ranks;
    let natural = (Rank::ACE_LOW_SLOT + 1..RANK_SLOTS)
        .rev()
        .find(|&slot| slots[slot] == 2);

    let slot = match natural {
        Some(slot) => slot,
        None if hand.wild_cards > 0 => (Rank::ACE_LOW_SLOT + 1..RANK_SLOTS)
            .rev()
            .find(|&slot| slots[slot] > 0)?,
        None => return None,
    };

    Rank::from_value(slot as u8 + 1)
}

fn satisfies(
    category: HandCategory,
    hand: &Tabulation,
    signals: &HandSignals,
    options: &NormalizedOptions,
) -> bool {
    let cards = options.cards_to_evaluate;
    match category {
        HandCategory::FiveOfAKind => signals.max_like_cards == 5,
        HandCategory::RoyalFlush => signals.is_flush && signals.straight_high == Some(ACE_HIGH),
        HandCategory::StraightFlush => signals.is_flush && signals.straight_high.is_some(),
        HandCategory::FourOfAKind => signals.max_like_cards == 4,
        HandCategory::FullHouse => is_full_house(hand, cards),
        HandCategory::Flush => signals.is_flush,
        HandCategory::Straight => signals.straight_high.is_some(),
        HandCategory::ThreeOfAKind => signals.max_like_cards == 3,
        HandCategory::TwoPair => is_two_pair(hand),
        // a suppressed `pair` takes `minpair` down with it
        HandCategory::MinPair => {
            signals.max_like_cards == 2
                && options.allows(HandCategory::Pair)
                && match (options.min_pair, pair_rank(hand)) {
                    (Some(minimum), Some(rank)) => rank >= minimum,
                    _ => false,
                }
        }
        HandCategory::Pair => signals.max_like_cards == 2,
        HandCategory::Nothing => true,
    }
}

/// Walks the precedence ladder and returns the first category the hand
/// satisfies that the options do not suppress.
pub fn classify(hand: &Tabulation, options: &NormalizedOptions) -> HandCategory {
    let signals = HandSignals::compute(hand, options.cards_to_evaluate);
    let category = HandCategory::PRECEDENCE
        .iter()
        .copied()
        .find(|&category| options.allows(category) && satisfies(category, hand, &signals, options))
        .unwrap_or(HandCategory::Nothing);

    event!(
        target: "pokerhand_core::eval",
        Level::TRACE,
        is_flush = signals.is_flush,
        straight_high = ?signals.straight_high,
        max_like_cards = signals.max_like_cards,
        wild_cards = hand.wild_cards,
        cards_to_evaluate = options.cards_to_evaluate,
        category = %category
    );

    category
}
