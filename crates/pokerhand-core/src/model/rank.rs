use core::fmt;

/// Rank symbols in table order. Position + 1 is the rank value, so `"1"`
/// occupies the ace-low slot and is never produced by the parser.
pub const RANK_SYMBOLS: [&str; 14] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];

/// Number of slots in a rank frequency table (ace-low through ace-high).
pub const RANK_SLOTS: usize = RANK_SYMBOLS.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ORDERED: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Slot holding aces when they are allowed to play low.
    pub const ACE_LOW_SLOT: usize = 0;

    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            14 => Some(Rank::Ace),
            _ => None,
        }
    }

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Index of this rank in a frequency table (`value - 1`).
    pub const fn slot(self) -> usize {
        self as usize - 1
    }

    /// Parses a rank token: `"10"` or a single symbol from [`RANK_SYMBOLS`],
    /// case-insensitively. The `"1"` placeholder is rejected.
    pub fn parse(token: &str) -> Option<Self> {
        if token == "10" {
            return Some(Rank::Ten);
        }

        let mut chars = token.chars();
        let symbol = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        let symbol = symbol.to_ascii_uppercase();
        let position = RANK_SYMBOLS
            .iter()
            .position(|candidate| candidate.len() == 1 && candidate.starts_with(symbol))?;
        Rank::from_value(position as u8 + 1)
    }

    pub const fn symbol(self) -> &'static str {
        RANK_SYMBOLS[self.slot()]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::Rank;

    #[test]
    fn from_value_maps() {
        assert_eq!(Rank::from_value(11), Some(Rank::Jack));
        assert_eq!(Rank::from_value(1), None);
    }

    #[test]
    fn display_matches_symbols() {
        assert_eq!(Rank::Queen.to_string(), "Q");
        assert_eq!(Rank::Ten.to_string(), "10");
    }

    #[test]
    fn parse_accepts_symbols_case_insensitively() {
        assert_eq!(Rank::parse("10"), Some(Rank::Ten));
        assert_eq!(Rank::parse("k"), Some(Rank::King));
        assert_eq!(Rank::parse("A"), Some(Rank::Ace));
        assert_eq!(Rank::parse("2"), Some(Rank::Two));
    }

    #[test]
    fn parse_rejects_placeholder_and_garbage() {
        assert_eq!(Rank::parse("1"), None);
        assert_eq!(Rank::parse("T"), None);
        assert_eq!(Rank::parse(""), None);
        assert_eq!(Rank::parse("KK"), None);
        assert_eq!(Rank::parse("11"), None);
    }

    #[test]
    fn slots_run_from_two_to_ace_high() {
        assert_eq!(Rank::Two.slot(), 1);
        assert_eq!(Rank::Ace.slot(), 13);
    }
}
