pub mod card;
pub mod category;
pub mod rank;
pub mod suit;

pub use card::{Card, CardParseError};
pub use category::{HandCategory, UnknownCategory};
pub use rank::{RANK_SLOTS, RANK_SYMBOLS, Rank};
pub use suit::Suit;
