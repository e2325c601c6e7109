//! Poker hand classification with wild cards, low aces, short hands and
//! suppressible categories.
//!
//! ```
//! use pokerhand_core::{EvaluationOptions, HandCategory, evaluate_hand};
//!
//! let category = evaluate_hand(&["JOKER", "2D", "2H", "2S", "5C"], None);
//! assert_eq!(category, Ok(HandCategory::FourOfAKind));
//!
//! let options = EvaluationOptions {
//!     dont_allow: vec!["straight".to_string()],
//!     ..EvaluationOptions::default()
//! };
//! let category = evaluate_hand(&["2C", "3D", "4H", "5S", "6C"], Some(&options));
//! assert_eq!(category, Ok(HandCategory::Nothing));
//! ```

pub mod error;
pub mod eval;
pub mod model;
pub mod options;

pub use error::EvaluationError;
pub use eval::{ERROR_LABEL, Evaluation, evaluate, evaluate_hand, evaluate_hand_label};
pub use model::{Card, HandCategory, Rank, Suit};
pub use options::{EvaluationOptions, IgnoredOption, NormalizedOptions, normalize};
