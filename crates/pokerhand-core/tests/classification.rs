use pokerhand_core::{
    ERROR_LABEL, EvaluationError, EvaluationOptions, HandCategory, evaluate_hand,
    evaluate_hand_label,
};

fn label(cards: &[&str]) -> &'static str {
    evaluate_hand_label(cards, None)
}

fn label_with(cards: &[&str], options: EvaluationOptions) -> &'static str {
    evaluate_hand_label(cards, Some(&options))
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn natural_categories() {
    let cases: [(&[&str], &str); 9] = [
        (&["10C", "JC", "QC", "KC", "AC"], "royalflush"),
        (&["5H", "6H", "7H", "8H", "9H"], "straightflush"),
        (&["2C", "2D", "2H", "2S", "5C"], "4ofakind"),
        (&["3C", "3D", "3H", "9S", "9C"], "fullhouse"),
        (&["2C", "5C", "9C", "JC", "KC"], "flush"),
        (&["2C", "3D", "4H", "5S", "6C"], "straight"),
        (&["7C", "7D", "7H", "KS", "2C"], "3ofakind"),
        (&["2C", "2D", "3H", "3S", "4C"], "2pair"),
        (&["2C", "3D", "4H", "5S", "7C"], "nothing"),
    ];
    for (cards, expected) in cases {
        assert_eq!(label(cards), expected, "{cards:?}");
    }
    assert_eq!(label(&["QC", "QD", "4H", "5S", "7C"]), "pair");
}

#[test]
fn ace_low_straight_needs_the_option() {
    let wheel = ["AC", "2D", "3H", "4S", "5C"];
    assert_eq!(label(&wheel), "nothing");
    assert_eq!(
        label_with(
            &wheel,
            EvaluationOptions {
                ace_can_be_low: true,
                ..EvaluationOptions::default()
            }
        ),
        "straight"
    );
    assert_eq!(
        label_with(
            &["2C", "3D", "4H", "5S", "6C"],
            EvaluationOptions {
                ace_can_be_low: false,
                ..EvaluationOptions::default()
            }
        ),
        "straight"
    );
}

#[test]
fn low_ace_steel_wheel_is_a_straight_flush() {
    let options = EvaluationOptions {
        ace_can_be_low: true,
        ..EvaluationOptions::default()
    };
    assert_eq!(
        label_with(&["AD", "2D", "3D", "4D", "5D"], options),
        "straightflush"
    );
}

#[test]
fn pair_of_aces_stays_a_pair_when_aces_play_low() {
    let options = EvaluationOptions {
        ace_can_be_low: true,
        ..EvaluationOptions::default()
    };
    assert_eq!(label_with(&["AC", "AD", "3H", "7S", "9C"], options), "pair");
}

#[test]
fn suppressed_categories_fall_through() {
    let straight = ["2C", "3D", "4H", "5S", "6C"];
    assert_eq!(
        label_with(
            &straight,
            EvaluationOptions {
                dont_allow: strings(&["straight"]),
                ..EvaluationOptions::default()
            }
        ),
        "nothing"
    );

    let full_house = ["3C", "3D", "3H", "9S", "9C"];
    assert_eq!(
        label_with(
            &full_house,
            EvaluationOptions {
                dont_allow: strings(&["fullhouse"]),
                ..EvaluationOptions::default()
            }
        ),
        "3ofakind"
    );

    let royal = ["10C", "JC", "QC", "KC", "AC"];
    assert_eq!(
        label_with(
            &royal,
            EvaluationOptions {
                dont_allow: strings(&["royalflush"]),
                ..EvaluationOptions::default()
            }
        ),
        "straightflush"
    );
    assert_eq!(
        label_with(
            &royal,
            EvaluationOptions {
                dont_allow: strings(&["royalflush", "straightflush", "flush"]),
                ..EvaluationOptions::default()
            }
        ),
        "straight"
    );
}

#[test]
fn five_of_a_kind_ignores_suppression() {
    let options = EvaluationOptions {
        dont_allow: strings(&["5ofakind"]),
        ..EvaluationOptions::default()
    };
    assert_eq!(
        label_with(&["JOKER", "2C", "2D", "2H", "2S"], options),
        "5ofakind"
    );
}

#[test]
fn joker_completes_hands() {
    assert_eq!(label(&["JOKER", "2D", "2H", "2S", "5C"]), "4ofakind");
    assert_eq!(label(&["JOKER", "3D", "3H", "9S", "9C"]), "fullhouse");
    assert_eq!(label(&["joker", "7D", "7H", "KS", "2C"]), "3ofakind");
    assert_eq!(label(&["JOKER", "QD", "4H", "5S", "7C"]), "pair");
    assert_eq!(label(&["5C", "6D", "JOKER", "8H", "9S"]), "straight");
    assert_eq!(label(&["10C", "JC", "QC", "KC", "JOKER"]), "royalflush");
    assert_eq!(label(&["2H", "7H", "9H", "KH", "JOKER"]), "flush");
}

#[test]
fn configured_wild_ranks_and_cards() {
    let deuces = EvaluationOptions {
        wild_cards: strings(&["2"]),
        ..EvaluationOptions::default()
    };
    assert_eq!(
        label_with(&["2C", "KD", "KH", "KS", "9C"], deuces.clone()),
        "4ofakind"
    );
    assert_eq!(
        label_with(&["2C", "2d", "KH", "KS", "KC"], deuces),
        "5ofakind"
    );

    let one_eyed_jack = EvaluationOptions {
        wild_cards: strings(&["jh"]),
        ..EvaluationOptions::default()
    };
    assert_eq!(
        label_with(&["JH", "4D", "4H", "9S", "KC"], one_eyed_jack.clone()),
        "3ofakind"
    );
    assert_eq!(
        label_with(&["JD", "4D", "4H", "9S", "KC"], one_eyed_jack),
        "pair"
    );
}

#[test]
fn short_hands_use_their_own_size() {
    assert_eq!(label(&["QC", "QD", "5H"]), "pair");
    assert_eq!(label(&["QC", "QD", "QH"]), "3ofakind");
    assert_eq!(label(&["2C", "3C", "4C"]), "straightflush");

    let three_of_five = EvaluationOptions {
        cards_to_evaluate: Some(3),
        ..EvaluationOptions::default()
    };
    assert_eq!(
        label_with(&["3C", "3D", "3H", "9S", "9C"], three_of_five),
        "3ofakind"
    );
}

#[test]
fn extra_cards_still_count() {
    assert_eq!(label(&["2C", "3C", "4C", "5C", "9C", "KD"]), "flush");
}

#[test]
fn min_pair_promotes_high_pairs() {
    let jacks_or_better = EvaluationOptions {
        min_pair: Some("J".to_string()),
        ..EvaluationOptions::default()
    };
    assert_eq!(
        label_with(&["JC", "JD", "2H", "5S", "9C"], jacks_or_better.clone()),
        "minpair"
    );
    assert_eq!(
        label_with(&["10C", "10D", "2H", "5S", "9C"], jacks_or_better.clone()),
        "pair"
    );
    assert_eq!(
        label_with(&["JOKER", "KD", "2H", "5S", "9C"], jacks_or_better.clone()),
        "minpair"
    );
    assert_eq!(
        label_with(&["JOKER", "10D", "2H", "5S", "9C"], jacks_or_better),
        "pair"
    );
}

#[test]
fn min_pair_respects_suppression() {
    let options = EvaluationOptions {
        min_pair: Some("J".to_string()),
        dont_allow: strings(&["minpair"]),
        ..EvaluationOptions::default()
    };
    assert_eq!(label_with(&["JC", "JD", "2H", "5S", "9C"], options), "pair");

    let options = EvaluationOptions {
        min_pair: Some("J".to_string()),
        dont_allow: strings(&["pair"]),
        ..EvaluationOptions::default()
    };
    assert_eq!(label_with(&["JC", "JD", "2H", "5S", "9C"], options), "nothing");
}

#[test]
fn malformed_token_is_an_error() {
    let cards = ["2X", "3D", "4H", "5S", "6C"];
    assert_eq!(label(&cards), ERROR_LABEL);
    assert_eq!(
        evaluate_hand(&cards, None),
        Err(EvaluationError::InvalidCard {
            index: 0,
            token: "2X".to_string()
        })
    );
    assert_eq!(label(&["2C", "3D", "K", "5S", "6C"]), ERROR_LABEL);
}

#[test]
fn repeated_calls_agree() {
    let cards = ["JOKER", "3D", "3H", "9S", "9C"];
    let first = evaluate_hand(&cards, None);
    let second = evaluate_hand(&cards, None);
    assert_eq!(first, second);
    assert_eq!(first, Ok(HandCategory::FullHouse));
}
