//! Тесты сравнения рук (crate::engine).
//!
//! Здесь мы проверяем именно часть "кто сильнее":
//! - категория решает независимо от кикеров;
//! - внутри категории решает ключ;
//! - ничья по масти;
//! - эталонная таблица пар;
//! - свойства порядка на случайных раздачах (рефлексивность, антисимметрия,
//!   транзитивность).

use std::cmp::Ordering;

use poker_hands::domain::Hand;
use poker_hands::engine::{compare_hand_texts, compare_hands, ordering_to_sign, winner, HandError};
use poker_hands::infra::{deal_hand, deal_hands, DeterministicRng, POKER_HANDS};

fn h(text: &str) -> Hand {
    Hand::parse(text).expect("valid hand in test")
}

fn cmp(a: &str, b: &str) -> Ordering {
    compare_hands(&h(a), &h(b))
}

//
// ============= Категория против категории ============
//

#[test]
fn any_flush_beats_any_straight() {
    // Самый слабый флеш против бродвея.
    assert_eq!(cmp("2H 3H 4H 5H 7H", "TD JC QH KS AS"), Ordering::Greater);
}

#[test]
fn wheel_straight_flush_beats_four_aces() {
    assert_eq!(cmp("AD 2D 3D 4D 5D", "AS AH AC AD KD"), Ordering::Greater);
}

#[test]
fn lowest_pair_beats_best_high_card() {
    assert_eq!(cmp("2S 2H 3D 4C 5S", "AS KH QD JC 9S"), Ordering::Greater);
}

//
// ============= Внутри категории ============
//

#[test]
fn ace_high_flush_beats_king_high_flush() {
    assert_eq!(cmp("AH 9H 7H 5H 3H", "KS QS JS 9S 7S"), Ordering::Greater);
}

#[test]
fn wheel_is_the_lowest_straight() {
    assert_eq!(cmp("AH 2H 3C 4S 5D", "2S 3D 4C 5H 6H"), Ordering::Less);
    assert_eq!(cmp("AH 2H 3C 4S 5D", "TD JC QH KS AS"), Ordering::Less);
}

#[test]
fn full_house_decided_by_triple_first() {
    // 333 + AA проигрывает 444 + 22.
    assert_eq!(cmp("3S 3H 3D AC AS", "4S 4H 4D 2C 2S"), Ordering::Less);
}

#[test]
fn two_pair_kicker_decides() {
    assert_eq!(cmp("KS KH 7D 7C AS", "KD KC 7S 7H QS"), Ordering::Greater);
}

#[test]
fn straight_flush_decided_by_top_card() {
    assert_eq!(cmp("3C 4C 5C 6C 7C", "2D 3D 4D 5D 6D"), Ordering::Greater);
    // Стальное колесо — младший стрит-флеш.
    assert_eq!(cmp("AD 2D 3D 4D 5D", "2H 3H 4H 5H 6H"), Ordering::Less);
}

#[test]
fn four_of_a_kind_kicker_decides() {
    assert_eq!(cmp("9S 9H 9D 9C AS", "9S 9H 9D 9C KS"), Ordering::Greater);
    assert_eq!(cmp("2S 2H 2D 2C AS", "3S 3H 3D 3C 4S"), Ordering::Less);
}

#[test]
fn full_house_pair_decides_on_equal_triple() {
    assert_eq!(cmp("QS QH QD 3C 3S", "QS QH QD 2C 2S"), Ordering::Greater);
}

#[test]
fn flush_decided_by_last_card() {
    assert_eq!(cmp("AH 9H 7H 5H 3H", "AS 9S 7S 5S 2S"), Ordering::Greater);
}

#[test]
fn straight_decided_by_top_card() {
    assert_eq!(cmp("3S 4H 5D 6C 7S", "2S 3H 4D 5C 6S"), Ordering::Greater);
}

#[test]
fn three_of_a_kind_kickers_decide() {
    assert_eq!(cmp("KS KH KD 4C 3S", "KS KH KD 4C 2S"), Ordering::Greater);
    assert_eq!(cmp("KS KH KD 5C 2S", "KS KH KD 4C 3S"), Ordering::Greater);
}

#[test]
fn two_pair_second_pair_decides() {
    assert_eq!(cmp("KS KH 8D 8C 2S", "KD KC 7S 7H AS"), Ordering::Greater);
}

#[test]
fn one_pair_kickers_decide() {
    assert_eq!(cmp("JS JH 9D 6C 4S", "JD JC 9S 6H 3S"), Ordering::Greater);
    assert_eq!(cmp("JS JH 9D 6C 4S", "QD QC 3S 4H 2S"), Ordering::Less);
}

#[test]
fn high_card_fifth_card_decides() {
    assert_eq!(cmp("AH KD 9C 7S 3H", "AS KC 9D 7H 2C"), Ordering::Greater);
}

#[test]
fn same_ranks_different_suits_tie() {
    assert_eq!(cmp("2S 3H 4H 5S 6C", "3D 4C 5H 6H 2S"), Ordering::Equal);
    assert_eq!(cmp("AH KH 8D 5C 3S", "AS KD 8C 5H 3D"), Ordering::Equal);
}

//
// ============= Эталонная таблица ============
//

#[test]
fn reference_fixtures_compare_as_expected() {
    for (i, fx) in POKER_HANDS.iter().enumerate() {
        let actual = compare_hand_texts(fx.left, fx.right).expect("fixture hands are valid");
        assert_eq!(
            actual, fx.expected,
            "fixture #{}: {} vs {}",
            i + 1,
            fx.left,
            fx.right
        );
    }
}

#[test]
fn fixtures_are_antisymmetric() {
    for fx in POKER_HANDS {
        let back = compare_hand_texts(fx.right, fx.left).unwrap();
        assert_eq!(back, fx.expected.reverse());
    }
}

//
// ============= Ошибки ============
//

#[test]
fn invalid_left_hand_error_wins() {
    assert_eq!(
        compare_hand_texts("AH 1C 5H 6H 7S", "6H 7S"),
        Err(HandError::InvalidCard("1C".to_string()))
    );
    assert_eq!(
        compare_hand_texts("2H 3H 4H 5H 6H", "6H 7S"),
        Err(HandError::InvalidHandSize(2))
    );
}

#[test]
fn sign_mapping() {
    assert_eq!(ordering_to_sign(Ordering::Less), -1);
    assert_eq!(ordering_to_sign(Ordering::Equal), 0);
    assert_eq!(ordering_to_sign(Ordering::Greater), 1);
}

//
// ============= winner ============
//

#[test]
fn winner_picks_strongest_and_first_on_tie() {
    let hands = [
        h("2S 3H 4H 5S 6C"),
        h("AH AC 5H 6H AS"),
        h("3D 4C 5H 6H 2S"),
    ];
    assert_eq!(winner(&hands), Some(0));
    assert_eq!(winner(&hands[1..]), Some(1));

    let tied = [h("2S 3H 4H 5S 6C"), h("3D 4C 5H 6H 2S")];
    assert_eq!(winner(&tied), Some(0));

    assert_eq!(winner(&[]), None);
}

//
// ============= Свойства порядка на случайных раздачах ============
//

const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

#[test]
fn comparison_is_reflexive_and_antisymmetric() {
    for seed in SEEDS {
        let mut rng = DeterministicRng::from_seed(seed);
        for _ in 0..200 {
            let hands = deal_hands(&mut rng, 2).unwrap();
            let (x, y) = (&hands[0], &hands[1]);

            assert_eq!(compare_hands(x, x), Ordering::Equal);
            assert_eq!(compare_hands(x, y), compare_hands(y, x).reverse());
        }
    }
}

#[test]
fn comparison_is_transitive() {
    for seed in SEEDS {
        let mut rng = DeterministicRng::from_seed(seed);
        for _ in 0..200 {
            let x = deal_hand(&mut rng).unwrap();
            let y = deal_hand(&mut rng).unwrap();
            let z = deal_hand(&mut rng).unwrap();

            let xy = compare_hands(&x, &y);
            let yz = compare_hands(&y, &z);
            let xz = compare_hands(&x, &z);

            if xy != Ordering::Less && yz != Ordering::Less {
                assert_ne!(xz, Ordering::Less, "{x} >= {y} >= {z} but {x} < {z}");
            }
            if xy != Ordering::Greater && yz != Ordering::Greater {
                assert_ne!(xz, Ordering::Greater, "{x} <= {y} <= {z} but {x} > {z}");
            }
        }
    }
}

/// Перестановка карт внутри руки не меняет результат сравнения.
#[test]
fn comparison_ignores_card_order() {
    let mut rng = DeterministicRng::from_seed(2024);
    for _ in 0..100 {
        let hand = deal_hand(&mut rng).unwrap();
        let mut cards = *hand.cards();
        cards.reverse();
        let reversed = Hand::new(cards).unwrap();
        assert_eq!(compare_hands(&hand, &reversed), Ordering::Equal);
    }
}
