//! Вспомогательные предикаты над рукой.
//!
//! Каждый — чистая функция, не зависящая от каскада классификации в
//! `evaluator`; их можно вызывать поодиночке.

use crate::domain::card::Rank;
use crate::domain::hand::{Hand, HAND_SIZE};

use super::lookup_tables::{detect_straight, mask_from_ranks};

/// Все пять карт одной масти.
pub fn is_flush(hand: &Hand) -> bool {
    hand.suit_counts().iter().any(|&c| c as usize == HAND_SIZE)
}

/// Старшая карта стрита (пятёрка для A2345), если рука — стрит.
pub fn straight_high(hand: &Hand) -> Option<Rank> {
    detect_straight(mask_from_ranks(&hand.ranks()))
}

pub fn is_straight(hand: &Hand) -> bool {
    straight_high(hand).is_some()
}

/// Какой-нибудь ранг встречается больше одного раза.
pub fn has_pair(hand: &Hand) -> bool {
    hand.rank_counts().iter().any(|&c| c > 1)
}

/// Унаследованная «сумма пар».
///
/// Каждая группа из двух и более карт одного ранга добавляет свой размер;
/// каре вместо этого выставляет итог в 6. Получается:
/// нет пары = 0, пара = 2, сет = 3, две пары = 4, фулл-хаус = 5, каре = 6.
pub fn pair_size(hand: &Hand) -> u8 {
    hand.rank_counts()
        .into_iter()
        .filter(|&c| c > 1)
        .fold(0, |total, c| if c == 4 { 6 } else { total + c })
}

/// Максимальное числовое значение в руке (туз всегда 14).
pub fn high_card(hand: &Hand) -> u8 {
    hand.values().into_iter().fold(u8::MIN, u8::max)
}

/// Минимальное числовое значение в руке (туз всегда 14).
pub fn low_card(hand: &Hand) -> u8 {
    hand.values().into_iter().fold(u8::MAX, u8::min)
}
