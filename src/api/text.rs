//! Строковый фасад: операции над текстом руки вида `"2H 3H 4H 5H 6H"`.
//!
//! Каждая функция сначала валидирует вход через `Hand::parse`, так что
//! битая строка всегда даёт `HandError`, а не случайный ответ.

use crate::domain::card::Rank;
use crate::domain::hand::Hand;
use crate::engine::{compare_hand_texts, ordering_to_sign, HandError};
use crate::eval::stats;

/// `Ok(true)` для валидной руки, иначе ошибка. `Ok(false)` не возвращается.
pub fn is_valid_hand(text: &str) -> Result<bool, HandError> {
    Hand::parse(text).map(|_| true)
}

pub fn has_a_pair(text: &str) -> Result<bool, HandError> {
    Ok(stats::has_pair(&Hand::parse(text)?))
}

pub fn get_pair_size(text: &str) -> Result<u8, HandError> {
    Ok(stats::pair_size(&Hand::parse(text)?))
}

/// Символы рангов в порядке ввода.
pub fn get_hand_values(text: &str) -> Result<Vec<char>, HandError> {
    let hand = Hand::parse(text)?;
    Ok(hand.ranks().iter().map(|r| r.symbol()).collect())
}

/// Символы мастей в порядке ввода.
pub fn get_hand_suits(text: &str) -> Result<Vec<char>, HandError> {
    let hand = Hand::parse(text)?;
    Ok(hand.suits().iter().map(|s| s.symbol()).collect())
}

pub fn is_a_flush(text: &str) -> Result<bool, HandError> {
    Ok(stats::is_flush(&Hand::parse(text)?))
}

/// Включая младший стрит A2345.
pub fn is_a_straight(text: &str) -> Result<bool, HandError> {
    Ok(stats::is_straight(&Hand::parse(text)?))
}

/// Числовое значение символа ранга: "2" → 2 … "A" → 14.
pub fn get_hand_values_numeric_value(symbol: &str) -> Result<u8, HandError> {
    let invalid = || HandError::InvalidCard(symbol.to_string());

    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Rank::from_symbol(ch).map(Rank::value).ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

pub fn get_high_card(text: &str) -> Result<u8, HandError> {
    Ok(stats::high_card(&Hand::parse(text)?))
}

pub fn get_low_card(text: &str) -> Result<u8, HandError> {
    Ok(stats::low_card(&Hand::parse(text)?))
}

/// -1, если первая рука слабее, 0 при ничьей, 1 если сильнее.
pub fn compare_poker_hands(hand_a: &str, hand_b: &str) -> Result<i8, HandError> {
    compare_hand_texts(hand_a, hand_b).map(ordering_to_sign)
}
