use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::errors::HandError;

/// Размер руки — всегда ровно пять карт.
pub const HAND_SIZE: usize = 5;

/// Разделитель токенов во входной строке. Делим строго по одиночному пробелу:
/// двойной пробел даёт пустой токен и, как следствие, неверный размер руки.
pub const TOKEN_SEPARATOR: char = ' ';

/// Провалидированная рука из пяти карт в порядке ввода.
///
/// Порядок карт сохраняется только для вывода (`values`, `suits`, `Display`);
/// оценка руки работает с ней как с мультимножеством.
///
/// В serde рука представлена своей текстовой формой (`"2H 3H 4H 5H 6H"`),
/// так что десериализация проходит ту же валидацию, что и `Hand::parse`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Собрать руку из готовых карт.
    ///
    /// Единственная проверка уровня руки: ни один ранг не должен встречаться
    /// пять раз. Повторы одной и той же карты (ранг + масть) не отсекаются.
    pub fn new(cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        let hand = Hand { cards };
        if hand.rank_counts().iter().any(|&c| c as usize == HAND_SIZE) {
            return Err(HandError::InvalidHand(hand.to_string()));
        }
        Ok(hand)
    }

    /// Разобрать строку вида `"2H 3H 4H 5H 6H"`.
    ///
    /// Сначала проверяется число токенов, затем каждая карта по порядку;
    /// возвращается первая найденная ошибка.
    pub fn parse(text: &str) -> Result<Self, HandError> {
        let tokens: Vec<&str> = text.split(TOKEN_SEPARATOR).collect();
        if tokens.len() != HAND_SIZE {
            return Err(HandError::InvalidHandSize(tokens.len()));
        }

        let mut cards = [Card::new(Rank::Two, Suit::Spades); HAND_SIZE];
        for (slot, token) in cards.iter_mut().zip(tokens) {
            *slot = token.parse()?;
        }

        let hand = Hand::new(cards)?;
        log::trace!("parsed hand {hand}");
        Ok(hand)
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn ranks(&self) -> [Rank; HAND_SIZE] {
        self.cards.map(|c| c.rank)
    }

    pub fn suits(&self) -> [Suit; HAND_SIZE] {
        self.cards.map(|c| c.suit)
    }

    /// Числовые значения рангов в порядке ввода (туз = 14).
    pub fn values(&self) -> [u8; HAND_SIZE] {
        self.cards.map(|c| c.rank.value())
    }

    /// Счётчик рангов, индекс = числовое значение ранга (0 и 1 не используются).
    pub fn rank_counts(&self) -> [u8; 15] {
        let mut counts = [0u8; 15];
        for card in &self.cards {
            counts[card.rank.value() as usize] += 1;
        }
        counts
    }

    /// Счётчик мастей, индекс = `Suit::index`.
    pub fn suit_counts(&self) -> [u8; 4] {
        let mut counts = [0u8; 4];
        for card in &self.cards {
            counts[card.suit.index()] += 1;
        }
        counts
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, "{TOKEN_SEPARATOR}")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hand::parse(s)
    }
}

impl TryFrom<String> for Hand {
    type Error = HandError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Hand::parse(&value)
    }
}

impl From<Hand> for String {
    fn from(hand: Hand) -> Self {
        hand.to_string()
    }
}
