use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::hand::{Hand, HAND_SIZE};
use crate::engine::errors::HandError;
use crate::infra::rng::RandomSource;

/// Колода карт — упорядоченный список, берём сверху (с конца вектора).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода: для каждой масти `S H D C` ранги 2..A.
    pub fn standard_52() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
            .collect();
        Deck { cards }
    }

    /// Свежая колода, перемешанная переданным источником случайности.
    pub fn shuffled(rng: &mut impl RandomSource) -> Self {
        let mut deck = Self::standard_52();
        rng.shuffle(&mut deck.cards);
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять n карт сверху (меньше, если колода кончилась).
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let keep = self.cards.len().saturating_sub(n);
        let mut taken = self.cards.split_off(keep);
        taken.reverse();
        taken
    }

    /// Сдать руку из пяти верхних карт.
    ///
    /// Если в колоде осталось меньше пяти карт — `InvalidHandSize`
    /// с фактическим числом сданных карт.
    pub fn deal_hand(&mut self) -> Result<Hand, HandError> {
        let taken = self.draw_n(HAND_SIZE);
        let cards: [Card; HAND_SIZE] = taken
            .try_into()
            .map_err(|rest: Vec<Card>| HandError::InvalidHandSize(rest.len()))?;
        Hand::new(cards)
    }
}
