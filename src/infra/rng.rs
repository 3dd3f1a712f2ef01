use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, SeedableRng};

use crate::domain::deck::Deck;
use crate::domain::hand::Hand;
use crate::engine::errors::HandError;

/// Источник случайности для тасования колоды.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

/// Системный RNG (`thread_rng`).
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut thread_rng());
    }
}

/// Детерминированный RNG для тестов и воспроизведения:
/// одинаковый seed — одинаковые раздачи.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// Сдать одну руку из свежей перемешанной колоды.
pub fn deal_hand(rng: &mut impl RandomSource) -> Result<Hand, HandError> {
    Deck::shuffled(rng).deal_hand()
}

/// Сдать `n` рук из одной колоды — карты между руками не повторяются.
/// Больше десяти рук из 52 карт не сдать, будет `InvalidHandSize`.
pub fn deal_hands(rng: &mut impl RandomSource, n: usize) -> Result<Vec<Hand>, HandError> {
    let mut deck = Deck::shuffled(rng);
    (0..n).map(|_| deck.deal_hand()).collect()
}
