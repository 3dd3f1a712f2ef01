//! Оценка силы руки из пяти карт.
//!
//! Основная функция:
//!   `evaluate(&Hand) -> HandRank`
//!
//! `HandRank` упорядочен полностью: сначала категория, затем ключ
//! разрешения ничьих. Вспомогательные предикаты (флеш, стрит, пары,
//! старшая/младшая карта) лежат в `stats`.

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;
pub mod stats;

pub use evaluator::evaluate;
pub use hand_rank::{describe_hand, HandCategory, HandRank, TieBreakKey};
pub use stats::{has_pair, high_card, is_flush, is_straight, low_card, pair_size, straight_high};
