//! Оценщик покерных рук из пяти карт.
//!
//! Поток данных в одну сторону:
//! текст → карты (`domain`) → валидная рука → `HandRank` (`eval`) → сравнение (`engine`).
//! Ни один компонент не хранит состояние; все операции — чистые функции.
//!
//! Строковый фасад (`is_valid_hand`, `compare_poker_hands` и т.д.)
//! реэкспортирован в корне крейта.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use api::text::{
    compare_poker_hands, get_hand_suits, get_hand_values, get_hand_values_numeric_value,
    get_high_card, get_low_card, get_pair_size, has_a_pair, is_a_flush, is_a_straight,
    is_valid_hand,
};
pub use domain::{Card, Hand, Rank, Suit};
pub use engine::HandError;
pub use eval::{HandCategory, HandRank, TieBreakKey};
