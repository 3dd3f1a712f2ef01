//! Сравнение рук и ошибки валидации.
//!
//! Основные операции:
//!   - `compare_hands` – сравнить две разобранные руки
//!   - `compare_hand_texts` – разобрать и сравнить две строки
//!   - `winner` – индекс сильнейшей руки из набора

pub mod comparator;
pub mod errors;

pub use comparator::{compare_hand_texts, compare_hands, ordering_to_sign, winner};
pub use errors::HandError;
