//! Инфраструктура вокруг оценщика рук:
//! - RNG-реализации и сдача случайных рук;
//! - эталонная таблица пар рук для проверок и демо.

pub mod fixtures;
pub mod rng;

pub use fixtures::{Fixture, POKER_HANDS};
pub use rng::*;
