use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::HandError;

/// Ошибки внешнего API (то, что отдаём клиенту / CLI).
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiError {
    /// Неправильный запрос (пустая строка и т.п.).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Битый токен карты.
    #[error("invalid card token `{0}`")]
    InvalidCard(String),

    /// В руке не пять карт.
    #[error("hand must contain exactly 5 cards, got {0}")]
    InvalidHandSize(usize),

    /// Рука не прошла валидацию уровня руки.
    #[error("invalid hand `{0}`: one rank occurs five times")]
    InvalidHand(String),
}

impl From<HandError> for ApiError {
    fn from(err: HandError) -> Self {
        match err {
            HandError::InvalidCard(token) => ApiError::InvalidCard(token),
            HandError::InvalidHandSize(n) => ApiError::InvalidHandSize(n),
            HandError::InvalidHand(hand) => ApiError::InvalidHand(hand),
        }
    }
}
