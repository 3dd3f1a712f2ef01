use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибки разбора и валидации руки.
///
/// Все ошибки возникают синхронно при разборе текста и пробрасываются
/// вызывающему без преобразований — сравнение с невалидной рукой не выполняется.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandError {
    /// Токен карты неверной длины или с неизвестным рангом/мастью.
    #[error("invalid card token `{0}`")]
    InvalidCard(String),

    /// В руке не пять карт.
    #[error("hand must contain exactly 5 cards, got {0}")]
    InvalidHandSize(usize),

    /// Рука прошла проверку карт, но один ранг встречается пять раз.
    #[error("invalid hand `{0}`: one rank occurs five times")]
    InvalidHand(String),
}
