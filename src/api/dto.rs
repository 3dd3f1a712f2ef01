use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::Hand;
use crate::eval::{HandCategory, TieBreakKey};

/// DTO разобранной и оценённой руки.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandReportDto {
    pub hand: Hand,
    pub cards: Vec<Card>,
    pub category: HandCategory,
    pub key: TieBreakKey,
    /// Например, "Full house, Q over 3".
    pub description: String,
    pub stats: HandStatsDto,
}

/// Вспомогательные показатели руки (вне каскада классификации).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandStatsDto {
    pub has_pair: bool,
    pub pair_size: u8,
    pub high_card: u8,
    pub low_card: u8,
    pub is_flush: bool,
    pub is_straight: bool,
}

/// DTO результата сравнения двух рук.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonDto {
    pub left: HandReportDto,
    pub right: HandReportDto,
    /// -1: левая слабее, 0: ничья, 1: левая сильнее.
    pub result: i8,
}

/// DTO случайной раздачи: отчёты по всем рукам и индекс лучшей.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealDto {
    pub hands: Vec<HandReportDto>,
    /// Первая из сильнейших рук; `None` только для пустой раздачи.
    pub winner: Option<usize>,
}

/// Эталонная пара рук и фактический результат сравнения.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureDto {
    pub left: String,
    pub right: String,
    pub expected: i8,
    pub actual: i8,
}
