use serde::{Deserialize, Serialize};

use crate::domain::hand::Hand;
use crate::engine::{compare_hands, ordering_to_sign, winner};
use crate::eval::{describe_hand, evaluate, stats};
use crate::infra::fixtures::POKER_HANDS;

use super::dto::{ComparisonDto, DealDto, FixtureDto, HandReportDto, HandStatsDto};
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Query {
    /// Проверить руку на валидность.
    Validate { hand: String },

    /// Разобрать и оценить одну руку.
    Evaluate { hand: String },

    /// Сравнить две руки.
    Compare { left: String, right: String },

    /// Прогнать эталонную таблицу пар.
    Fixtures,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryResponse {
    Valid(bool),
    Report(HandReportDto),
    Comparison(ComparisonDto),
    Fixtures(Vec<FixtureDto>),
}

/// Обработать запрос. Ошибки валидации пробрасываются как `ApiError`.
pub fn handle_query(query: Query) -> Result<QueryResponse, ApiError> {
    match query {
        Query::Validate { hand } => {
            parse_request(&hand)?;
            Ok(QueryResponse::Valid(true))
        }
        Query::Evaluate { hand } => {
            let hand = parse_request(&hand)?;
            Ok(QueryResponse::Report(build_hand_report(&hand)))
        }
        Query::Compare { left, right } => {
            let left = parse_request(&left)?;
            let right = parse_request(&right)?;
            Ok(QueryResponse::Comparison(build_comparison(&left, &right)))
        }
        Query::Fixtures => Ok(QueryResponse::Fixtures(run_fixtures()?)),
    }
}

/// Пустая строка — это ошибка запроса, а не руки.
fn parse_request(text: &str) -> Result<Hand, ApiError> {
    if text.trim().is_empty() {
        return Err(ApiError::BadRequest("empty hand".to_string()));
    }
    Ok(Hand::parse(text)?)
}

/// Сформировать DTO-отчёт по руке.
pub fn build_hand_report(hand: &Hand) -> HandReportDto {
    let rank = evaluate(hand);
    HandReportDto {
        hand: *hand,
        cards: hand.cards().to_vec(),
        category: rank.category,
        description: describe_hand(&rank),
        key: rank.key,
        stats: HandStatsDto {
            has_pair: stats::has_pair(hand),
            pair_size: stats::pair_size(hand),
            high_card: stats::high_card(hand),
            low_card: stats::low_card(hand),
            is_flush: stats::is_flush(hand),
            is_straight: stats::is_straight(hand),
        },
    }
}

pub fn build_comparison(left: &Hand, right: &Hand) -> ComparisonDto {
    ComparisonDto {
        left: build_hand_report(left),
        right: build_hand_report(right),
        result: ordering_to_sign(compare_hands(left, right)),
    }
}

/// Отчёты по раздаче в исходном порядке плюс победитель.
pub fn build_deal(hands: &[Hand]) -> DealDto {
    DealDto {
        hands: hands.iter().map(build_hand_report).collect(),
        winner: winner(hands),
    }
}

fn run_fixtures() -> Result<Vec<FixtureDto>, ApiError> {
    POKER_HANDS
        .iter()
        .map(|fx| -> Result<FixtureDto, ApiError> {
            let left = Hand::parse(fx.left)?;
            let right = Hand::parse(fx.right)?;
            Ok(FixtureDto {
                left: fx.left.to_string(),
                right: fx.right.to_string(),
                expected: ordering_to_sign(fx.expected),
                actual: ordering_to_sign(compare_hands(&left, &right)),
            })
        })
        .collect()
}
